//! Use cases - User story orchestration.
//!
//! Use cases sit between the HTTP layer and the store ports.

pub mod management;

pub use management::ManagementUseCases;
