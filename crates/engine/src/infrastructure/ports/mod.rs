//! Port traits for infrastructure boundaries.
//!
//! The player store is the only abstraction the engine depends on; the
//! in-memory and SQLite adapters both implement it.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::PlayerRepo;

#[cfg(test)]
pub use repos::MockPlayerRepo;
