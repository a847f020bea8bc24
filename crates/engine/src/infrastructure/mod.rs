//! Infrastructure implementations.
//!
//! Store adapters behind the [`ports::PlayerRepo`] port, plus configuration.

pub mod config;
pub mod memory;
pub mod ports;
pub mod sqlite;
