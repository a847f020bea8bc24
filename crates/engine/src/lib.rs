//! Roster Engine library.
//!
//! This crate contains the server side of the player roster.
//!
//! ## Structure
//!
//! - `use_cases/` - Player management over the store port
//! - `infrastructure/` - Store port, in-memory and SQLite adapters, configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
