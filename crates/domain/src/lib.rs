//! Roster domain: the player entity and the rules around it.
//!
//! Pure types and functions only. Storage and transport live in the engine.

pub mod entities;
pub mod error;
pub mod ids;
pub mod leveling;
pub mod query;
pub mod types;
pub mod validation;

pub use entities::{Player, PlayerDraft, PlayerInput, PlayerProfile};
pub use error::DomainError;
pub use ids::PlayerId;
pub use leveling::LevelProgress;
pub use query::{
    Condition, PageWindow, PlayerFilter, PlayerOrder, PlayerPredicate, PlayerQuery,
    DEFAULT_PAGE_SIZE,
};
pub use types::{Profession, Race};
pub use validation::{ValidationRules, Validator};
