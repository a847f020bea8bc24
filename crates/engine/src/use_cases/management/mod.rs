//! Management use cases for CRUD-style operations.
//!
//! These use cases keep HTTP handlers thin while coordinating the store and
//! the domain rules.

mod player;

use roster_domain::{DomainError, PlayerId};

use crate::infrastructure::ports::RepoError;

pub use player::PlayerManagement;

/// Error type for player management operations.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Invalid parameter {key}: {reason}")]
    InvalidParameter { key: String, reason: String },
    #[error("Invalid ID: {0}")]
    InvalidId(String),
    #[error("Player not found: {0}")]
    IdNotFound(PlayerId),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl From<DomainError> for PlayerError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::ValidationFailed(msg),
            DomainError::InvalidId(raw) => Self::InvalidId(raw),
            DomainError::InvalidParameter { key, reason } => {
                Self::InvalidParameter { key, reason }
            }
        }
    }
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub player: PlayerManagement,
}

impl ManagementUseCases {
    pub fn new(player: PlayerManagement) -> Self {
        Self { player }
    }
}
