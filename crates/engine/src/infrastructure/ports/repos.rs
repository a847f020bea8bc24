//! Repository port traits for database access.

use async_trait::async_trait;
use roster_domain::{Player, PlayerId, PlayerProfile};

use super::error::RepoError;

// =============================================================================
// Player Storage
// =============================================================================

/// Storage for the player roster.
///
/// Implementations assign ids on insert, never reuse a deleted id, and
/// return scans in ascending id order (the "store order" ties sort by).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, RepoError>;
    async fn exists_by_id(&self, id: PlayerId) -> Result<bool, RepoError>;

    /// Every stored player, ascending by id.
    async fn scan_all(&self) -> Result<Vec<Player>, RepoError>;

    /// Persist a new player and return it with its assigned id.
    async fn insert(&self, profile: PlayerProfile) -> Result<Player, RepoError>;

    /// Replace an existing player, keeping its id.
    ///
    /// Returns `RepoError::NotFound` if the id is not stored.
    async fn save(&self, player: &Player) -> Result<(), RepoError>;

    /// Returns `RepoError::NotFound` if the id is not stored.
    async fn delete_by_id(&self, id: PlayerId) -> Result<(), RepoError>;
}
