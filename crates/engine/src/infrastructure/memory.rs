//! In-memory player store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use roster_domain::{Player, PlayerId, PlayerProfile};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{PlayerRepo, RepoError};

#[derive(Default)]
struct Roster {
    players: BTreeMap<PlayerId, Player>,
    last_id: i64,
}

/// Ordered map keyed by id with a monotonic id sequence.
///
/// Deleted ids are never handed out again.
#[derive(Default)]
pub struct InMemoryPlayerRepo {
    roster: RwLock<Roster>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        Ok(self.roster.read().await.players.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: PlayerId) -> Result<bool, RepoError> {
        Ok(self.roster.read().await.players.contains_key(&id))
    }

    async fn scan_all(&self) -> Result<Vec<Player>, RepoError> {
        Ok(self.roster.read().await.players.values().cloned().collect())
    }

    async fn insert(&self, profile: PlayerProfile) -> Result<Player, RepoError> {
        let mut roster = self.roster.write().await;
        roster.last_id += 1;
        let player = Player::new(PlayerId::from_trusted(roster.last_id), profile);
        roster.players.insert(player.id(), player.clone());
        Ok(player)
    }

    async fn save(&self, player: &Player) -> Result<(), RepoError> {
        let mut roster = self.roster.write().await;
        match roster.players.get_mut(&player.id()) {
            Some(stored) => {
                *stored = player.clone();
                Ok(())
            }
            None => Err(RepoError::not_found("Player", player.id())),
        }
    }

    async fn delete_by_id(&self, id: PlayerId) -> Result<(), RepoError> {
        self.roster
            .write()
            .await
            .players
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Player", id))
    }
}
