//! Player management operations.

use std::collections::HashMap;
use std::sync::Arc;

use roster_domain::query::executor;
use roster_domain::{
    Player, PlayerFilter, PlayerId, PlayerInput, PlayerOrder, PlayerPredicate, PlayerQuery,
    Validator,
};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

use super::PlayerError;

pub struct PlayerManagement {
    player: Arc<dyn PlayerRepo>,
    validator: Validator,
    default_page_size: usize,
}

impl PlayerManagement {
    pub fn new(
        player: Arc<dyn PlayerRepo>,
        validator: Validator,
        default_page_size: usize,
    ) -> Self {
        Self {
            player,
            validator,
            default_page_size,
        }
    }

    /// Filtered, sorted page of players.
    pub async fn list(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<Vec<Player>, PlayerError> {
        let query = PlayerQuery::from_params_with_page_size(params, self.default_page_size)
            .inspect_err(|e| tracing::debug!(error = %e, "Rejected list parameters"))?;

        let players = self.player.scan_all().await?;
        let scanned = players.len();
        let page = executor::list(players, &query);

        tracing::debug!(
            scanned,
            returned = page.len(),
            order = %query.order,
            "Listed players"
        );
        Ok(page)
    }

    /// Number of players matching the filters. Paging keys are ignored.
    pub async fn count(&self, params: &HashMap<String, String>) -> Result<usize, PlayerError> {
        let filter = PlayerFilter::from_params(params)
            .inspect_err(|e| tracing::debug!(error = %e, "Rejected count parameters"))?;
        // order has no effect on a count but must still be well formed
        PlayerOrder::from_params(params)?;

        let predicate = PlayerPredicate::from(&filter);
        let players = self.player.scan_all().await?;
        let matched = executor::count(&players, &predicate);

        tracing::debug!(matched, predicate = %predicate, "Counted players");
        Ok(matched)
    }

    pub async fn create(&self, input: PlayerInput) -> Result<Player, PlayerError> {
        let draft = input.into_draft()?;
        let profile = self
            .validator
            .validate(draft)
            .inspect_err(|e| tracing::debug!(error = %e, "Rejected new player"))?;

        let player = self.player.insert(profile).await?;
        tracing::info!(player_id = %player.id(), level = player.level(), "Created player");
        Ok(player)
    }

    pub async fn get(&self, raw_id: i64) -> Result<Player, PlayerError> {
        let id = PlayerId::new(raw_id)?;
        self.player
            .find_by_id(id)
            .await?
            .ok_or(PlayerError::IdNotFound(id))
    }

    /// Overlay the supplied fields on the stored record, validate, then persist.
    ///
    /// The merge happens on a copy; a rejected update leaves the stored
    /// record untouched.
    pub async fn update(&self, raw_id: i64, input: PlayerInput) -> Result<Player, PlayerError> {
        let id = PlayerId::new(raw_id)?;
        let mut player = self
            .player
            .find_by_id(id)
            .await?
            .ok_or(PlayerError::IdNotFound(id))?;

        let mut draft = player.profile().to_draft();
        draft.merge(input);
        let profile = self.validator.validate(draft).inspect_err(|e| {
            tracing::debug!(player_id = %id, error = %e, "Rejected player update")
        })?;

        player.replace_profile(profile);
        self.player
            .save(&player)
            .await
            .map_err(|e| not_found_as(e, id))?;

        tracing::info!(player_id = %id, level = player.level(), "Updated player");
        Ok(player)
    }

    pub async fn delete(&self, raw_id: i64) -> Result<(), PlayerError> {
        let id = PlayerId::new(raw_id)?;
        if !self.player.exists_by_id(id).await? {
            return Err(PlayerError::IdNotFound(id));
        }

        self.player
            .delete_by_id(id)
            .await
            .map_err(|e| not_found_as(e, id))?;

        tracing::info!(player_id = %id, "Deleted player");
        Ok(())
    }
}

/// A record removed between the existence check and the write.
fn not_found_as(err: RepoError, id: PlayerId) -> PlayerError {
    if err.is_not_found() {
        PlayerError::IdNotFound(id)
    } else {
        tracing::warn!(player_id = %id, error = %err, "Player store write failed");
        PlayerError::Repo(err)
    }
}
