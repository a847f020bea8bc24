//! Player entity - a roster character with derived level stats
//!
//! # Design
//!
//! - **Private fields**: `level` and `until_next_level` can only change together
//!   with `experience`, so there is no way to hold an inconsistent record.
//! - **Two input shapes**: [`PlayerInput`] is what a caller sends (every field
//!   optional), [`PlayerDraft`] is a fully populated candidate awaiting validation.
//! - **Valid by construction**: a [`PlayerProfile`] is only produced by the
//!   validator or by restoring data the store already accepted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PlayerId;
use crate::leveling::LevelProgress;
use crate::types::{Profession, Race};

// =============================================================================
// Input
// =============================================================================

/// Caller-supplied player fields.
///
/// Used as the create candidate (where every field but `banned` is required)
/// and as the partial for update (where every field is optional). Derived
/// stats and `id` are not part of the input; such keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInput {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Epoch milliseconds
    pub birthday: Option<i64>,
    pub banned: Option<bool>,
    pub experience: Option<i64>,
}

impl PlayerInput {
    /// Turn a create candidate into a draft, requiring every mandatory field.
    pub fn into_draft(self) -> Result<PlayerDraft, DomainError> {
        Ok(PlayerDraft {
            name: require(self.name, "name")?,
            title: require(self.title, "title")?,
            race: require(self.race, "race")?,
            profession: require(self.profession, "profession")?,
            birthday: require(self.birthday, "birthday")?,
            banned: self.banned.unwrap_or(false),
            experience: require(self.experience, "experience")?,
        })
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::validation(format!("{field} is required")))
}

// =============================================================================
// Draft
// =============================================================================

/// A fully populated, not yet validated player record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDraft {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    /// Epoch milliseconds
    pub birthday: i64,
    pub banned: bool,
    pub experience: i64,
}

impl PlayerDraft {
    /// Overlay every field the caller supplied; omitted fields keep their value.
    pub fn merge(&mut self, input: PlayerInput) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(title) = input.title {
            self.title = title;
        }
        if let Some(race) = input.race {
            self.race = race;
        }
        if let Some(profession) = input.profession {
            self.profession = profession;
        }
        if let Some(birthday) = input.birthday {
            self.birthday = birthday;
        }
        if let Some(banned) = input.banned {
            self.banned = banned;
        }
        if let Some(experience) = input.experience {
            self.experience = experience;
        }
    }
}

// =============================================================================
// Profile
// =============================================================================

/// Validated player data without an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    name: String,
    title: String,
    race: Race,
    profession: Profession,
    experience: u32,
    level: u32,
    until_next_level: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    birthday: DateTime<Utc>,
    banned: bool,
}

impl PlayerProfile {
    /// Rebuild a profile from a draft, deriving level stats from experience.
    ///
    /// Only representability is checked here (experience fits, birthday is a
    /// real instant); field rules belong to the validator.
    pub fn restore(draft: PlayerDraft) -> Result<Self, DomainError> {
        let experience = u32::try_from(draft.experience).map_err(|_| {
            DomainError::validation(format!("experience {} out of range", draft.experience))
        })?;
        let birthday = DateTime::from_timestamp_millis(draft.birthday).ok_or_else(|| {
            DomainError::validation(format!("birthday {} out of range", draft.birthday))
        })?;
        let progress = LevelProgress::for_experience(experience);

        Ok(Self {
            name: draft.name,
            title: draft.title,
            race: draft.race,
            profession: draft.profession,
            experience,
            level: progress.level,
            until_next_level: progress.until_next_level,
            birthday,
            banned: draft.banned,
        })
    }

    pub fn to_draft(&self) -> PlayerDraft {
        PlayerDraft {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race,
            profession: self.profession,
            birthday: self.birthday.timestamp_millis(),
            banned: self.banned,
            experience: i64::from(self.experience),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn race(&self) -> Race {
        self.race
    }

    #[inline]
    pub fn profession(&self) -> Profession {
        self.profession
    }

    #[inline]
    pub fn experience(&self) -> u32 {
        self.experience
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn until_next_level(&self) -> u32 {
        self.until_next_level
    }

    #[inline]
    pub fn birthday(&self) -> DateTime<Utc> {
        self.birthday
    }

    #[inline]
    pub fn banned(&self) -> bool {
        self.banned
    }
}

// =============================================================================
// Player
// =============================================================================

/// A stored player: a profile plus the identity the store assigned to it.
///
/// # Invariants
///
/// - `id` never changes once assigned
/// - `level` and `until_next_level` always match `experience`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: PlayerId,
    #[serde(flatten)]
    profile: PlayerProfile,
}

impl Player {
    pub fn new(id: PlayerId, profile: PlayerProfile) -> Self {
        Self { id, profile }
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// Replace everything except the identity.
    pub fn replace_profile(&mut self, profile: PlayerProfile) {
        self.profile = profile;
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.profile.name()
    }

    #[inline]
    pub fn title(&self) -> &str {
        self.profile.title()
    }

    #[inline]
    pub fn race(&self) -> Race {
        self.profile.race()
    }

    #[inline]
    pub fn profession(&self) -> Profession {
        self.profile.profession()
    }

    #[inline]
    pub fn experience(&self) -> u32 {
        self.profile.experience()
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.profile.level()
    }

    #[inline]
    pub fn until_next_level(&self) -> u32 {
        self.profile.until_next_level()
    }

    #[inline]
    pub fn birthday(&self) -> DateTime<Utc> {
        self.profile.birthday()
    }

    #[inline]
    pub fn banned(&self) -> bool {
        self.profile.banned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PlayerDraft {
        PlayerDraft {
            name: "Frodo".to_string(),
            title: "Ring-bearer".to_string(),
            race: Race::Hobbit,
            profession: Profession::Rogue,
            birthday: 1_000_000_000_000,
            banned: false,
            experience: 350,
        }
    }

    #[test]
    fn create_candidate_requires_mandatory_fields() {
        let input = PlayerInput {
            name: Some("Sam".to_string()),
            ..Default::default()
        };
        let err = input.into_draft().unwrap_err();
        assert_eq!(err, DomainError::validation("title is required"));
    }

    #[test]
    fn banned_defaults_to_false() {
        let input = PlayerInput {
            name: Some("Sam".to_string()),
            title: Some(String::new()),
            race: Some(Race::Hobbit),
            profession: Some(Profession::Warrior),
            birthday: Some(1_000_000_000_000),
            banned: None,
            experience: Some(0),
        };
        assert!(!input.into_draft().unwrap().banned);
    }

    #[test]
    fn merge_only_overrides_supplied_fields() {
        let mut merged = draft();
        merged.merge(PlayerInput {
            title: Some("Mayor".to_string()),
            banned: Some(true),
            ..Default::default()
        });

        let original = draft();
        assert_eq!(merged.name, original.name);
        assert_eq!(merged.race, original.race);
        assert_eq!(merged.experience, original.experience);
        assert_eq!(merged.title, "Mayor");
        assert!(merged.banned);
    }

    #[test]
    fn restore_derives_level_from_experience() {
        let profile = PlayerProfile::restore(draft()).unwrap();
        assert_eq!(profile.level(), 2);
        assert_eq!(profile.until_next_level(), 250);
        assert_eq!(profile.to_draft(), draft());
    }

    #[test]
    fn restore_rejects_negative_experience() {
        let mut bad = draft();
        bad.experience = -1;
        assert!(matches!(
            PlayerProfile::restore(bad),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn serializes_flat_camel_case_with_millisecond_birthday() {
        let player = Player::new(
            PlayerId::from_trusted(7),
            PlayerProfile::restore(draft()).unwrap(),
        );
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Frodo");
        assert_eq!(json["race"], "HOBBIT");
        assert_eq!(json["untilNextLevel"], 250);
        assert_eq!(json["birthday"], 1_000_000_000_000_i64);
        assert_eq!(json["banned"], false);
    }

    #[test]
    fn input_ignores_derived_and_identity_keys() {
        let input: PlayerInput = serde_json::from_str(
            r#"{"id": 5, "name": "Pippin", "level": 99, "untilNextLevel": 1, "experience": 10}"#,
        )
        .unwrap();
        assert_eq!(input.name.as_deref(), Some("Pippin"));
        assert_eq!(input.experience, Some(10));
    }
}
