//! Field rules every stored player must satisfy.
//!
//! The validator runs on the assembled create candidate and on the merged
//! record before an update. It either accepts the whole record or rejects it
//! naming the first violated field; nothing is applied partially.

use crate::entities::{PlayerDraft, PlayerProfile};
use crate::error::DomainError;

pub const MAX_NAME_LENGTH: usize = 12;
pub const MAX_TITLE_LENGTH: usize = 30;
pub const MAX_EXPERIENCE: i64 = 10_000_000;

/// 2000-01-01T00:00:00Z, inclusive.
pub const EARLIEST_BIRTHDAY_MILLIS: i64 = 946_684_800_000;
/// 3001-01-01T00:00:00Z, exclusive.
pub const BIRTHDAY_CUTOFF_MILLIS: i64 = 32_535_216_000_000;

/// Tunable parts of the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Accept `""` as a title. Length limits apply either way.
    pub allow_empty_title: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            allow_empty_title: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    rules: ValidationRules,
}

impl Validator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// Check every rule and, if all pass, build the validated profile.
    pub fn validate(&self, draft: PlayerDraft) -> Result<PlayerProfile, DomainError> {
        self.check(&draft)?;
        PlayerProfile::restore(draft)
    }

    pub fn check(&self, draft: &PlayerDraft) -> Result<(), DomainError> {
        require_non_empty(&draft.name, "name")?;
        require_max_length(&draft.name, MAX_NAME_LENGTH, "name")?;

        if !self.rules.allow_empty_title {
            require_non_empty(&draft.title, "title")?;
        }
        require_max_length(&draft.title, MAX_TITLE_LENGTH, "title")?;

        if !(0..=MAX_EXPERIENCE).contains(&draft.experience) {
            return Err(DomainError::validation(format!(
                "experience must be between 0 and {MAX_EXPERIENCE}, got {}",
                draft.experience
            )));
        }

        if !(EARLIEST_BIRTHDAY_MILLIS..BIRTHDAY_CUTOFF_MILLIS).contains(&draft.birthday) {
            return Err(DomainError::validation(format!(
                "birthday must fall between years 2000 and 3000, got {}",
                draft.birthday
            )));
        }

        Ok(())
    }
}

fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::validation(format!(
            "{field_name} cannot be empty"
        )));
    }
    Ok(())
}

/// Length is counted in characters, not bytes.
fn require_max_length(
    value: &str,
    max: usize,
    field_name: &'static str,
) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::validation(format!(
            "{field_name} exceeds maximum length of {max}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Profession, Race};

    fn valid() -> PlayerDraft {
        PlayerDraft {
            name: "Gimli".to_string(),
            title: "Lord of the Glittering Caves".to_string(),
            race: Race::Dwarf,
            profession: Profession::Warrior,
            birthday: 1_200_000_000_000,
            banned: false,
            experience: 0,
        }
    }

    fn rejects(draft: PlayerDraft) -> bool {
        matches!(
            Validator::default().validate(draft),
            Err(DomainError::Validation(_))
        )
    }

    #[test]
    fn accepts_valid_player() {
        let profile = Validator::default().validate(valid()).unwrap();
        assert_eq!(profile.level(), 0);
    }

    #[test]
    fn name_bounds() {
        let mut draft = valid();
        draft.name = "a".repeat(12);
        assert!(!rejects(draft.clone()));

        draft.name = "a".repeat(13);
        assert!(rejects(draft.clone()));

        draft.name = String::new();
        assert!(rejects(draft));
    }

    #[test]
    fn name_length_counts_characters() {
        let mut draft = valid();
        draft.name = "Éowyn Éomund".to_string();
        assert_eq!(draft.name.chars().count(), 12);
        assert!(!rejects(draft));
    }

    #[test]
    fn title_bounds() {
        let mut draft = valid();
        draft.title = "t".repeat(30);
        assert!(!rejects(draft.clone()));

        draft.title = "t".repeat(31);
        assert!(rejects(draft));
    }

    #[test]
    fn empty_title_follows_rules() {
        let mut draft = valid();
        draft.title = String::new();
        assert!(Validator::default().validate(draft.clone()).is_ok());

        let strict = Validator::new(ValidationRules {
            allow_empty_title: false,
        });
        assert!(strict.validate(draft).is_err());
    }

    #[test]
    fn experience_bounds() {
        let mut draft = valid();
        draft.experience = MAX_EXPERIENCE;
        assert!(!rejects(draft.clone()));

        draft.experience = MAX_EXPERIENCE + 1;
        assert!(rejects(draft.clone()));

        draft.experience = -1;
        assert!(rejects(draft));
    }

    #[test]
    fn birthday_window_is_half_open() {
        let mut draft = valid();
        draft.birthday = EARLIEST_BIRTHDAY_MILLIS;
        assert!(!rejects(draft.clone()));

        draft.birthday = EARLIEST_BIRTHDAY_MILLIS - 1;
        assert!(rejects(draft.clone()));

        draft.birthday = BIRTHDAY_CUTOFF_MILLIS - 1;
        assert!(!rejects(draft.clone()));

        draft.birthday = BIRTHDAY_CUTOFF_MILLIS;
        assert!(rejects(draft));
    }

    #[test]
    fn window_constants_match_calendar() {
        use chrono::{TimeZone, Utc};
        let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let cutoff = Utc.with_ymd_and_hms(3001, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(start.timestamp_millis(), EARLIEST_BIRTHDAY_MILLIS);
        assert_eq!(cutoff.timestamp_millis(), BIRTHDAY_CUTOFF_MILLIS);
    }
}
