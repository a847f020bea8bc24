//! Composable filter predicate over [`Player`].
//!
//! A predicate is a conjunction of [`Condition`]s. Conditions are plain data
//! rather than closures so a predicate can be compared, logged, or translated
//! into a store-side query.

use std::fmt;

use crate::entities::Player;
use crate::query::params::PlayerFilter;
use crate::types::{Profession, Race};

/// A single comparison against one player field. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    NameContains(String),
    TitleContains(String),
    RaceIs(Race),
    ProfessionIs(Profession),
    /// Birthday at or after, epoch milliseconds
    BornFrom(i64),
    /// Birthday at or before, epoch milliseconds
    BornUntil(i64),
    BannedIs(bool),
    ExperienceAtLeast(i64),
    ExperienceAtMost(i64),
    LevelAtLeast(i64),
    LevelAtMost(i64),
}

impl Condition {
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            Condition::NameContains(needle) => player.name().contains(needle.as_str()),
            Condition::TitleContains(needle) => player.title().contains(needle.as_str()),
            Condition::RaceIs(race) => player.race() == *race,
            Condition::ProfessionIs(profession) => player.profession() == *profession,
            Condition::BornFrom(millis) => player.birthday().timestamp_millis() >= *millis,
            Condition::BornUntil(millis) => player.birthday().timestamp_millis() <= *millis,
            Condition::BannedIs(banned) => player.banned() == *banned,
            Condition::ExperienceAtLeast(min) => i64::from(player.experience()) >= *min,
            Condition::ExperienceAtMost(max) => i64::from(player.experience()) <= *max,
            Condition::LevelAtLeast(min) => i64::from(player.level()) >= *min,
            Condition::LevelAtMost(max) => i64::from(player.level()) <= *max,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::NameContains(s) => write!(f, "name contains {s:?}"),
            Condition::TitleContains(s) => write!(f, "title contains {s:?}"),
            Condition::RaceIs(race) => write!(f, "race = {race}"),
            Condition::ProfessionIs(profession) => write!(f, "profession = {profession}"),
            Condition::BornFrom(millis) => write!(f, "birthday >= {millis}"),
            Condition::BornUntil(millis) => write!(f, "birthday <= {millis}"),
            Condition::BannedIs(banned) => write!(f, "banned = {banned}"),
            Condition::ExperienceAtLeast(n) => write!(f, "experience >= {n}"),
            Condition::ExperienceAtMost(n) => write!(f, "experience <= {n}"),
            Condition::LevelAtLeast(n) => write!(f, "level >= {n}"),
            Condition::LevelAtMost(n) => write!(f, "level <= {n}"),
        }
    }
}

/// Logical AND of conditions. The empty predicate matches every player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerPredicate {
    conditions: Vec<Condition>,
}

impl PlayerPredicate {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn matches(&self, player: &Player) -> bool {
        self.conditions.iter().all(|c| c.matches(player))
    }
}

impl From<&PlayerFilter> for PlayerPredicate {
    fn from(filter: &PlayerFilter) -> Self {
        // Name and title are always constrained; "" is contained in every string.
        let mut predicate = PlayerPredicate::any()
            .and(Condition::NameContains(filter.name.clone()))
            .and(Condition::TitleContains(filter.title.clone()));

        let optional = [
            filter.race.map(Condition::RaceIs),
            filter.profession.map(Condition::ProfessionIs),
            filter.after.map(Condition::BornFrom),
            filter.before.map(Condition::BornUntil),
            filter.banned.map(Condition::BannedIs),
            filter.min_experience.map(Condition::ExperienceAtLeast),
            filter.max_experience.map(Condition::ExperienceAtMost),
            filter.min_level.map(Condition::LevelAtLeast),
            filter.max_level.map(Condition::LevelAtMost),
        ];
        for condition in optional.into_iter().flatten() {
            predicate = predicate.and(condition);
        }
        predicate
    }
}

impl fmt::Display for PlayerPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            return f.write_str("true");
        }
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}
