use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned player identity. Always positive once issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    /// Validate a raw id. Anything below 1 can never name a stored player.
    pub fn new(raw: i64) -> Result<Self, DomainError> {
        if raw < 1 {
            return Err(DomainError::invalid_id(raw.to_string()));
        }
        Ok(Self(raw))
    }

    /// Wrap an id the store has already issued.
    pub fn from_trusted(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_id(s.to_string()))?;
        Self::new(raw)
    }
}

impl From<PlayerId> for i64 {
    fn from(value: PlayerId) -> Self {
        value.0
    }
}
