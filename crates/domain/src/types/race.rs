//! Playable races.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Race of a player character.
///
/// Declaration order is the natural sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl Race {
    pub fn all() -> &'static [Race] {
        &[
            Race::Human,
            Race::Dwarf,
            Race::Elf,
            Race::Giant,
            Race::Orc,
            Race::Troll,
            Race::Hobbit,
        ]
    }

    /// Wire and storage name, e.g. `HOBBIT`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Human => "HUMAN",
            Race::Dwarf => "DWARF",
            Race::Elf => "ELF",
            Race::Giant => "GIANT",
            Race::Orc => "ORC",
            Race::Troll => "TROLL",
            Race::Hobbit => "HOBBIT",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Race::all()
            .iter()
            .copied()
            .find(|race| race.as_str() == s)
            .ok_or_else(|| DomainError::invalid_parameter("race", format!("unknown race '{s}'")))
    }
}
