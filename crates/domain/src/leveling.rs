//! Experience to level derivation.
//!
//! Reaching level `L` costs `50 * L * (L + 1)` total experience, so the
//! thresholds run 0, 100, 300, 600, 1000, ... and each level costs 100 more
//! than the one before it. Equivalently:
//!
//! ```text
//! level          = floor((sqrt(2500 + 200 * experience) - 50) / 100)
//! untilNextLevel = 50 * (level + 1) * (level + 2) - experience
//! ```
//!
//! Everything is computed in integers so boundary values land on the
//! correct level.

use serde::{Deserialize, Serialize};

/// Derived level stats for a given amount of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: u32,
    pub until_next_level: u32,
}

impl LevelProgress {
    pub fn for_experience(experience: u32) -> Self {
        let experience = u64::from(experience);
        let level = (isqrt(2500 + 200 * experience) - 50) / 100;
        let until_next_level = threshold(level + 1) - experience;

        Self {
            level: saturate(level),
            until_next_level: saturate(until_next_level),
        }
    }
}

/// Total experience required to reach `level`.
pub fn threshold(level: u64) -> u64 {
    50 * level * (level + 1)
}

fn isqrt(n: u64) -> u64 {
    // f64 gets within one of the true root for every input we can see here.
    let mut root = (n as f64).sqrt() as u64;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
