//! Parameter parsing: string-keyed request parameters into typed directives.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::types::{Profession, Race};

pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Recognized parameter keys. Anything else in the map is ignored.
pub mod keys {
    pub const NAME: &str = "name";
    pub const TITLE: &str = "title";
    pub const RACE: &str = "race";
    pub const PROFESSION: &str = "profession";
    pub const AFTER: &str = "after";
    pub const BEFORE: &str = "before";
    pub const BANNED: &str = "banned";
    pub const MIN_EXPERIENCE: &str = "minExperience";
    pub const MAX_EXPERIENCE: &str = "maxExperience";
    pub const MIN_LEVEL: &str = "minLevel";
    pub const MAX_LEVEL: &str = "maxLevel";
    pub const ORDER: &str = "order";
    pub const PAGE_NUMBER: &str = "pageNumber";
    pub const PAGE_SIZE: &str = "pageSize";
}

// =============================================================================
// Sort order
// =============================================================================

/// Field the result set is sorted by, always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Level,
    Birthday,
}

impl PlayerOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerOrder::Id => "ID",
            PlayerOrder::Name => "NAME",
            PlayerOrder::Experience => "EXPERIENCE",
            PlayerOrder::Level => "LEVEL",
            PlayerOrder::Birthday => "BIRTHDAY",
        }
    }

    /// Resolve the `order` key, defaulting to [`PlayerOrder::Id`].
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, DomainError> {
        Ok(parse_optional(params, keys::ORDER)?.unwrap_or_default())
    }
}

impl fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ID" => Ok(PlayerOrder::Id),
            "NAME" => Ok(PlayerOrder::Name),
            "EXPERIENCE" => Ok(PlayerOrder::Experience),
            "LEVEL" => Ok(PlayerOrder::Level),
            "BIRTHDAY" => Ok(PlayerOrder::Birthday),
            _ => Err(DomainError::invalid_parameter(
                keys::ORDER,
                format!("unknown order '{s}'"),
            )),
        }
    }
}

// =============================================================================
// Page window
// =============================================================================

/// Slice of the sorted result set to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl PageWindow {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            offset: page_number.saturating_mul(page_size),
            limit: page_size,
        }
    }

    /// A window covering every record.
    #[cfg(test)]
    pub(crate) fn unbounded() -> Self {
        Self {
            offset: 0,
            limit: usize::MAX,
        }
    }

    pub fn from_params(
        params: &HashMap<String, String>,
        default_page_size: usize,
    ) -> Result<Self, DomainError> {
        let page_number: i64 = parse_optional(params, keys::PAGE_NUMBER)?.unwrap_or(0);
        let page_number = usize::try_from(page_number).map_err(|_| {
            DomainError::invalid_parameter(keys::PAGE_NUMBER, "must not be negative")
        })?;

        let page_size = match parse_optional::<i64>(params, keys::PAGE_SIZE)? {
            None => default_page_size,
            Some(size) if size > 0 => usize::try_from(size).unwrap_or(usize::MAX),
            Some(_) => {
                return Err(DomainError::invalid_parameter(
                    keys::PAGE_SIZE,
                    "must be positive",
                ))
            }
        };

        Ok(Self::new(page_number, page_size))
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Resolved filters. Bounds are inclusive; `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    /// Substring the name must contain; empty matches everything
    pub name: String,
    /// Substring the title must contain; empty matches everything
    pub title: String,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Earliest birthday, epoch milliseconds
    pub after: Option<i64>,
    /// Latest birthday, epoch milliseconds
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i64>,
    pub max_experience: Option<i64>,
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,
}

impl PlayerFilter {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, DomainError> {
        Ok(Self {
            name: params.get(keys::NAME).cloned().unwrap_or_default(),
            title: params.get(keys::TITLE).cloned().unwrap_or_default(),
            race: parse_optional(params, keys::RACE)?,
            profession: parse_optional(params, keys::PROFESSION)?,
            after: parse_optional(params, keys::AFTER)?,
            before: parse_optional(params, keys::BEFORE)?,
            banned: parse_banned(params)?,
            min_experience: parse_optional(params, keys::MIN_EXPERIENCE)?,
            max_experience: parse_optional(params, keys::MAX_EXPERIENCE)?,
            min_level: parse_optional(params, keys::MIN_LEVEL)?,
            max_level: parse_optional(params, keys::MAX_LEVEL)?,
        })
    }
}

// =============================================================================
// Query directive
// =============================================================================

/// Everything needed to run a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerQuery {
    pub filter: PlayerFilter,
    pub order: PlayerOrder,
    pub window: PageWindow,
}

impl PlayerQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, DomainError> {
        Self::from_params_with_page_size(params, DEFAULT_PAGE_SIZE)
    }

    /// Parse with a deployment-specific page size for requests that omit `pageSize`.
    pub fn from_params_with_page_size(
        params: &HashMap<String, String>,
        default_page_size: usize,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            filter: PlayerFilter::from_params(params)?,
            order: PlayerOrder::from_params(params)?,
            window: PageWindow::from_params(params, default_page_size)?,
        })
    }
}

// =============================================================================
// Helpers
// =============================================================================

trait ParamValue: Sized {
    fn parse_param(key: &str, raw: &str) -> Result<Self, DomainError>;
}

impl ParamValue for i64 {
    fn parse_param(key: &str, raw: &str) -> Result<Self, DomainError> {
        raw.parse().map_err(|_| {
            DomainError::invalid_parameter(key, format!("expected an integer, got '{raw}'"))
        })
    }
}

impl ParamValue for Race {
    fn parse_param(_key: &str, raw: &str) -> Result<Self, DomainError> {
        raw.parse()
    }
}

impl ParamValue for Profession {
    fn parse_param(_key: &str, raw: &str) -> Result<Self, DomainError> {
        raw.parse()
    }
}

impl ParamValue for PlayerOrder {
    fn parse_param(_key: &str, raw: &str) -> Result<Self, DomainError> {
        raw.parse()
    }
}

fn parse_optional<T: ParamValue>(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<Option<T>, DomainError> {
    params
        .get(key)
        .map(|raw| T::parse_param(key, raw))
        .transpose()
}

fn parse_banned(params: &HashMap<String, String>) -> Result<Option<bool>, DomainError> {
    let Some(raw) = params.get(keys::BANNED) else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(Some(true)),
        "false" => Ok(Some(false)),
        _ => Err(DomainError::invalid_parameter(
            keys::BANNED,
            format!("expected true or false, got '{raw}'"),
        )),
    }
}
