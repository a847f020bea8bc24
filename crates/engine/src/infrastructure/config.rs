//! Engine configuration read from the environment.

use std::str::FromStr;

use roster_domain::{ValidationRules, DEFAULT_PAGE_SIZE};

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_PLAYER_DB: &str = "players.db";

/// Which store backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreKind {
    #[default]
    Sqlite,
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store '{other}'")),
        }
    }
}

/// Browser origins allowed to call the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsOrigins {
    /// No CORS layer is installed.
    #[default]
    Disabled,
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// `*` allows any origin; otherwise a comma-separated list. Blank entries are skipped.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == "*" {
            return Self::Any;
        }

        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            Self::Disabled
        } else {
            Self::List(origins)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub store: StoreKind,
    pub player_db: String,
    pub rules: ValidationRules,
    pub default_page_size: usize,
    pub cors_origins: CorsOrigins,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            store: StoreKind::default(),
            player_db: DEFAULT_PLAYER_DB.to_string(),
            rules: ValidationRules::default(),
            default_page_size: DEFAULT_PAGE_SIZE,
            cors_origins: CorsOrigins::default(),
        }
    }
}

impl EngineConfig {
    /// Read `SERVER_HOST`, `SERVER_PORT` (or `PORT`), `PLAYER_STORE`,
    /// `PLAYER_DB`, `ALLOW_EMPTY_TITLE`, `DEFAULT_PAGE_SIZE` and
    /// `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Values that fail to parse keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .map(|raw| parse_or("SERVER_PORT", &raw, defaults.server_port))
            .unwrap_or(defaults.server_port);

        let default_page_size = match lookup("DEFAULT_PAGE_SIZE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "DEFAULT_PAGE_SIZE must be a positive integer, using default"
                    );
                    defaults.default_page_size
                }
            },
            None => defaults.default_page_size,
        };

        Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            store: lookup("PLAYER_STORE")
                .map(|raw| parse_or("PLAYER_STORE", &raw, defaults.store))
                .unwrap_or(defaults.store),
            player_db: lookup("PLAYER_DB").unwrap_or(defaults.player_db),
            rules: ValidationRules {
                allow_empty_title: lookup("ALLOW_EMPTY_TITLE")
                    .map(|raw| {
                        parse_or("ALLOW_EMPTY_TITLE", &raw, defaults.rules.allow_empty_title)
                    })
                    .unwrap_or(defaults.rules.allow_empty_title),
            },
            default_page_size,
            cors_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| CorsOrigins::parse(&raw))
                .unwrap_or_default(),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: &str, default: T) -> T {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, "Unparseable configuration value, using default");
            default
        }
    }
}
