//! App Configuration
//!
//! Defaults overridable from the page's URL query, e.g.
//! `?cards=30&opacity=0.4&log=debug`.

use thiserror::Error;
use tracing::Level;
use url::form_urlencoded;

/// Number of cards generated on load
pub const DEFAULT_CARD_COUNT: usize = 20;

/// Upper bound for `?cards=`
pub const MAX_CARD_COUNT: usize = 1000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{key}` expects a non-negative integer, got `{value}`")]
    InvalidNumber { key: String, value: String },
    #[error("`cards` is limited to {max}, got {value}")]
    TooManyCards { value: usize, max: usize },
    #[error("`opacity` expects a number between 0 and 1, got `{0}`")]
    InvalidOpacity(String),
    #[error("`log` expects trace, debug, info, warn or error, got `{0}`")]
    InvalidLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub card_count: usize,
    /// Opacity of the card being dragged
    pub dragging_opacity: f64,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
            dragging_opacity: 0.0,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Parse a query string (with or without the leading `?`).
    /// Keys and values are percent-decoded.
    ///
    /// Rejected values keep their default and are reported back. Unknown
    /// keys are ignored.
    pub fn from_query(query: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "cards" => match value.parse::<usize>() {
                    Ok(n) if n <= MAX_CARD_COUNT => config.card_count = n,
                    Ok(n) => errors.push(ConfigError::TooManyCards { value: n, max: MAX_CARD_COUNT }),
                    Err(_) => errors.push(ConfigError::InvalidNumber {
                        key: key.to_string(),
                        value: value.to_string(),
                    }),
                },
                "opacity" => match value.parse::<f64>() {
                    Ok(o) if (0.0..=1.0).contains(&o) => config.dragging_opacity = o,
                    _ => errors.push(ConfigError::InvalidOpacity(value.to_string())),
                },
                "log" => match value.parse::<Level>() {
                    Ok(level) => config.log_level = level,
                    Err(_) => errors.push(ConfigError::InvalidLevel(value.to_string())),
                },
                _ => {}
            }
        }

        (config, errors)
    }

    /// Read from `window.location.search`, falling back to defaults
    pub fn from_location() -> (Self, Vec<ConfigError>) {
        let search = web_sys::window()
            .and_then(|win| win.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}
