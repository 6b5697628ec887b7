//! Site configuration baked in at build time.
//!
//! Values come from `SITE_*` environment variables visible to the compiler
//! (for example via `trunk build`). Anything unset falls back to the defaults
//! below; anything malformed is a [`ConfigError`] so the app can warn and
//! fall back instead of silently misbehaving.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use behavior::submission::DEFAULT_RESET_AFTER;
use behavior::{OptionsError, Threshold};

pub const REVEAL_THRESHOLD_VAR: &str = "SITE_REVEAL_THRESHOLD";
pub const RESET_AFTER_VAR: &str = "SITE_RESET_AFTER_MS";
pub const SUBMIT_TIMEOUT_VAR: &str = "SITE_SUBMIT_TIMEOUT_MS";
pub const CONTACT_ENDPOINT_VAR: &str = "SITE_CONTACT_ENDPOINT";

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_CONTACT_ENDPOINT: &str = "/api/contact";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Threshold {
        var: &'static str,
        #[source]
        source: OptionsError,
    },
    #[error("{var}: expected a number, got {value:?}")]
    NotANumber { var: &'static str, value: String },
    #[error("{var}: must be greater than zero")]
    ZeroDuration { var: &'static str },
    #[error("{var}: must not be empty")]
    EmptyEndpoint { var: &'static str },
}

/// Tunables shared by every section through Leptos context.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Visible fraction that reveals an animated section.
    pub reveal_threshold: Threshold,
    /// Delay before a success/error message returns to idle.
    pub reset_after: Duration,
    /// Upper bound on one contact delivery.
    pub submit_timeout: Duration,
    /// Where the contact payload is posted.
    pub contact_endpoint: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: Threshold::new(DEFAULT_REVEAL_THRESHOLD).unwrap_or_default(),
            reset_after: DEFAULT_RESET_AFTER,
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Read the configuration captured by the compiler.
    ///
    /// # Errors
    ///
    /// The first malformed variable, see [`SiteConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| match var {
            REVEAL_THRESHOLD_VAR => option_env!("SITE_REVEAL_THRESHOLD"),
            RESET_AFTER_VAR => option_env!("SITE_RESET_AFTER_MS"),
            SUBMIT_TIMEOUT_VAR => option_env!("SITE_SUBMIT_TIMEOUT_MS"),
            CONTACT_ENDPOINT_VAR => option_env!("SITE_CONTACT_ENDPOINT"),
            _ => None,
        })
    }

    /// Build a configuration from a variable lookup. Unset variables keep
    /// their defaults; surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] naming the first variable that does not parse.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let get = |var: &str| lookup(var).map(str::trim);

        if let Some(raw) = get(REVEAL_THRESHOLD_VAR) {
            let value = parse_number::<f64>(REVEAL_THRESHOLD_VAR, raw)?;
            config.reveal_threshold =
                Threshold::new(value).map_err(|source| ConfigError::Threshold { var: REVEAL_THRESHOLD_VAR, source })?;
        }
        if let Some(raw) = get(RESET_AFTER_VAR) {
            config.reset_after = parse_millis(RESET_AFTER_VAR, raw)?;
        }
        if let Some(raw) = get(SUBMIT_TIMEOUT_VAR) {
            config.submit_timeout = parse_millis(SUBMIT_TIMEOUT_VAR, raw)?;
        }
        if let Some(raw) = get(CONTACT_ENDPOINT_VAR) {
            if raw.is_empty() {
                return Err(ConfigError::EmptyEndpoint { var: CONTACT_ENDPOINT_VAR });
            }
            raw.clone_into(&mut config.contact_endpoint);
        }
        Ok(config)
    }

    /// [`SiteConfig::from_build_env`], falling back to defaults with a warning.
    pub fn load() -> Self {
        Self::from_build_env().unwrap_or_else(|err| {
            log::warn!("config: {err}; using defaults");
            Self::default()
        })
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::NotANumber { var, value: raw.to_owned() })
}

fn parse_millis(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match parse_number::<u64>(var, raw)? {
        0 => Err(ConfigError::ZeroDuration { var }),
        ms => Ok(Duration::from_millis(ms)),
    }
}
