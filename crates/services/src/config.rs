use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const BASE_URL_ENV: &str = "QUIZ_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "QUIZ_API_TIMEOUT_SECS";

/// Values taken from the command line. Each one that is set wins over its
/// environment variable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

/// Parses a timeout given in whole seconds.
///
/// # Errors
///
/// Returns `ConfigError::InvalidTimeout` for anything but an unsigned integer
/// and `ConfigError::ZeroTimeout` for `0`.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidTimeout {
            raw: raw.to_string(),
        })?;
    if secs == 0 {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(Duration::from_secs(secs))
}

/// Where the processing endpoint lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessingConfig {
    base_url: Url,
    process_url: Url,
    timeout: Duration,
}

impl ProcessingConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` for an unparseable or non-http(s) url, or a zero timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let raw = base_url.trim();
        let base_url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
            raw: raw.to_string(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                raw: raw.to_string(),
            });
        }
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        let process_url = format!("{}/process", base_url.as_str().trim_end_matches('/'));
        let process_url = Url::parse(&process_url).map_err(|source| {
            ConfigError::InvalidBaseUrl {
                raw: raw.to_string(),
                source,
            }
        })?;

        Ok(Self {
            base_url,
            process_url,
            timeout,
        })
    }

    /// Reads `QUIZ_API_BASE_URL` and `QUIZ_API_TIMEOUT_SECS`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(&ConfigOverrides::default(), |key| env::var(key).ok())
    }

    /// Picks each field from `overrides`, then `lookup`, then the default.
    ///
    /// `lookup` is only consulted for fields without an override, so a broken
    /// variable is ignored when the command line replaces it. Blank values
    /// count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an invalid url or timeout from either source.
    pub fn resolve(
        overrides: &ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let lookup_set = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = match &overrides.base_url {
            Some(url) => url.clone(),
            None => lookup_set(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };
        let timeout = match overrides.timeout {
            Some(timeout) => timeout,
            None => match lookup_set(TIMEOUT_ENV) {
                Some(raw) => parse_timeout_secs(&raw)?,
                None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
        };

        Self::new(&base_url, timeout)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn process_url(&self) -> &Url {
        &self.process_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .expect("default processing config is valid")
    }
}
