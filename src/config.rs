//! Transport configuration baked in at build time.
//!
//! The WASM bundle has no process environment at runtime, so values are
//! captured with `option_env!` when the crate is compiled:
//!
//! - `ADMIN_API_URL`: API base URL; empty means same origin
//! - `ADMIN_API_WITH_CREDENTIALS`: `true` (default) or `false`
//! - `ADMIN_API_TIMEOUT_MS`: request timeout; absent or `0` disables it

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_WITH_CREDENTIALS: bool = true;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid ADMIN_API_WITH_CREDENTIALS: {0}")]
    InvalidFlag(String),
    #[error("invalid ADMIN_API_TIMEOUT_MS: {0}")]
    InvalidTimeout(String),
}

/// Opaque HTTP client settings shared by every API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub with_credentials: bool,
    pub timeout_ms: Option<u32>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: String::new(), with_credentials: DEFAULT_WITH_CREDENTIALS, timeout_ms: None }
    }
}

impl ApiConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a flag or timeout fails to parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("ADMIN_API_URL"),
            option_env!("ADMIN_API_WITH_CREDENTIALS"),
            option_env!("ADMIN_API_TIMEOUT_MS"),
        )
    }

    /// Build config from raw variable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a flag or timeout fails to parse.
    pub fn from_vars(
        base_url: Option<&str>,
        with_credentials: Option<&str>,
        timeout_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.unwrap_or_default().trim().trim_end_matches('/').to_owned();
        let with_credentials = match with_credentials {
            Some(raw) => parse_flag(raw)?,
            None => DEFAULT_WITH_CREDENTIALS,
        };
        let timeout_ms = match timeout_ms {
            Some(raw) => parse_timeout(raw)?,
            None => None,
        };
        Ok(Self { base_url, with_credentials, timeout_ms })
    }

    /// Startup loader: invalid values fall back to defaults with a warning.
    pub fn load() -> Self {
        match Self::from_build_env() {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("{e}; using default API config");
                Self::default()
            }
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(raw.to_owned())),
    }
}

fn parse_timeout(raw: &str) -> Result<Option<u32>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(0) => Ok(None),
        Ok(ms) => Ok(Some(ms)),
        Err(_) => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
