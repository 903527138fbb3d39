// src/config.rs
//! Runtime configuration: environment first, then an optional TOML file,
//! then compiled-in defaults.

use secrecy::SecretString;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::filter::{FilterPolicy, ATTRIBUTION_BUDGET};
use crate::pipeline::DEFAULT_MAX_ATTEMPTS;
use crate::publish::slack::DEFAULT_SLACK_API_BASE;
use crate::source::http::DEFAULT_FETCH_TIMEOUT_SECS;
use crate::source::{default_providers, Provider};
use crate::theme::Theme;
use crate::types::{DEFAULT_MAX_DISPLAY_LEN, SEPARATOR};

// --- env names & defaults ---
pub const ENV_CONFIG_PATH: &str = "QUOTE_STATUS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/quote_status.toml";
pub const ENV_SLACK_TOKEN: &str = "SLACK_TOKEN";
pub const ENV_DRY_RUN: &str = "QUOTE_STATUS_DRY_RUN";
pub const ENV_SLACK_API_BASE: &str = "SLACK_API_BASE";

/// Smallest display length that still leaves room for some quote text.
const MIN_DISPLAY_LEN: usize = ATTRIBUTION_BUDGET + SEPARATOR.len() + 10;

/// Optional file layer. Every key may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub theme: Option<Theme>,
    pub filter_policy: Option<FilterPolicy>,
    pub max_display_len: Option<usize>,
    pub max_attempts: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub providers: Option<Vec<Provider>>,
}

impl FileConfig {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// 1) `$QUOTE_STATUS_CONFIG` (must exist)
    /// 2) `config/quote_status.toml` if present
    /// 3) empty (all defaults)
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_CONFIG_PATH.into(),
                    message: format!("{} does not exist", pb.display()),
                });
            }
            return Self::load_from(&pb);
        }
        let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            return Self::load_from(&default_path);
        }
        Ok(Self::default())
    }
}

#[derive(Debug)]
pub struct AppConfig {
    pub theme: Theme,
    pub filter_policy: FilterPolicy,
    pub max_display_len: usize,
    pub max_attempts: u32,
    pub timeout_secs: u64,
    pub providers: Vec<Provider>,
    pub slack_token: Option<SecretString>,
    pub slack_api_base: String,
    pub dry_run: bool,
}

impl AppConfig {
    /// Load from the environment and the default file locations.
    pub fn load() -> Result<Self, ConfigError> {
        let file = FileConfig::load_default()?;
        Self::from_parts(file, |k| std::env::var(k).ok())
    }

    /// Merge a file layer with an environment lookup and validate.
    pub fn from_parts<F>(file: FileConfig, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dry_run = env(ENV_DRY_RUN).is_some_and(|v| parse_flag(&v));
        let slack_token = env(ENV_SLACK_TOKEN)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(SecretString::from);
        if slack_token.is_none() && !dry_run {
            return Err(ConfigError::MissingEnvVar(ENV_SLACK_TOKEN.into()));
        }

        let max_display_len = file.max_display_len.unwrap_or(DEFAULT_MAX_DISPLAY_LEN);
        if !(MIN_DISPLAY_LEN..=DEFAULT_MAX_DISPLAY_LEN).contains(&max_display_len) {
            return Err(invalid(
                "max_display_len",
                format!("must be between {MIN_DISPLAY_LEN} and {DEFAULT_MAX_DISPLAY_LEN}"),
            ));
        }

        let max_attempts = file.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            return Err(invalid("max_attempts", "must be at least 1"));
        }

        let timeout_secs = file.timeout_secs.unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(invalid("timeout_secs", "must be at least 1"));
        }

        let providers = file.providers.unwrap_or_else(default_providers);
        if providers.is_empty() {
            return Err(invalid("providers", "at least one provider is required"));
        }

        Ok(Self {
            theme: file.theme.unwrap_or_default(),
            filter_policy: file.filter_policy.unwrap_or_default(),
            max_display_len,
            max_attempts,
            timeout_secs,
            providers,
            slack_token,
            slack_api_base: env(ENV_SLACK_API_BASE)
                .unwrap_or_else(|| DEFAULT_SLACK_API_BASE.to_string()),
            dry_run,
        })
    }
}

fn parse_flag(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.into(),
        message: message.into(),
    }
}
