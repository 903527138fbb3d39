// src/error.rs
//! Error taxonomy. Source errors are absorbed by the pipeline; publish and
//! config errors are the only ones that reach the process boundary.

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("provider {provider} unavailable: {reason}")]
    Unavailable { provider: String, reason: String },

    #[error("provider {provider} returned malformed response: {reason}")]
    Malformed { provider: String, reason: String },

    #[error("no quote providers configured")]
    NoProviders,
}

impl SourceError {
    pub fn unavailable(provider: &str, reason: impl ToString) -> Self {
        Self::Unavailable {
            provider: provider.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(provider: &str, reason: impl ToString) -> Self {
        Self::Malformed {
            provider: provider.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("status request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Slack API returned HTTP {status}")]
    Http { status: u16 },

    #[error("Slack API rejected status update: {0}")]
    Api(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
