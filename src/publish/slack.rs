// src/publish/slack.rs
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::StatusPublisher;
use crate::error::PublishError;
use crate::types::StatusPayload;

pub const DEFAULT_SLACK_API_BASE: &str = "https://slack.com/api";

/// Sets the token owner's profile status through `users.profile.set`.
pub struct SlackStatusPublisher {
    token: SecretString,
    api_base: String,
    client: Client,
    timeout: Duration,
}

#[derive(Serialize)]
struct ProfileSetRequest<'a> {
    profile: Profile<'a>,
}

#[derive(Serialize)]
struct Profile<'a> {
    status_text: &'a str,
    status_emoji: &'a str,
    status_expiration: i64,
}

#[derive(Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SlackStatusPublisher {
    pub fn new(token: SecretString) -> Self {
        Self {
            token,
            api_base: DEFAULT_SLACK_API_BASE.to_string(),
            client: Client::new(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Point at a different API root (tests, proxies).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/users.profile.set", self.api_base)
    }
}

#[async_trait]
impl StatusPublisher for SlackStatusPublisher {
    async fn publish(&self, payload: &StatusPayload) -> Result<(), PublishError> {
        let body = ProfileSetRequest {
            profile: Profile {
                status_text: payload.text.as_str(),
                status_emoji: &payload.emoji,
                status_expiration: payload.expiration,
            },
        };

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.token.expose_secret())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PublishError::Http {
                status: status.as_u16(),
            });
        }

        // Slack reports most failures as HTTP 200 with `ok: false`.
        let parsed: SlackResponse = resp.json().await?;
        if !parsed.ok {
            return Err(PublishError::Api(
                parsed.error.unwrap_or_else(|| "unknown_error".into()),
            ));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "slack"
    }
}
