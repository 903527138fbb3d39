// src/lib.rs
//! Daily quote status: fetch an inspirational quote, filter and categorize it,
//! pick a matching emoji and set it as the Slack status until midnight.

pub mod categorize;
pub mod config;
pub mod emoji;
pub mod error;
pub mod filter;
pub mod job;
pub mod normalize;
pub mod pipeline;
pub mod publish;
pub mod source;
pub mod telemetry;
pub mod theme;
pub mod types;

// ---- Re-exports for stable public API ----
pub use crate::categorize::Categorizer;
pub use crate::config::AppConfig;
pub use crate::emoji::EmojiSelector;
pub use crate::filter::{ContentFilter, FilterPolicy};
pub use crate::job::StatusJob;
pub use crate::pipeline::{Outcome, QuotePipeline, Selection};
pub use crate::publish::{DryRunPublisher, SlackStatusPublisher, StatusPublisher};
pub use crate::source::{FallbackPool, HttpQuoteSource, QuoteSource};
pub use crate::types::{Category, FormattedQuote, Quote, StatusPayload};

use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::info;

pub type DefaultJob = StatusJob<HttpQuoteSource, Box<dyn StatusPublisher>>;

/// Wire every component from a loaded configuration.
pub fn build_job(cfg: &AppConfig) -> anyhow::Result<DefaultJob> {
    let theme = cfg.theme;

    let filter = ContentFilter::new(
        cfg.max_display_len,
        cfg.filter_policy,
        crate::theme::BLOCKLIST,
        theme.allowlist(),
    );
    let pool = FallbackPool::for_theme(theme, &filter).context("building fallback pool")?;
    let source = HttpQuoteSource::new(cfg.providers.clone(), pool)
        .with_timeout(Duration::from_secs(cfg.timeout_secs));

    let pipeline = QuotePipeline::new(source, filter, Categorizer::new(theme.keywords()))
        .with_max_attempts(cfg.max_attempts)
        .with_max_display_len(cfg.max_display_len);

    let emoji = EmojiSelector::new(theme.emoji()).context("building emoji table")?;

    let publisher: Box<dyn StatusPublisher> = if cfg.dry_run {
        Box::new(DryRunPublisher)
    } else {
        let token = cfg
            .slack_token
            .as_ref()
            .map(|t| SecretString::from(t.expose_secret()))
            .context("SLACK_TOKEN is required unless QUOTE_STATUS_DRY_RUN is set")?;
        Box::new(SlackStatusPublisher::new(token).with_api_base(cfg.slack_api_base.as_str()))
    };

    info!(
        theme = theme.name(),
        policy = ?cfg.filter_policy,
        providers = cfg.providers.len(),
        publisher = publisher.name(),
        "status job configured"
    );

    Ok(StatusJob::new(pipeline, emoji, publisher))
}
