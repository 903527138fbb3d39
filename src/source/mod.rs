// src/source/mod.rs
pub mod http;
pub mod schema;

use rand::{Rng, RngCore};
use tracing::debug;

use crate::error::{ConfigError, SourceError};
use crate::filter::ContentFilter;
use crate::theme::Theme;
use crate::types::{Category, FormattedQuote, Quote, SEPARATOR};

pub use http::HttpQuoteSource;
pub use schema::{default_providers, Provider, ResponseSchema};

#[async_trait::async_trait]
pub trait QuoteSource: Send + Sync {
    /// One live attempt against one provider.
    async fn fetch(&self, rng: &mut (dyn RngCore + Send)) -> Result<Quote, SourceError>;

    /// Curated quote used when live fetching gives up. Never fails.
    fn fallback(&self, rng: &mut (dyn RngCore + Send)) -> (FormattedQuote, Category);
}

/// Curated quotes in display form, each tagged with its category.
/// Never empty.
#[derive(Debug, Clone)]
pub struct FallbackPool {
    entries: Vec<(FormattedQuote, Category)>,
}

impl FallbackPool {
    /// Builds a pool from `(display text, category)` pairs. Entries longer
    /// than the filter's display limit, or whose quote text the filter
    /// rejects, are left out rather than truncated.
    pub fn new(entries: &[(&str, &str)], filter: &ContentFilter) -> Result<Self, ConfigError> {
        let max_len = filter.max_display_len();
        let mut kept = Vec::with_capacity(entries.len());
        for (entry, category) in entries {
            let text = entry.rsplit_once(SEPARATOR).map_or(*entry, |(text, _)| text);
            let verdict = filter.evaluate(text);
            if !verdict.is_accepted() {
                debug!(target: "source", entry = %entry, reason = verdict.reason(), "fallback entry skipped");
                continue;
            }
            if entry.chars().count() > max_len {
                debug!(target: "source", entry = %entry, reason = "too_long", "fallback entry skipped");
                continue;
            }
            kept.push((FormattedQuote::from_display(*entry, max_len), Category::new(*category)));
        }

        if kept.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "fallback_pool".into(),
                message: format!(
                    "no curated quote passes the {:?} filter at {max_len} characters",
                    filter.policy()
                ),
            });
        }
        Ok(Self { entries: kept })
    }

    pub fn for_theme(theme: Theme, filter: &ContentFilter) -> Result<Self, ConfigError> {
        Self::new(theme.fallback_pool(), filter)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(FormattedQuote, Category)] {
        &self.entries
    }

    pub fn pick(&self, rng: &mut (dyn RngCore + Send)) -> (FormattedQuote, Category) {
        let i = rng.random_range(0..self.entries.len());
        self.entries[i].clone()
    }
}
