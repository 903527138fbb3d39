// src/pipeline.rs
//! Quote selection: bounded live attempts, then the curated fallback pool.
//!
//! A fetch error ends the live phase at once; a filter rejection moves on to
//! the next attempt. Either way the pipeline always yields a quote.

use metrics::counter;
use rand::RngCore;

use crate::categorize::Categorizer;
use crate::filter::ContentFilter;
use crate::source::QuoteSource;
use crate::types::{Category, FormattedQuote, DEFAULT_MAX_DISPLAY_LEN};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    FetchFailed,
    AttemptsExhausted,
}

impl FallbackReason {
    fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::FetchFailed => "fetch_failed",
            FallbackReason::AttemptsExhausted => "attempts_exhausted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded { attempt: u32 },
    FellBack(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PipelineState {
    Attempting(u32),
    Succeeded {
        attempt: u32,
        quote: FormattedQuote,
        category: Category,
    },
    FellBack(FallbackReason),
}

/// What a run ends up publishing, plus how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub quote: FormattedQuote,
    pub category: Category,
    pub outcome: Outcome,
}

pub struct QuotePipeline<S> {
    source: S,
    filter: ContentFilter,
    categorizer: Categorizer,
    max_attempts: u32,
    max_display_len: usize,
}

impl<S: QuoteSource> QuotePipeline<S> {
    pub fn new(source: S, filter: ContentFilter, categorizer: Categorizer) -> Self {
        Self {
            source,
            filter,
            categorizer,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_display_len: DEFAULT_MAX_DISPLAY_LEN,
        }
    }

    /// Values below 1 are treated as 1.
    pub fn with_max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = n.max(1);
        self
    }

    pub fn with_max_display_len(mut self, n: usize) -> Self {
        self.max_display_len = n;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn select<R: RngCore + Send>(&self, rng: &mut R) -> Selection {
        crate::telemetry::describe_metrics();

        let mut state = PipelineState::Attempting(1);
        loop {
            state = match state {
                PipelineState::Attempting(n) => self.attempt(n, &mut *rng).await,
                PipelineState::Succeeded {
                    attempt,
                    quote,
                    category,
                } => {
                    tracing::info!(
                        target: "pipeline",
                        attempt,
                        category = %category,
                        "live quote accepted"
                    );
                    return Selection {
                        quote,
                        category,
                        outcome: Outcome::Succeeded { attempt },
                    };
                }
                PipelineState::FellBack(reason) => {
                    let (quote, category) = self.source.fallback(&mut *rng);
                    counter!("quote_fallbacks_total", "reason" => reason.as_str()).increment(1);
                    tracing::info!(
                        target: "pipeline",
                        reason = reason.as_str(),
                        category = %category,
                        "using curated fallback quote"
                    );
                    return Selection {
                        quote,
                        category,
                        outcome: Outcome::FellBack(reason),
                    };
                }
            };
        }
    }

    async fn attempt<R: RngCore + Send>(&self, n: u32, rng: &mut R) -> PipelineState {
        let quote = match self.source.fetch(rng).await {
            Ok(q) => q,
            Err(e) => {
                tracing::warn!(target: "pipeline", attempt = n, error = %e, "fetch failed, giving up on live quotes");
                return PipelineState::FellBack(FallbackReason::FetchFailed);
            }
        };

        let verdict = self.filter.evaluate(&quote.text);
        if !verdict.is_accepted() {
            counter!("quote_filter_rejections_total", "reason" => verdict.reason()).increment(1);
            tracing::debug!(target: "pipeline", attempt = n, reason = verdict.reason(), "quote rejected");
            return if n < self.max_attempts {
                PipelineState::Attempting(n + 1)
            } else {
                PipelineState::FellBack(FallbackReason::AttemptsExhausted)
            };
        }

        PipelineState::Succeeded {
            attempt: n,
            category: self.categorizer.categorize(&quote.text),
            quote: FormattedQuote::from_quote(&quote, self.max_display_len),
        }
    }
}
