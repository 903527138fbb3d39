// src/source/http.rs
use async_trait::async_trait;
use metrics::{counter, histogram};
use rand::seq::IndexedRandom;
use rand::RngCore;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};

use super::{FallbackPool, Provider, QuoteSource};
use crate::error::SourceError;
use crate::types::{Category, FormattedQuote, Quote};

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// Live quote source: one uniformly chosen provider per fetch, bounded by a
/// per-request timeout.
pub struct HttpQuoteSource {
    providers: Vec<Provider>,
    pool: FallbackPool,
    client: Client,
    timeout: Duration,
}

impl HttpQuoteSource {
    pub fn new(providers: Vec<Provider>, pool: FallbackPool) -> Self {
        Self {
            providers,
            pool,
            client: Client::new(),
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn fetch_from(&self, provider: &Provider) -> Result<Quote, SourceError> {
        let name = provider.name.as_str();
        let resp = self
            .client
            .get(&provider.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| SourceError::unavailable(name, e))?
            .error_for_status()
            .map_err(|e| SourceError::unavailable(name, e))?;

        let body: Value = resp
            .json()
            .await
            .map_err(|e| SourceError::unavailable(name, format!("invalid JSON body: {e}")))?;

        provider
            .schema
            .extract(&body)
            .map_err(|reason| SourceError::malformed(name, reason))
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self, rng: &mut (dyn RngCore + Send)) -> Result<Quote, SourceError> {
        let provider = self.providers.choose(rng).ok_or(SourceError::NoProviders)?;

        let t0 = Instant::now();
        counter!("quote_fetch_total", "provider" => provider.name.clone()).increment(1);
        let res = self.fetch_from(provider).await;
        histogram!("quote_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);

        match &res {
            Ok(q) => tracing::debug!(
                target: "source",
                provider = %provider.name,
                chars = q.text.chars().count(),
                "quote fetched"
            ),
            Err(e) => {
                counter!("quote_fetch_errors_total", "provider" => provider.name.clone())
                    .increment(1);
                tracing::warn!(target: "source", provider = %provider.name, error = %e, "provider error");
            }
        }
        res
    }

    fn fallback(&self, rng: &mut (dyn RngCore + Send)) -> (FormattedQuote, Category) {
        self.pool.pick(rng)
    }
}
