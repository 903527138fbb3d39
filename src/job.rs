// src/job.rs
//! One run: select a quote, pick an emoji, publish until next midnight.

use chrono::{DateTime, TimeZone};
use metrics::counter;
use rand::RngCore;

use crate::emoji::EmojiSelector;
use crate::error::PublishError;
use crate::pipeline::{QuotePipeline, Selection};
use crate::publish::{next_midnight, StatusPublisher};
use crate::source::QuoteSource;
use crate::types::StatusPayload;

pub struct StatusJob<S, P> {
    pipeline: QuotePipeline<S>,
    emoji: EmojiSelector,
    publisher: P,
}

impl<S: QuoteSource, P: StatusPublisher> StatusJob<S, P> {
    pub fn new(pipeline: QuotePipeline<S>, emoji: EmojiSelector, publisher: P) -> Self {
        Self {
            pipeline,
            emoji,
            publisher,
        }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Build the payload for `now` without publishing it.
    pub async fn prepare<R, Tz>(&self, rng: &mut R, now: &DateTime<Tz>) -> (Selection, StatusPayload)
    where
        R: RngCore + Send,
        Tz: TimeZone,
    {
        let selection = self.pipeline.select(&mut *rng).await;
        let emoji = self.emoji.pick(&selection.category, rng).to_string();
        let payload = StatusPayload {
            text: selection.quote.clone(),
            emoji,
            expiration: next_midnight(now),
        };
        (selection, payload)
    }

    /// Selection never fails; a publish failure is logged and returned.
    pub async fn run<R, Tz>(&self, rng: &mut R, now: &DateTime<Tz>) -> Result<StatusPayload, PublishError>
    where
        R: RngCore + Send,
        Tz: TimeZone,
    {
        let (_, payload) = self.prepare(rng, now).await;

        match self.publisher.publish(&payload).await {
            Ok(()) => {
                tracing::info!(
                    target: "publish",
                    publisher = self.publisher.name(),
                    text = %payload.text,
                    emoji = %payload.emoji,
                    "status updated"
                );
                Ok(payload)
            }
            Err(e) => {
                counter!("status_publish_errors_total").increment(1);
                tracing::error!(
                    target: "publish",
                    publisher = self.publisher.name(),
                    error = %e,
                    "error updating status"
                );
                Err(e)
            }
        }
    }
}
