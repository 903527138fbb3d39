// src/publish/mod.rs
pub mod slack;

use chrono::{DateTime, Duration as ChronoDuration, NaiveTime, TimeZone};

use crate::error::PublishError;
use crate::types::StatusPayload;

pub use slack::SlackStatusPublisher;

/// The one side effect of a run. Failures are surfaced to the caller.
#[async_trait::async_trait]
pub trait StatusPublisher: Send + Sync {
    async fn publish(&self, payload: &StatusPayload) -> Result<(), PublishError>;
    fn name(&self) -> &'static str;
}

#[async_trait::async_trait]
impl<P: StatusPublisher + ?Sized> StatusPublisher for Box<P> {
    async fn publish(&self, payload: &StatusPayload) -> Result<(), PublishError> {
        (**self).publish(payload).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Logs the payload instead of publishing it.
#[derive(Debug, Default, Clone)]
pub struct DryRunPublisher;

#[async_trait::async_trait]
impl StatusPublisher for DryRunPublisher {
    async fn publish(&self, payload: &StatusPayload) -> Result<(), PublishError> {
        tracing::info!(
            target: "publish",
            text = %payload.text,
            emoji = %payload.emoji,
            expiration = payload.expiration,
            "dry run, status not published"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }
}

/// Unix seconds of the first midnight strictly after `now`, in `now`'s zone.
/// If that midnight does not exist locally (DST gap) the first valid hour
/// after it is used.
pub fn next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    let tz = now.timezone();
    let Some(tomorrow) = now.date_naive().succ_opt() else {
        return now.timestamp() + 86_400;
    };
    let midnight = tomorrow.and_time(NaiveTime::MIN);
    (0..=3)
        .find_map(|h| {
            tz.from_local_datetime(&(midnight + ChronoDuration::hours(h)))
                .earliest()
        })
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| now.timestamp() + 86_400)
}
