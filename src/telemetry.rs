// src/telemetry.rs
use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
const DEFAULT_FILTER: &str = "quote_status=info,pipeline=info,source=info,publish=info,warn";

/// Install the global subscriber. `RUST_LOG` overrides the default filter;
/// `LOG_FORMAT=json` switches to JSON lines for CI log collectors.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = std::env::var(ENV_LOG_FORMAT)
        .ok()
        .is_some_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    // try_init: a second call (tests, embedding) must not panic.
    let _ = if json {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().compact().with_target(false)).try_init()
    };
}

/// One-time metrics registration.
pub fn describe_metrics() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("quote_fetch_total", "Live provider fetch attempts.");
        describe_counter!("quote_fetch_errors_total", "Provider fetch/parse errors.");
        describe_counter!(
            "quote_filter_rejections_total",
            "Fetched quotes rejected by the content filter."
        );
        describe_counter!("quote_fallbacks_total", "Runs that used the curated pool.");
        describe_counter!("status_publish_errors_total", "Failed status updates.");
        describe_histogram!("quote_fetch_ms", "Provider fetch time in milliseconds.");
    });
}
