//! Quote status job — binary entrypoint.
//! Runs once and exits; a failed status update exits non-zero so the
//! scheduler marks the run as failed.

use anyhow::Context;
use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quote_status::{build_job, telemetry, AppConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    telemetry::init_tracing();

    let cfg = AppConfig::load().context("loading configuration")?;
    let job = build_job(&cfg)?;

    let mut rng = StdRng::from_os_rng();
    job.run(&mut rng, &Local::now())
        .await
        .context("updating status")?;

    Ok(())
}
