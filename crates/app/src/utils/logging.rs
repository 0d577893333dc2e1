use std::time::Duration;

use papersync_domain::{RunMode, RunReport};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "papersync=info";

/// Install the global subscriber. Logs go to stderr so stdout stays free for
/// the attendance table.
///
/// `PAPERSYNC_LOG_JSON=1` switches to JSON lines.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let result = if env_flag("PAPERSYNC_LOG_JSON") {
        tracing_subscriber::registry().with(filter).with(fmt.json()).try_init()
    } else {
        tracing_subscriber::registry().with(filter).with(fmt).try_init()
    };

    if let Err(err) = result {
        eprintln!("tracing already initialised: {err}");
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Log the outcome of a mode run with structured fields.
pub fn log_run_outcome(mode: RunMode, elapsed: Duration, report: &RunReport) {
    let duration_ms = elapsed.as_millis() as u64;
    let failures = report.failures().len();
    let mutations = report.platform_mutations();

    if failures == 0 {
        info!(%mode, duration_ms, mutations, "run_completed");
    } else {
        warn!(%mode, duration_ms, mutations, failures, "run_completed_with_failures");
    }
}
