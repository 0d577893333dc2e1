//! One command per operating mode

mod archive;
mod schedule;
mod stats;

use std::time::Instant;

use papersync_domain::{Result, RunMode, RunReport};

use crate::context::AppContext;
use crate::utils::logging::log_run_outcome;

/// Connect, run the selected mode, and hand back its report.
///
/// # Errors
///
/// Only fatal problems surface here: the connection check failing, or the
/// mode being unable to start at all. Everything else lands in the report.
pub async fn run(app: &AppContext, mode: RunMode) -> Result<RunReport> {
    let started = Instant::now();
    let mut ctx = app.connect(mode).await?;

    match mode {
        RunMode::Add => schedule::add(app, &mut ctx).await,
        RunMode::Remove => schedule::remove(app, &mut ctx).await,
        RunMode::Stats => stats::stats(app, &mut ctx).await?,
        RunMode::Archive => archive::archive(app, &mut ctx).await?,
    }

    let report = ctx.into_report();
    log_run_outcome(mode, started.elapsed(), &report);
    Ok(report)
}
