//! `--stats`: attendance table on stdout and as CSV

use papersync_core::RunContext;
use papersync_domain::Result;
use papersync_infra::{render_table, write_attendance_csv};
use tracing::{info, warn};

use crate::context::AppContext;

pub(super) async fn stats(app: &AppContext, ctx: &mut RunContext) -> Result<()> {
    let matrix = app.attendance().collect(ctx).await?;

    if matrix.is_empty() {
        info!("No presentation channels with a summary; attendance is empty");
    } else {
        println!("{}", render_table(&matrix));
    }

    let path = &app.config.stats.output_path;
    if let Err(err) = write_attendance_csv(&matrix, path) {
        warn!(path = %path.display(), error = %err, "Failed to write attendance CSV");
        ctx.report.failed(path.display().to_string(), err);
    }
    Ok(())
}
