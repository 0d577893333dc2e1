//! Spreadsheet-driven modes: `--add` and `--remove`

use papersync_core::RunContext;
use papersync_domain::PresentationRecord;
use tracing::error;

use crate::context::AppContext;

pub(super) async fn add(app: &AppContext, ctx: &mut RunContext) {
    if let Some(records) = load_records(app, ctx) {
        app.reconciler().add(ctx, &records).await;
    }
}

pub(super) async fn remove(app: &AppContext, ctx: &mut RunContext) {
    if let Some(records) = load_records(app, ctx) {
        app.reconciler().remove(ctx, &records).await;
    }
}

/// `None` when the spreadsheet cannot be opened; the run then ends without
/// touching the server.
fn load_records(app: &AppContext, ctx: &mut RunContext) -> Option<Vec<PresentationRecord>> {
    match app.schedule_loader().load(&mut ctx.report) {
        Ok(records) => Some(records),
        Err(err) => {
            let source = app.schedule.describe();
            error!(source = %source, error = %err, "Cannot read schedule");
            ctx.report.failed(source, err);
            None
        }
    }
}
