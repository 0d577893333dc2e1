//! `--archive` (alias `--moodle`): export pinned summaries and slide decks

use papersync_core::RunContext;
use papersync_domain::Result;
use tracing::info;

use crate::context::AppContext;

pub(super) async fn archive(app: &AppContext, ctx: &mut RunContext) -> Result<()> {
    info!(root = %app.config.archive.root.display(), "Exporting archive");
    app.archive_service().export(ctx).await
}
