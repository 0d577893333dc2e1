//! Application context - dependency injection container

use std::sync::Arc;

use papersync_core::{
    ArchiveService, ArchiveStore, AttendanceService, ChatPlatform, Reconciler, RunContext,
    ScheduleLoader, ScheduleSource, SlideFetcher, SlideRenderer,
};
use papersync_domain::{Config, Result, RunMode};
use papersync_infra::{
    CsvScheduleSource, DiscordPlatform, FsArchiveStore, HttpSlideFetcher, PdfiumRenderer,
};
use tracing::info;

/// Application context - holds the configuration and every adapter
pub struct AppContext {
    pub config: Config,
    pub platform: Arc<dyn ChatPlatform>,
    pub schedule: Arc<dyn ScheduleSource>,
    pub fetcher: Arc<dyn SlideFetcher>,
    pub renderer: Arc<dyn SlideRenderer>,
    pub archive: Arc<dyn ArchiveStore>,
}

impl AppContext {
    /// Wire the production adapters from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let platform = Arc::new(DiscordPlatform::from_config(&config.discord)?);
        let schedule = Arc::new(CsvScheduleSource::new(config.schedule.csv_file.clone()));
        Ok(Self::with_adapters(config, platform, schedule))
    }

    /// Wire a caller-supplied platform and schedule source; slide and archive
    /// adapters still come from `config`.
    pub fn with_adapters(
        config: Config,
        platform: Arc<dyn ChatPlatform>,
        schedule: Arc<dyn ScheduleSource>,
    ) -> Self {
        let renderer = Arc::new(PdfiumRenderer::new(config.archive.pdfium_library_path.clone()));
        let archive = Arc::new(FsArchiveStore::new(config.archive.root.clone()));
        Self {
            config,
            platform,
            schedule,
            fetcher: Arc::new(HttpSlideFetcher::default()),
            renderer,
            archive,
        }
    }

    /// Connection check: resolve the bot identity and make sure the guild is
    /// visible. Any failure here is fatal for the run.
    pub async fn connect(&self, mode: RunMode) -> Result<RunContext> {
        let bot = self.platform.current_user().await?;
        info!(bot = %bot.name, bot_id = bot.id, "logged in");
        self.platform.guild().await?;
        Ok(RunContext::new(bot, mode))
    }

    pub fn schedule_loader(&self) -> ScheduleLoader {
        ScheduleLoader::new(self.schedule.clone())
    }

    pub fn reconciler(&self) -> Reconciler {
        Reconciler::new(self.platform.clone())
    }

    pub fn attendance(&self) -> AttendanceService {
        AttendanceService::new(self.platform.clone())
    }

    pub fn archive_service(&self) -> ArchiveService {
        ArchiveService::new(
            self.platform.clone(),
            self.fetcher.clone(),
            self.renderer.clone(),
            self.archive.clone(),
            self.config.archive.thumbnail_width,
        )
    }
}
