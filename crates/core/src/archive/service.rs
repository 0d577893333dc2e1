//! Archive export
//!
//! Copies each presentation channel's pinned summary and linked slide decks
//! into `<root>/<channel>/`. A channel whose folder already exists is treated
//! as archived and left alone.

use std::sync::Arc;

use futures::StreamExt;
use papersync_domain::constants::{PINNED_FILE_NAME, SLIDES_FILE_PREFIX, THUMBNAIL_FILE_PREFIX};
use papersync_domain::{
    is_presentation_channel, strip_emphasis, PaperSyncError, ReportAction, Result,
};
use tracing::{debug, info, warn};

use super::links::{find_slide_decks, SlideDeck};
use super::ports::{ArchiveStore, SlideFetcher, SlideRenderer};
use crate::context::RunContext;
use crate::platform::ports::{ChannelInfo, ChatPlatform};

pub struct ArchiveService {
    platform: Arc<dyn ChatPlatform>,
    fetcher: Arc<dyn SlideFetcher>,
    renderer: Arc<dyn SlideRenderer>,
    store: Arc<dyn ArchiveStore>,
    thumbnail_width: u32,
}

impl ArchiveService {
    pub fn new(
        platform: Arc<dyn ChatPlatform>,
        fetcher: Arc<dyn SlideFetcher>,
        renderer: Arc<dyn SlideRenderer>,
        store: Arc<dyn ArchiveStore>,
        thumbnail_width: u32,
    ) -> Self {
        Self { platform, fetcher, renderer, store, thumbnail_width }
    }

    /// Archive every presentation channel not archived yet.
    ///
    /// # Errors
    ///
    /// Fails when the archive root cannot be created or the channel list
    /// cannot be fetched. Per-channel and per-deck problems are reported in
    /// `ctx.report` instead.
    pub async fn export(&self, ctx: &mut RunContext) -> Result<()> {
        self.store.ensure_root().await?;
        let channels = self.platform.text_channels().await?;

        for channel in channels.iter().filter(|channel| is_presentation_channel(&channel.name)) {
            match self.store.channel_exists(&channel.name).await {
                Ok(true) => {
                    debug!(channel = %channel.name, "Already archived");
                    ctx.report.skipped(channel.name.clone(), "already archived");
                    continue;
                }
                Ok(false) => {}
                Err(err) => {
                    warn!(
                        channel = %channel.name,
                        error = %err,
                        "Failed to inspect archive folder"
                    );
                    ctx.report.failed(channel.name.clone(), err);
                    continue;
                }
            }

            if let Err(err) = self.store.create_channel_dir(&channel.name).await {
                warn!(channel = %channel.name, error = %err, "Failed to create archive folder");
                ctx.report.failed(channel.name.clone(), err);
                continue;
            }

            info!(channel = %channel.name, "Archiving channel");
            self.save_pinned(ctx, channel).await;
            self.save_decks(ctx, channel).await;
        }

        Ok(())
    }

    async fn save_pinned(&self, ctx: &mut RunContext, channel: &ChannelInfo) {
        let pinned = match self.platform.pinned_messages(channel.id).await {
            Ok(pinned) => pinned,
            Err(err) => {
                warn!(channel = %channel.name, error = %err, "Failed to fetch pinned messages");
                ctx.report.failed(channel.name.clone(), err);
                return;
            }
        };

        let Some(summary) = pinned.into_iter().find(|message| ctx.is_bot(message.author_id))
        else {
            warn!(channel = %channel.name, "No pinned summary to archive");
            ctx.report.skipped(channel.name.clone(), "no pinned summary");
            return;
        };

        let cleaned = strip_emphasis(&summary.content);
        match self.store.write_text(&channel.name, PINNED_FILE_NAME, &cleaned).await {
            Ok(()) => ctx.report.done(channel.name.clone(), ReportAction::PinnedSaved),
            Err(err) => {
                warn!(channel = %channel.name, error = %err, "Failed to save pinned summary");
                ctx.report.failed(channel.name.clone(), err);
            }
        }
    }

    async fn save_decks(&self, ctx: &mut RunContext, channel: &ChannelInfo) {
        let decks = match self.linked_decks(channel.id).await {
            Ok(decks) => decks,
            Err(err) => {
                warn!(channel = %channel.name, error = %err, "Failed to read history");
                ctx.report.failed(channel.name.clone(), err);
                return;
            }
        };

        for (index, deck) in decks.iter().enumerate() {
            self.save_deck(ctx, channel, deck, index + 1).await;
        }
    }

    /// Every deck link in the channel history, repeats included, in history
    /// order.
    async fn linked_decks(&self, channel_id: u64) -> Result<Vec<SlideDeck>> {
        let mut decks: Vec<SlideDeck> = Vec::new();
        let mut history = self.platform.message_history(channel_id);

        while let Some(message) = history.next().await {
            decks.extend(find_slide_decks(&message?.content));
        }
        Ok(decks)
    }

    async fn save_deck(
        &self,
        ctx: &mut RunContext,
        channel: &ChannelInfo,
        deck: &SlideDeck,
        number: usize,
    ) {
        let subject = format!("{}/{}", channel.name, deck.deck_id);
        let url = deck.export_url();

        let download = match self.fetcher.fetch(&url).await {
            Ok(download) => download,
            Err(err) => {
                warn!(url = %url, error = %err, "Slide download failed");
                ctx.report.failed(subject, err);
                return;
            }
        };

        let slides_file = format!("{SLIDES_FILE_PREFIX}{number}.pdf");
        if let Err(err) =
            self.store.write_bytes(&channel.name, &slides_file, &download.bytes).await
        {
            warn!(
                channel = %channel.name,
                file = %slides_file,
                error = %err,
                "Failed to save slides"
            );
            ctx.report.failed(subject, err);
            return;
        }
        ctx.report.done(subject.clone(), ReportAction::SlidesSaved);

        // Refused exports keep their body but get no thumbnail.
        if !download.is_ok() {
            warn!(url = %url, status = download.status, "Slide export refused");
            ctx.report.failed(
                subject,
                PaperSyncError::Network(format!("HTTP {} for {url}", download.status)),
            );
            return;
        }

        let thumbnail = match self.renderer.render_thumbnail(&download.bytes, self.thumbnail_width)
        {
            Ok(png) => png,
            Err(err) => {
                warn!(
                    channel = %channel.name,
                    file = %slides_file,
                    error = %err,
                    "Failed to render thumbnail"
                );
                ctx.report.failed(subject, err);
                return;
            }
        };

        let thumbnail_file = format!("{THUMBNAIL_FILE_PREFIX}{number}.png");
        match self.store.write_bytes(&channel.name, &thumbnail_file, &thumbnail).await {
            Ok(()) => ctx.report.done(subject, ReportAction::ThumbnailSaved),
            Err(err) => {
                warn!(
                    channel = %channel.name,
                    file = %thumbnail_file,
                    error = %err,
                    "Failed to save thumbnail"
                );
                ctx.report.failed(subject, err);
            }
        }
    }
}
