//! Structure reconciliation - core business logic
//!
//! Add mode converges categories, channels and pinned summaries onto the
//! schedule; remove mode tears the schedule's channels down again. Every
//! decision is driven by exact name matches, so a second run against an
//! unchanged schedule performs no mutations.

use std::sync::Arc;

use papersync_domain::{
    CategoryKey, ChannelName, PresentationRecord, ReportAction, Result, SummaryMessage,
};
use tracing::{debug, info, warn};

use crate::context::RunContext;
use crate::platform::ports::{CategoryInfo, ChannelInfo, ChatMessage, ChatPlatform};

/// Applies the schedule to the platform.
pub struct Reconciler {
    platform: Arc<dyn ChatPlatform>,
}

impl Reconciler {
    pub fn new(platform: Arc<dyn ChatPlatform>) -> Self {
        Self { platform }
    }

    /// Ensure every record has its category, channel and pinned summary.
    pub async fn add(&self, ctx: &mut RunContext, records: &[PresentationRecord]) {
        for record in records {
            let key = record.category_key();
            let Some(category) = self.resolve_or_create_category(ctx, &key).await else {
                continue;
            };

            let channel_name = match record.channel_name() {
                Ok(Some(name)) => name,
                Ok(None) => continue,
                Err(err) => {
                    warn!(line = record.line, error = %err, "Skipping record");
                    ctx.report.skipped(format!("line {}", record.line), err.to_string());
                    continue;
                }
            };

            let summary = record.summary();
            self.ensure_channel(ctx, &category, &channel_name, &summary).await;
        }
    }

    /// Delete every record's channel, then any category left empty.
    ///
    /// Every dated record marks its category as touched, including rows
    /// without a channel, so categories created for them are cleaned up too.
    pub async fn remove(&self, ctx: &mut RunContext, records: &[PresentationRecord]) {
        let mut touched: Vec<(CategoryKey, CategoryInfo)> = Vec::new();

        for record in records {
            let key = record.category_key();
            let category = match self.lookup_category(ctx, &key).await {
                Ok(Some(category)) => category,
                Ok(None) => {
                    warn!(category = %key, "Category not found; skipping record");
                    ctx.report.skipped(key.to_string(), "category not found");
                    continue;
                }
                Err(err) => {
                    warn!(category = %key, error = %err, "Category lookup failed");
                    ctx.report.failed(key.to_string(), err);
                    continue;
                }
            };
            if !touched.iter().any(|(seen, _)| seen == &key) {
                touched.push((key.clone(), category.clone()));
            }

            let channel_name = match record.channel_name() {
                Ok(Some(name)) => name,
                Ok(None) => continue,
                Err(err) => {
                    warn!(line = record.line, error = %err, "Skipping record");
                    ctx.report.skipped(format!("line {}", record.line), err.to_string());
                    continue;
                }
            };

            self.remove_channel(ctx, &category, &channel_name).await;
        }

        for (key, category) in touched {
            self.remove_if_empty(ctx, &key, &category).await;
        }
    }

    async fn lookup_category(
        &self,
        ctx: &mut RunContext,
        key: &CategoryKey,
    ) -> Result<Option<CategoryInfo>> {
        if let Some(category) = ctx.category(key) {
            return Ok(Some(category.clone()));
        }

        let found = self
            .platform
            .categories()
            .await?
            .into_iter()
            .find(|category| category.name == key.as_str());
        if let Some(category) = &found {
            ctx.remember_category(key.clone(), category.clone());
        }
        Ok(found)
    }

    async fn resolve_or_create_category(
        &self,
        ctx: &mut RunContext,
        key: &CategoryKey,
    ) -> Option<CategoryInfo> {
        match self.lookup_category(ctx, key).await {
            Ok(Some(category)) => return Some(category),
            Ok(None) => {}
            Err(err) => {
                warn!(category = %key, error = %err, "Category lookup failed");
                ctx.report.failed(key.to_string(), err);
                return None;
            }
        }

        info!(category = %key, "Creating category");
        match self.platform.create_category(key.as_str()).await {
            Ok(category) => {
                ctx.report.done(key.to_string(), ReportAction::CategoryCreated);
                ctx.remember_category(key.clone(), category.clone());
                Some(category)
            }
            Err(err) => {
                warn!(category = %key, error = %err, "Failed to create category");
                ctx.report.failed(key.to_string(), err);
                None
            }
        }
    }

    async fn find_channel(
        &self,
        category: &CategoryInfo,
        name: &ChannelName,
    ) -> Result<Option<ChannelInfo>> {
        Ok(self
            .platform
            .channels_in_category(category.id)
            .await?
            .into_iter()
            .find(|channel| channel.name == name.as_str()))
    }

    async fn ensure_channel(
        &self,
        ctx: &mut RunContext,
        category: &CategoryInfo,
        name: &ChannelName,
        summary: &SummaryMessage,
    ) {
        let existing = match self.find_channel(category, name).await {
            Ok(existing) => existing,
            Err(err) => {
                warn!(channel = %name, error = %err, "Channel lookup failed");
                ctx.report.failed(name.to_string(), err);
                return;
            }
        };

        let Some(channel) = existing else {
            info!(channel = %name, category = %category.name, "Creating channel");
            match self.platform.create_text_channel(category.id, name.as_str()).await {
                Ok(channel) => {
                    ctx.report.done(name.to_string(), ReportAction::ChannelCreated);
                    self.post_summary(ctx, &channel, summary, ReportAction::SummaryPosted).await;
                }
                Err(err) => {
                    warn!(channel = %name, error = %err, "Failed to create channel");
                    ctx.report.failed(name.to_string(), err);
                }
            }
            return;
        };

        let pinned = match self.platform.pinned_messages(channel.id).await {
            Ok(pins) => pins,
            Err(err) => {
                warn!(channel = %name, error = %err, "Failed to fetch pinned messages");
                ctx.report.failed(name.to_string(), err);
                Vec::new()
            }
        };

        match bot_pin(ctx, pinned) {
            None => {
                info!(channel = %name, "No pinned summary; posting");
                self.post_summary(ctx, &channel, summary, ReportAction::SummaryPosted).await;
            }
            Some(current) if !summary.matches(&current.content) => {
                info!(channel = %name, "Pinned summary drifted; replacing");
                if let Err(err) = self.platform.delete_message(channel.id, current.id).await {
                    warn!(channel = %name, error = %err, "Failed to delete stale summary");
                    ctx.report.failed(name.to_string(), err);
                    return;
                }
                self.post_summary(ctx, &channel, summary, ReportAction::SummaryReplaced).await;
            }
            Some(_) => {
                debug!(channel = %name, "Channel is up to date");
                ctx.report.done(name.to_string(), ReportAction::SummaryUnchanged);
            }
        }
    }

    async fn post_summary(
        &self,
        ctx: &mut RunContext,
        channel: &ChannelInfo,
        summary: &SummaryMessage,
        action: ReportAction,
    ) {
        let result = async {
            let message = self.platform.send_message(channel.id, summary.body()).await?;
            self.platform.pin_message(channel.id, message.id).await
        }
        .await;

        match result {
            Ok(()) => ctx.report.done(channel.name.clone(), action),
            Err(err) => {
                warn!(channel = %channel.name, error = %err, "Failed to send or pin summary");
                ctx.report.failed(channel.name.clone(), err);
            }
        }
    }

    async fn remove_channel(
        &self,
        ctx: &mut RunContext,
        category: &CategoryInfo,
        name: &ChannelName,
    ) {
        let channel = match self.find_channel(category, name).await {
            Ok(Some(channel)) => channel,
            Ok(None) => {
                warn!(channel = %name, category = %category.name, "Channel not found; skipping");
                ctx.report.skipped(name.to_string(), "channel not found");
                return;
            }
            Err(err) => {
                warn!(channel = %name, error = %err, "Channel lookup failed");
                ctx.report.failed(name.to_string(), err);
                return;
            }
        };

        info!(channel = %name, category = %category.name, "Removing channel");
        match self.platform.delete_channel(channel.id).await {
            Ok(()) => ctx.report.done(name.to_string(), ReportAction::ChannelDeleted),
            Err(err) => {
                warn!(channel = %name, error = %err, "Failed to remove channel");
                ctx.report.failed(name.to_string(), err);
            }
        }
    }

    async fn remove_if_empty(
        &self,
        ctx: &mut RunContext,
        key: &CategoryKey,
        category: &CategoryInfo,
    ) {
        let remaining = match self.platform.channels_in_category(category.id).await {
            Ok(channels) => channels.len(),
            Err(err) => {
                warn!(category = %key, error = %err, "Failed to count category channels");
                ctx.report.failed(key.to_string(), err);
                return;
            }
        };
        if remaining > 0 {
            debug!(category = %key, remaining, "Category still has channels");
            return;
        }

        info!(category = %key, "Removing empty category");
        match self.platform.delete_category(category.id).await {
            Ok(()) => ctx.report.done(key.to_string(), ReportAction::CategoryDeleted),
            Err(err) => {
                warn!(category = %key, error = %err, "Failed to remove category");
                ctx.report.failed(key.to_string(), err);
            }
        }
    }
}

/// First pinned message authored by the bot.
fn bot_pin(ctx: &RunContext, pinned: Vec<ChatMessage>) -> Option<ChatMessage> {
    pinned.into_iter().find(|message| ctx.is_bot(message.author_id))
}
