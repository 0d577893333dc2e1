//! Attendance aggregation
//!
//! Joins each presentation channel's pinned date label with the distinct
//! human authors found in its history.

use std::collections::BTreeSet;
use std::sync::Arc;

use futures::TryStreamExt;
use papersync_domain::{
    extract_presentation_date, is_presentation_channel, AttendanceMatrix, ChannelAttendance,
    DateKeyAllocator, ReportAction, Result,
};
use tracing::{info, warn};

use crate::context::RunContext;
use crate::platform::ports::{ChannelInfo, ChatPlatform};

pub struct AttendanceService {
    platform: Arc<dyn ChatPlatform>,
}

impl AttendanceService {
    pub fn new(platform: Arc<dyn ChatPlatform>) -> Self {
        Self { platform }
    }

    /// Scan every presentation channel in guild order and build the matrix.
    ///
    /// Channels without a readable bot summary or whose history cannot be
    /// read are reported and left out.
    ///
    /// # Errors
    ///
    /// Fails only when the guild's channel list cannot be fetched.
    pub async fn collect(&self, ctx: &mut RunContext) -> Result<AttendanceMatrix> {
        let channels = self.platform.text_channels().await?;
        let mut allocator = DateKeyAllocator::new();
        let mut collected = Vec::new();

        for channel in channels.iter().filter(|channel| is_presentation_channel(&channel.name)) {
            let Some(date) = self.presentation_date(ctx, channel).await else {
                continue;
            };
            let key = allocator.allocate(&date);

            match self.distinct_posters(channel.id).await {
                Ok(attendees) => {
                    info!(
                        channel = %channel.name,
                        key = %key,
                        count = attendees.len(),
                        "Collected attendance"
                    );
                    ctx.report.done(channel.name.clone(), ReportAction::AttendanceCollected);
                    collected.push(ChannelAttendance {
                        channel: channel.name.clone(),
                        key,
                        attendees,
                    });
                }
                Err(err) => {
                    warn!(channel = %channel.name, error = %err, "Failed to read history");
                    ctx.report.failed(channel.name.clone(), err);
                }
            }
        }

        let matrix = AttendanceMatrix::assemble(&collected);
        if !matrix.sorted_by_date() {
            warn!("Some attendance keys carry unparseable dates; keeping scan order");
        }
        Ok(matrix)
    }

    async fn presentation_date(
        &self,
        ctx: &mut RunContext,
        channel: &ChannelInfo,
    ) -> Option<String> {
        let pinned = match self.platform.pinned_messages(channel.id).await {
            Ok(pinned) => pinned,
            Err(err) => {
                warn!(channel = %channel.name, error = %err, "Failed to fetch pinned messages");
                ctx.report.failed(channel.name.clone(), err);
                return None;
            }
        };

        let date = pinned
            .iter()
            .find(|message| ctx.is_bot(message.author_id))
            .and_then(|message| extract_presentation_date(&message.content));
        if date.is_none() {
            warn!(channel = %channel.name, "No pinned presentation date; skipping channel");
            ctx.report.skipped(channel.name.clone(), "no pinned presentation date");
        }
        date
    }

    async fn distinct_posters(&self, channel_id: u64) -> Result<BTreeSet<String>> {
        self.platform
            .message_history(channel_id)
            .try_fold(BTreeSet::new(), |mut posters, message| async move {
                if !message.author_is_bot {
                    posters.insert(message.author_name);
                }
                Ok(posters)
            })
            .await
    }
}
