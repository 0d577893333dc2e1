//! Per-run outcome report
//!
//! Every step a service takes (or declines to take) lands here, so callers
//! and tests can inspect what a run did instead of scraping console output.

use serde::{Deserialize, Serialize};

use crate::errors::PaperSyncError;
use crate::impl_domain_label_conversions;
use crate::types::mode::RunMode;

/// Something a run did successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportAction {
    CategoryCreated,
    CategoryDeleted,
    ChannelCreated,
    ChannelDeleted,
    SummaryPosted,
    SummaryReplaced,
    SummaryUnchanged,
    AttendanceCollected,
    PinnedSaved,
    SlidesSaved,
    ThumbnailSaved,
}

impl_domain_label_conversions!(ReportAction {
    CategoryCreated => "category_created",
    CategoryDeleted => "category_deleted",
    ChannelCreated => "channel_created",
    ChannelDeleted => "channel_deleted",
    SummaryPosted => "summary_posted",
    SummaryReplaced => "summary_replaced",
    SummaryUnchanged => "summary_unchanged",
    AttendanceCollected => "attendance_collected",
    PinnedSaved => "pinned_saved",
    SlidesSaved => "slides_saved",
    ThumbnailSaved => "thumbnail_saved",
});

impl ReportAction {
    /// Whether the action changed state on the chat platform.
    #[must_use]
    pub const fn is_platform_mutation(self) -> bool {
        matches!(
            self,
            Self::CategoryCreated
                | Self::CategoryDeleted
                | Self::ChannelCreated
                | Self::ChannelDeleted
                | Self::SummaryPosted
                | Self::SummaryReplaced
        )
    }
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Done(ReportAction),
    Skipped(String),
    Failed(PaperSyncError),
}

/// A step together with what it was about (row, channel, category, deck).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEvent {
    pub subject: String,
    pub outcome: Outcome,
}

/// Everything a run did, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub mode: RunMode,
    events: Vec<ReportEvent>,
}

impl RunReport {
    #[must_use]
    pub const fn new(mode: RunMode) -> Self {
        Self { mode, events: Vec::new() }
    }

    pub fn done(&mut self, subject: impl Into<String>, action: ReportAction) {
        self.push(subject, Outcome::Done(action));
    }

    pub fn skipped(&mut self, subject: impl Into<String>, reason: impl Into<String>) {
        self.push(subject, Outcome::Skipped(reason.into()));
    }

    pub fn failed(&mut self, subject: impl Into<String>, error: PaperSyncError) {
        self.push(subject, Outcome::Failed(error));
    }

    fn push(&mut self, subject: impl Into<String>, outcome: Outcome) {
        self.events.push(ReportEvent { subject: subject.into(), outcome });
    }

    #[must_use]
    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    /// Number of times `action` was completed.
    #[must_use]
    pub fn count(&self, action: ReportAction) -> usize {
        self.events.iter().filter(|event| event.outcome == Outcome::Done(action)).count()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.events.iter().filter(|event| matches!(event.outcome, Outcome::Skipped(_))).count()
    }

    #[must_use]
    pub fn failures(&self) -> Vec<&ReportEvent> {
        self.events.iter().filter(|event| matches!(event.outcome, Outcome::Failed(_))).collect()
    }

    /// Completed steps that changed platform state.
    #[must_use]
    pub fn platform_mutations(&self) -> usize {
        self.events
            .iter()
            .filter(|event| {
                matches!(event.outcome, Outcome::Done(action) if action.is_platform_mutation())
            })
            .count()
    }

    /// One-line human summary, e.g. `"add: 3 done, 1 skipped, 0 failed"`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        let done =
            self.events.iter().filter(|event| matches!(event.outcome, Outcome::Done(_))).count();
        format!(
            "{}: {done} done, {} skipped, {} failed",
            self.mode,
            self.skipped_count(),
            self.failures().len()
        )
    }
}
