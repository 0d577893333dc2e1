//! Operating modes, one per process run

use serde::{Deserialize, Serialize};

use crate::impl_domain_label_conversions;

/// The single operation a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Create or refresh categories, channels and pinned summaries
    Add,
    /// Delete the spreadsheet's channels and any emptied categories
    Remove,
    /// Build the attendance matrix from channel history
    Stats,
    /// Export pinned summaries and slide decks to disk
    Archive,
}

impl_domain_label_conversions!(RunMode {
    Add => "add",
    Remove => "remove",
    Stats => "stats",
    Archive => "archive",
});

impl RunMode {
    /// Whether this mode reads the spreadsheet.
    #[must_use]
    pub const fn reads_schedule(self) -> bool {
        matches!(self, Self::Add | Self::Remove)
    }
}
