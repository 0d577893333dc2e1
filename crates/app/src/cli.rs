//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use papersync_domain::RunMode;

/// Keep a reading-group Discord server in step with its presentation
/// spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "papersync", version, about)]
#[command(group(
    ArgGroup::new("mode").required(true).args(["add", "remove", "stats", "archive"])
))]
pub struct Cli {
    /// Create categories, channels and pinned summaries from the spreadsheet
    #[arg(long)]
    pub add: bool,

    /// Delete the spreadsheet's channels and any categories left empty
    #[arg(long)]
    pub remove: bool,

    /// Build the attendance table from channel history
    #[arg(long)]
    pub stats: bool,

    /// Export pinned summaries and slide decks to the archive directory
    #[arg(long, visible_alias = "moodle")]
    pub archive: bool,

    /// Load configuration from this file instead of the environment
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The selected operating mode.
    pub fn mode(&self) -> RunMode {
        if self.add {
            RunMode::Add
        } else if self.remove {
            RunMode::Remove
        } else if self.stats {
            RunMode::Stats
        } else {
            RunMode::Archive
        }
    }
}
