//! Configuration structures
//!
//! Loaded by `papersync-infra::config` from the environment or a file.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ARCHIVE_DIR, DEFAULT_STATS_PATH, DEFAULT_THUMBNAIL_WIDTH};

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub discord: DiscordConfig,
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub archive: ArchiveConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

/// Bot credential and target guild
#[derive(Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    pub token: String,
    pub guild_id: u64,
}

// Keep the token out of logs.
impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

/// Location of the presentation spreadsheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub csv_file: PathBuf,
}

/// Archive export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    #[serde(default = "default_archive_root")]
    pub root: PathBuf,
    #[serde(default = "default_thumbnail_width")]
    pub thumbnail_width: u32,
    /// Directory holding the pdfium shared library. Falls back to the system
    /// library when unset.
    #[serde(default)]
    pub pdfium_library_path: Option<PathBuf>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            root: default_archive_root(),
            thumbnail_width: default_thumbnail_width(),
            pdfium_library_path: None,
        }
    }
}

/// Attendance export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_stats_path")]
    pub output_path: PathBuf,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { output_path: default_stats_path() }
    }
}

fn default_archive_root() -> PathBuf {
    PathBuf::from(DEFAULT_ARCHIVE_DIR)
}

const fn default_thumbnail_width() -> u32 {
    DEFAULT_THUMBNAIL_WIDTH
}

fn default_stats_path() -> PathBuf {
    PathBuf::from(DEFAULT_STATS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let discord = DiscordConfig { token: "super-secret".into(), guild_id: 42 };
        let rendered = format!("{discord:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("42"));
    }

    #[test]
    fn test_optional_sections_take_defaults() {
        let config: Config = toml::from_str(
            r#"
[discord]
token = "abc"
guild_id = 7

[schedule]
csv_file = "schedule.csv"
"#,
        )
        .unwrap();

        assert_eq!(config.archive.root, PathBuf::from("moodle"));
        assert_eq!(config.archive.thumbnail_width, DEFAULT_THUMBNAIL_WIDTH);
        assert_eq!(config.stats.output_path, PathBuf::from("attendance.csv"));
    }
}
