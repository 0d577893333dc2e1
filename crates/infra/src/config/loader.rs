//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. An explicit `--config` path is loaded as-is
//! 2. Otherwise, attempts to load from environment variables
//! 3. If a required variable is missing, falls back to a probed file
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `DISCORD_TOKEN`: Bot token (required)
//! - `GUILD_ID`: Numeric id of the community server (required)
//! - `CSV_FILE`: Path to the presentation spreadsheet (required)
//! - `PAPERSYNC_ARCHIVE_DIR`: Archive root (default `moodle`)
//! - `PAPERSYNC_STATS_PATH`: Attendance CSV path (default `attendance.csv`)
//! - `PAPERSYNC_THUMBNAIL_WIDTH`: Thumbnail width in pixels (default 400)
//! - `PDFIUM_LIBRARY_PATH`: Directory containing the pdfium shared library
//!
//! ## File Locations
//! The loader probes `papersync.toml` and `papersync.json` in the current
//! working directory, then next to the executable.

use std::path::{Path, PathBuf};

use papersync_domain::{
    ArchiveConfig, Config, DiscordConfig, PaperSyncError, Result, ScheduleConfig, StatsConfig,
};

const CONFIG_FILE_NAMES: [&str; 2] = ["papersync.toml", "papersync.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `PaperSyncError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing or the guild id is zero
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_from_file(Some(path.to_path_buf()));
    }

    match load_from_env() {
        Ok(config) => {
            tracing::debug!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Environment incomplete, trying config file");
            load_from_file(None).map_err(|file_err| {
                // No file at all: surface the missing variable instead.
                if probe_config_paths().is_none() {
                    e
                } else {
                    file_err
                }
            })
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `PaperSyncError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let token = env_var("DISCORD_TOKEN")?;
    let guild_id = env_var("GUILD_ID").and_then(|s| {
        s.trim()
            .parse::<u64>()
            .map_err(|e| PaperSyncError::Config(format!("Invalid GUILD_ID: {e}")))
    })?;
    let csv_file = PathBuf::from(env_var("CSV_FILE")?);

    let mut archive = ArchiveConfig::default();
    if let Some(root) = env_opt("PAPERSYNC_ARCHIVE_DIR") {
        archive.root = PathBuf::from(root);
    }
    if let Some(width) = env_opt("PAPERSYNC_THUMBNAIL_WIDTH") {
        archive.thumbnail_width = width.trim().parse::<u32>().map_err(|e| {
            PaperSyncError::Config(format!("Invalid PAPERSYNC_THUMBNAIL_WIDTH: {e}"))
        })?;
    }
    archive.pdfium_library_path = env_opt("PDFIUM_LIBRARY_PATH").map(PathBuf::from);

    let mut stats = StatsConfig::default();
    if let Some(path) = env_opt("PAPERSYNC_STATS_PATH") {
        stats.output_path = PathBuf::from(path);
    }

    validate(Config {
        discord: DiscordConfig { token, guild_id },
        schedule: ScheduleConfig { csv_file },
        archive,
        stats,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `PaperSyncError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PaperSyncError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PaperSyncError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PaperSyncError::Config(format!("Failed to read config file: {e}")))?;

    validate(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PaperSyncError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PaperSyncError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(PaperSyncError::Config(format!("Unsupported config format: {extension}"))),
    }
}

fn validate(config: Config) -> Result<Config> {
    if config.discord.token.trim().is_empty() {
        return Err(PaperSyncError::Config("Discord token is empty".into()));
    }
    if config.discord.guild_id == 0 {
        return Err(PaperSyncError::Config("Guild id must be non-zero".into()));
    }
    if config.archive.thumbnail_width == 0 {
        return Err(PaperSyncError::Config("Thumbnail width must be non-zero".into()));
    }
    Ok(config)
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `PaperSyncError::Config` if the variable is not set or empty.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        PaperSyncError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional environment variable; empty values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
