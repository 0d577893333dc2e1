//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Spreadsheet columns
pub const COLUMN_DATE: &str = "Date";
pub const COLUMN_ID: &str = "ID";
pub const COLUMN_CHANNEL_NAME: &str = "Discord Channel Name";
pub const COLUMN_TITLE: &str = "Paper Title";
pub const COLUMN_LINK: &str = "Paper Link";
pub const COLUMN_PRESENTERS: &str = "Presenters";
pub const COLUMN_TOPIC: &str = "Topic";

// Placeholders used when a column is absent from the spreadsheet
pub const DEFAULT_TITLE: &str = "No Title";
pub const DEFAULT_LINK: &str = "No Link";
pub const DEFAULT_PRESENTERS: &str = "N/A";
pub const DEFAULT_TOPIC: &str = "N/A";

/// chrono format of the `Date` column and of the rendered summary date.
pub const SCHEDULE_DATE_FORMAT: &str = "%A, %B %d, %Y";

// Naming conventions
pub const CATEGORY_SUFFIX: &str = "Presentations";
pub const CHANNEL_PREFIX: char = 'p';

// Summary message labels
pub const LABEL_TITLE: &str = "**📜 Paper being presented**:";
pub const LABEL_LINK: &str = "**🌐 Paper Link**:";
pub const LABEL_DATE: &str = "**📅 Presentation Date**:";
pub const LABEL_PRESENTERS: &str = "**🗣️ Presenter(s)**:";
pub const LABEL_TOPIC: &str = "**🗃️ Topic Category**:";

// Archive layout
pub const DEFAULT_ARCHIVE_DIR: &str = "moodle";
pub const PINNED_FILE_NAME: &str = "pinned.txt";
pub const SLIDES_FILE_PREFIX: &str = "slides_";
pub const THUMBNAIL_FILE_PREFIX: &str = "thumbnail_";
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 400;

// Attendance output
pub const DEFAULT_STATS_PATH: &str = "attendance.csv";
pub const STATS_IDENTITY_COLUMN: &str = "User";

// Slide decks
pub const SLIDES_URL_PREFIX: &str = "https://docs.google.com/presentation/d/";
pub const SLIDES_EXPORT_SUFFIX: &str = "/export/pdf";
