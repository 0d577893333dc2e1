//! # papersync Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The Discord REST adapter (serenity `Http`)
//! - The CSV schedule source and the attendance CSV writer
//! - HTTP client and slide export fetcher
//! - PDF thumbnail rendering (pdfium, behind the `thumbnails` feature)
//! - The filesystem archive store
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `papersync-core`
//! - Depends on `papersync-domain` and `papersync-core`
//! - Contains all "impure" code (network, filesystem, native libraries)

pub mod archive;
pub mod config;
pub mod discord;
pub mod errors;
pub mod http;
pub mod schedule;
pub mod slides;
pub mod stats;

// Re-export commonly used items
pub use archive::FsArchiveStore;
pub use discord::DiscordPlatform;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use schedule::CsvScheduleSource;
pub use slides::{HttpSlideFetcher, PdfiumRenderer};
pub use stats::{render_table, write_attendance_csv};
