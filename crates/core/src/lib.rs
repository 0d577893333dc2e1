//! # papersync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the chat platform, the spreadsheet, slide
//!   downloads, thumbnail rendering and the archive directory
//! - The per-run context carrying the bot identity, category memo and report
//! - One service per operating mode
//!
//! ## Architecture Principles
//! - Only depends on `papersync-domain`
//! - No network, filesystem or platform SDK code
//! - All external dependencies via traits
//! - Sequential: every platform call is awaited in iteration order

pub mod archive;
pub mod attendance;
pub mod context;
pub mod platform;
pub mod reconcile;
pub mod schedule;

// Re-export specific items to avoid ambiguity
pub use archive::ports::{ArchiveStore, SlideDownload, SlideFetcher, SlideRenderer};
pub use archive::ArchiveService;
pub use attendance::AttendanceService;
pub use context::RunContext;
pub use platform::ports::{
    BotIdentity, CategoryInfo, ChannelInfo, ChatMessage, ChatPlatform, GuildInfo, MessageStream,
};
pub use reconcile::Reconciler;
pub use schedule::ports::{RowIter, ScheduleSource};
pub use schedule::ScheduleLoader;
