//! Discord adapter for the chat platform port
//!
//! REST only: every call goes through serenity's `Http` client, no gateway
//! connection is opened.

mod convert;
mod platform;

pub use platform::DiscordPlatform;
