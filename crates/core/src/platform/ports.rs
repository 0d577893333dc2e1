//! Port interfaces for the chat platform
//!
//! These traits define the boundary between the reconciliation, attendance
//! and archive logic and the platform SDK. Identifiers are the platform's
//! raw numeric snowflakes.

use async_trait::async_trait;
use futures::stream::BoxStream;
use papersync_domain::Result;
use serde::{Deserialize, Serialize};

/// The bot account the run is authenticated as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildInfo {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: u64,
    pub name: String,
}

/// A channel of any kind, with the category it sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub id: u64,
    pub name: String,
    pub category_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub channel_id: u64,
    pub author_id: u64,
    pub author_name: String,
    pub author_is_bot: bool,
    pub content: String,
}

/// Full message history of a channel. Ordering is up to the platform.
pub type MessageStream<'a> = BoxStream<'a, Result<ChatMessage>>;

/// Operations the services need from the community server.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Identity used to decide which pinned messages the bot authored.
    async fn current_user(&self) -> Result<BotIdentity>;

    /// Fetch the configured guild; `NotFound` when the bot cannot see it.
    async fn guild(&self) -> Result<GuildInfo>;

    async fn categories(&self) -> Result<Vec<CategoryInfo>>;

    async fn create_category(&self, name: &str) -> Result<CategoryInfo>;

    async fn delete_category(&self, category_id: u64) -> Result<()>;

    /// Text channels in guild display order.
    async fn text_channels(&self) -> Result<Vec<ChannelInfo>>;

    /// Every channel parented to a category, regardless of kind.
    async fn channels_in_category(&self, category_id: u64) -> Result<Vec<ChannelInfo>>;

    async fn create_text_channel(&self, category_id: u64, name: &str) -> Result<ChannelInfo>;

    async fn delete_channel(&self, channel_id: u64) -> Result<()>;

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<ChatMessage>;

    async fn pin_message(&self, channel_id: u64, message_id: u64) -> Result<()>;

    async fn pinned_messages(&self, channel_id: u64) -> Result<Vec<ChatMessage>>;

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<()>;

    fn message_history(&self, channel_id: u64) -> MessageStream<'_>;
}
