use async_trait::async_trait;
use futures::StreamExt;
use papersync_core::{
    BotIdentity, CategoryInfo, ChannelInfo, ChatMessage, ChatPlatform, GuildInfo, MessageStream,
};
use papersync_domain::{DiscordConfig, PaperSyncError, Result};
use serenity::all::{
    ChannelId, ChannelType, CreateChannel, CreateMessage, GuildChannel, GuildId, Http, MessageId,
};
use tracing::{debug, info, instrument};

use super::convert::{channel_info, chat_message, display_order};
use crate::errors::InfraError;

/// [`ChatPlatform`] backed by the Discord REST API.
pub struct DiscordPlatform {
    http: Http,
    guild_id: GuildId,
}

impl DiscordPlatform {
    /// # Errors
    /// `Config` when the guild id is zero.
    pub fn new(token: &str, guild_id: u64) -> Result<Self> {
        if guild_id == 0 {
            return Err(PaperSyncError::Config("guild id must be non-zero".into()));
        }
        Ok(Self { http: Http::new(token), guild_id: GuildId::new(guild_id) })
    }

    pub fn from_config(config: &DiscordConfig) -> Result<Self> {
        Self::new(&config.token, config.guild_id)
    }

    async fn guild_channels(&self) -> Result<Vec<GuildChannel>> {
        let channels = self.guild_id.channels(&self.http).await.map_err(platform_error)?;
        let mut channels: Vec<GuildChannel> = channels.into_values().collect();
        display_order(&mut channels);
        Ok(channels)
    }
}

fn platform_error(err: serenity::Error) -> PaperSyncError {
    InfraError::from(err).into()
}

#[async_trait]
impl ChatPlatform for DiscordPlatform {
    async fn current_user(&self) -> Result<BotIdentity> {
        let user = self.http.get_current_user().await.map_err(platform_error)?;
        Ok(BotIdentity { id: user.id.get(), name: user.name.clone() })
    }

    async fn guild(&self) -> Result<GuildInfo> {
        let guild = self.guild_id.to_partial_guild(&self.http).await.map_err(|err| {
            match platform_error(err) {
                PaperSyncError::NotFound(_) => {
                    PaperSyncError::NotFound(format!("guild {} not found", self.guild_id))
                }
                other => other,
            }
        })?;
        info!(guild_id = guild.id.get(), guild = %guild.name, "connected to guild");
        Ok(GuildInfo { id: guild.id.get(), name: guild.name })
    }

    async fn categories(&self) -> Result<Vec<CategoryInfo>> {
        Ok(self
            .guild_channels()
            .await?
            .into_iter()
            .filter(|channel| channel.kind == ChannelType::Category)
            .map(|channel| CategoryInfo { id: channel.id.get(), name: channel.name })
            .collect())
    }

    #[instrument(skip(self))]
    async fn create_category(&self, name: &str) -> Result<CategoryInfo> {
        let builder = CreateChannel::new(name).kind(ChannelType::Category);
        let created =
            self.guild_id.create_channel(&self.http, builder).await.map_err(platform_error)?;
        debug!(category_id = created.id.get(), "category created");
        Ok(CategoryInfo { id: created.id.get(), name: created.name })
    }

    #[instrument(skip(self))]
    async fn delete_category(&self, category_id: u64) -> Result<()> {
        ChannelId::new(category_id).delete(&self.http).await.map_err(platform_error)?;
        Ok(())
    }

    async fn text_channels(&self) -> Result<Vec<ChannelInfo>> {
        Ok(self
            .guild_channels()
            .await?
            .iter()
            .filter(|channel| channel.kind == ChannelType::Text)
            .map(channel_info)
            .collect())
    }

    async fn channels_in_category(&self, category_id: u64) -> Result<Vec<ChannelInfo>> {
        Ok(self
            .guild_channels()
            .await?
            .iter()
            .filter(|channel| channel.parent_id.map(|parent| parent.get()) == Some(category_id))
            .map(channel_info)
            .collect())
    }

    #[instrument(skip(self))]
    async fn create_text_channel(&self, category_id: u64, name: &str) -> Result<ChannelInfo> {
        let builder = CreateChannel::new(name)
            .kind(ChannelType::Text)
            .category(ChannelId::new(category_id));
        let created =
            self.guild_id.create_channel(&self.http, builder).await.map_err(platform_error)?;
        debug!(channel_id = created.id.get(), "text channel created");
        Ok(channel_info(&created))
    }

    #[instrument(skip(self))]
    async fn delete_channel(&self, channel_id: u64) -> Result<()> {
        ChannelId::new(channel_id).delete(&self.http).await.map_err(platform_error)?;
        Ok(())
    }

    #[instrument(skip(self, content))]
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<ChatMessage> {
        let message = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
            .map_err(platform_error)?;
        Ok(chat_message(&message))
    }

    #[instrument(skip(self))]
    async fn pin_message(&self, channel_id: u64, message_id: u64) -> Result<()> {
        ChannelId::new(channel_id)
            .pin(&self.http, MessageId::new(message_id))
            .await
            .map_err(platform_error)
    }

    async fn pinned_messages(&self, channel_id: u64) -> Result<Vec<ChatMessage>> {
        let pins = ChannelId::new(channel_id).pins(&self.http).await.map_err(platform_error)?;
        Ok(pins.iter().map(chat_message).collect())
    }

    #[instrument(skip(self))]
    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<()> {
        ChannelId::new(channel_id)
            .delete_message(&self.http, MessageId::new(message_id))
            .await
            .map_err(platform_error)
    }

    fn message_history(&self, channel_id: u64) -> MessageStream<'_> {
        ChannelId::new(channel_id)
            .messages_iter(&self.http)
            .map(|message| message.map(|m| chat_message(&m)).map_err(platform_error))
            .boxed()
    }
}
