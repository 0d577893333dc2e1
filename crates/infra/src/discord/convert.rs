use papersync_core::{ChannelInfo, ChatMessage};
use serenity::all::{GuildChannel, Message};

pub(super) fn chat_message(message: &Message) -> ChatMessage {
    ChatMessage {
        id: message.id.get(),
        channel_id: message.channel_id.get(),
        author_id: message.author.id.get(),
        author_name: message.author.name.clone(),
        author_is_bot: message.author.bot,
        content: message.content.clone(),
    }
}

pub(super) fn channel_info(channel: &GuildChannel) -> ChannelInfo {
    ChannelInfo {
        id: channel.id.get(),
        name: channel.name.clone(),
        category_id: channel.parent_id.map(|parent| parent.get()),
    }
}

/// Guild display order: position first, id as the tie breaker.
pub(super) fn display_order(channels: &mut [GuildChannel]) {
    channels.sort_by_key(|channel| (channel.position, channel.id.get()));
}
