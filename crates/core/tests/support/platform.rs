use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use papersync_core::{
    BotIdentity, CategoryInfo, ChannelInfo, ChatMessage, ChatPlatform, GuildInfo, MessageStream,
};
use papersync_domain::{PaperSyncError, Result as DomainResult};

pub const BOT_ID: u64 = 1;
pub const GUILD_ID: u64 = 99;

/// One recorded call on the fake, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    CreateCategory(String),
    DeleteCategory(String),
    CreateChannel(String),
    DeleteChannel(String),
    Send(String),
    Pin(String),
    DeleteMessage(String),
}

#[derive(Debug, Default)]
struct State {
    next_id: u64,
    categories: Vec<CategoryInfo>,
    channels: Vec<ChannelInfo>,
    messages: BTreeMap<u64, Vec<ChatMessage>>,
    pins: BTreeMap<u64, Vec<u64>>,
    mutations: Vec<Mutation>,
    failing_sends: HashSet<String>,
    failing_category_deletes: HashSet<String>,
}

impl State {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn channel_name(&self, channel_id: u64) -> String {
        self.channels
            .iter()
            .find(|channel| channel.id == channel_id)
            .map(|channel| channel.name.clone())
            .unwrap_or_default()
    }
}

/// In-memory guild that records every mutation.
///
/// Identifiers are handed out from a single counter starting above
/// `BOT_ID`, so categories, channels and messages never collide.
#[derive(Clone)]
pub struct InMemoryPlatform {
    state: Arc<Mutex<State>>,
}

impl Default for InMemoryPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        let state = State { next_id: 100, ..State::default() };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    pub fn with_category(self, name: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let id = state.allocate_id();
            state.categories.push(CategoryInfo { id, name: name.to_string() });
        }
        self
    }

    /// Seed a channel; `category` must already exist when given.
    pub fn with_channel(self, category: Option<&str>, name: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let category_id = category.map(|wanted| {
                state
                    .categories
                    .iter()
                    .find(|candidate| candidate.name == wanted)
                    .map(|candidate| candidate.id)
                    .unwrap()
            });
            let id = state.allocate_id();
            state.channels.push(ChannelInfo { id, name: name.to_string(), category_id });
        }
        self
    }

    /// Seed a message; `pinned` also pins it.
    pub fn with_message(
        self,
        channel: &str,
        author_id: u64,
        author_name: &str,
        content: &str,
        pinned: bool,
    ) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let channel_id = state.channels.iter().find(|c| c.name == channel).unwrap().id;
            let id = state.allocate_id();
            state.messages.entry(channel_id).or_default().push(ChatMessage {
                id,
                channel_id,
                author_id,
                author_name: author_name.to_string(),
                author_is_bot: author_id == BOT_ID || author_name.ends_with("-bot"),
                content: content.to_string(),
            });
            if pinned {
                state.pins.entry(channel_id).or_default().push(id);
            }
        }
        self
    }

    /// Make `send_message` fail in the named channel.
    pub fn failing_send_in(self, channel: &str) -> Self {
        self.state.lock().unwrap().failing_sends.insert(channel.to_string());
        self
    }

    /// Make `delete_category` fail for the named category.
    pub fn failing_category_delete(self, category: &str) -> Self {
        self.state.lock().unwrap().failing_category_deletes.insert(category.to_string());
        self
    }

    pub fn mutations(&self) -> Vec<Mutation> {
        self.state.lock().unwrap().mutations.clone()
    }

    pub fn clear_mutations(&self) {
        self.state.lock().unwrap().mutations.clear();
    }

    pub fn category_names(&self) -> Vec<String> {
        self.state.lock().unwrap().categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn channel_names(&self) -> Vec<String> {
        self.state.lock().unwrap().channels.iter().map(|c| c.name.clone()).collect()
    }

    /// Category name a channel sits in.
    pub fn parent_of(&self, channel: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        let category_id = state.channels.iter().find(|c| c.name == channel)?.category_id?;
        state.categories.iter().find(|c| c.id == category_id).map(|c| c.name.clone())
    }

    /// Contents of the messages pinned in a channel, in pin order.
    pub fn pinned_contents(&self, channel: &str) -> Vec<String> {
        let state = self.state.lock().unwrap();
        let Some(channel_id) = state.channels.iter().find(|c| c.name == channel).map(|c| c.id)
        else {
            return Vec::new();
        };
        let pins = state.pins.get(&channel_id).cloned().unwrap_or_default();
        let messages = state.messages.get(&channel_id).cloned().unwrap_or_default();
        pins.iter()
            .filter_map(|pin| messages.iter().find(|m| m.id == *pin))
            .map(|m| m.content.clone())
            .collect()
    }
}

#[async_trait]
impl ChatPlatform for InMemoryPlatform {
    async fn current_user(&self) -> DomainResult<BotIdentity> {
        Ok(BotIdentity { id: BOT_ID, name: "papersync".to_string() })
    }

    async fn guild(&self) -> DomainResult<GuildInfo> {
        Ok(GuildInfo { id: GUILD_ID, name: "Reading Group".to_string() })
    }

    async fn categories(&self) -> DomainResult<Vec<CategoryInfo>> {
        Ok(self.state.lock().unwrap().categories.clone())
    }

    async fn create_category(&self, name: &str) -> DomainResult<CategoryInfo> {
        let mut state = self.state.lock().unwrap();
        let id = state.allocate_id();
        let category = CategoryInfo { id, name: name.to_string() };
        state.categories.push(category.clone());
        state.mutations.push(Mutation::CreateCategory(name.to_string()));
        Ok(category)
    }

    async fn delete_category(&self, category_id: u64) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let name = state
            .categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name.clone())
            .ok_or_else(|| PaperSyncError::NotFound(format!("category {category_id}")))?;
        state.mutations.push(Mutation::DeleteCategory(name.clone()));
        if state.failing_category_deletes.contains(&name) {
            return Err(PaperSyncError::Platform("Missing Permissions".into()));
        }
        state.categories.retain(|c| c.id != category_id);
        Ok(())
    }

    async fn text_channels(&self) -> DomainResult<Vec<ChannelInfo>> {
        Ok(self.state.lock().unwrap().channels.clone())
    }

    async fn channels_in_category(&self, category_id: u64) -> DomainResult<Vec<ChannelInfo>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .channels
            .iter()
            .filter(|c| c.category_id == Some(category_id))
            .cloned()
            .collect())
    }

    async fn create_text_channel(
        &self,
        category_id: u64,
        name: &str,
    ) -> DomainResult<ChannelInfo> {
        let mut state = self.state.lock().unwrap();
        let id = state.allocate_id();
        let channel = ChannelInfo { id, name: name.to_string(), category_id: Some(category_id) };
        state.channels.push(channel.clone());
        state.mutations.push(Mutation::CreateChannel(name.to_string()));
        Ok(channel)
    }

    async fn delete_channel(&self, channel_id: u64) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let name = state.channel_name(channel_id);
        state.channels.retain(|c| c.id != channel_id);
        state.messages.remove(&channel_id);
        state.pins.remove(&channel_id);
        state.mutations.push(Mutation::DeleteChannel(name));
        Ok(())
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> DomainResult<ChatMessage> {
        let mut state = self.state.lock().unwrap();
        let name = state.channel_name(channel_id);
        if state.failing_sends.contains(&name) {
            return Err(PaperSyncError::Platform("Cannot send messages in this channel".into()));
        }
        let id = state.allocate_id();
        let message = ChatMessage {
            id,
            channel_id,
            author_id: BOT_ID,
            author_name: "papersync".to_string(),
            author_is_bot: true,
            content: content.to_string(),
        };
        state.messages.entry(channel_id).or_default().push(message.clone());
        state.mutations.push(Mutation::Send(name));
        Ok(message)
    }

    async fn pin_message(&self, channel_id: u64, message_id: u64) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let name = state.channel_name(channel_id);
        state.pins.entry(channel_id).or_default().push(message_id);
        state.mutations.push(Mutation::Pin(name));
        Ok(())
    }

    async fn pinned_messages(&self, channel_id: u64) -> DomainResult<Vec<ChatMessage>> {
        let state = self.state.lock().unwrap();
        let pins = state.pins.get(&channel_id).cloned().unwrap_or_default();
        let messages = state.messages.get(&channel_id).cloned().unwrap_or_default();
        Ok(pins
            .iter()
            .filter_map(|pin| messages.iter().find(|m| m.id == *pin).cloned())
            .collect())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let name = state.channel_name(channel_id);
        if let Some(messages) = state.messages.get_mut(&channel_id) {
            messages.retain(|m| m.id != message_id);
        }
        if let Some(pins) = state.pins.get_mut(&channel_id) {
            pins.retain(|pin| *pin != message_id);
        }
        state.mutations.push(Mutation::DeleteMessage(name));
        Ok(())
    }

    fn message_history(&self, channel_id: u64) -> MessageStream<'_> {
        let messages =
            self.state.lock().unwrap().messages.get(&channel_id).cloned().unwrap_or_default();
        stream::iter(messages.into_iter().map(Ok)).boxed()
    }
}
