use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::models::chat::{ChatId, ChatMessage};

/// Thread-safe in-memory conversation store.
/// Uses DashMap for lock-free concurrent access.
///
/// Individual operations are safe to call from any task, but the store
/// offers no read-modify-write atomicity across a chat turn. There is no
/// eviction and no persistence; histories live for the process lifetime.
#[derive(Clone)]
pub struct ConversationStore {
    /// Conversation storage: chat_id -> ordered message history
    storage: Arc<DashMap<ChatId, Vec<ChatMessage>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        info!("Initializing conversation store with DashMap");
        Self {
            storage: Arc::new(DashMap::new()),
        }
    }

    /// Get the stored history for a chat, or None if unknown.
    pub fn get(&self, chat_id: &str) -> Option<Vec<ChatMessage>> {
        let entry = self.storage.get(chat_id)?;
        Some(entry.value().clone())
    }

    /// Insert a history only if the chat id is absent (first write wins).
    /// A duplicate id from upstream never overwrites existing history.
    pub fn put(&self, chat_id: &str, messages: Vec<ChatMessage>) {
        match self.storage.entry(chat_id.to_string()) {
            Entry::Occupied(_) => {
                debug!("Chat {} already stored, keeping existing history", chat_id);
            }
            Entry::Vacant(slot) => {
                slot.insert(messages);
                debug!("Stored new chat {}", chat_id);
            }
        }
    }

    /// Replace the stored history unconditionally.
    pub fn update(&self, chat_id: &str, messages: Vec<ChatMessage>) {
        self.storage.insert(chat_id.to_string(), messages);
        debug!("Updated chat {}", chat_id);
    }

    /// Number of open conversations.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
