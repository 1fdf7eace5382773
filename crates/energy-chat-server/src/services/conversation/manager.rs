use std::sync::Arc;

use tracing::{debug, info};

use crate::models::chat::{ChatMessage, CompletionRequest, CompletionResponse};
use crate::utils::error::ApiError;

use super::prompt::OPENING_PROMPT;
use super::store::ConversationStore;

/// Trait for the upstream completion client.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// One request/response cycle with the completion provider.
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, ApiError>;
}

/// Orchestrates chat turns: the conversation store on one side, the
/// completion client on the other.
pub struct ConversationManager {
    llm: Arc<dyn LlmProvider>,
    store: ConversationStore,
    model: String,
}

impl ConversationManager {
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        store: ConversationStore,
        model: impl Into<String>,
    ) -> Self {
        Self {
            llm,
            store,
            model: model.into(),
        }
    }

    /// Open a new conversation seeded with the fixed opening prompt.
    ///
    /// The history stored under the provider-assigned id is the prompt plus
    /// the first returned choice; when the provider returns no choices only
    /// the prompt is recorded. The full response is returned to the caller
    /// either way, and a duplicate id never overwrites existing history.
    pub async fn open_chat(&self) -> Result<CompletionResponse, ApiError> {
        let first_message = ChatMessage::user(OPENING_PROMPT);
        let request = CompletionRequest::new(self.model.clone(), vec![first_message.clone()]);

        let response = self.llm.complete(&request).await?;

        let mut history = vec![first_message];
        if let Some(choice) = response.choices.first() {
            history.push(choice.message.clone());
        }
        self.store.put(&response.id, history);

        info!(
            "Opened chat {} ({} choices, {} total tokens)",
            response.id,
            response.choices.len(),
            response.usage.total_tokens
        );
        Ok(response)
    }

    /// Append the next user turn to an existing conversation and return the
    /// provider's response.
    ///
    /// Unknown ids fail with `NotFound` before any upstream call. The
    /// read-send-update sequence is not atomic: two concurrent turns on the
    /// same chat can read the same prior history, and the last update wins.
    pub async fn next_message(
        &self,
        chat_id: &str,
        content: String,
    ) -> Result<CompletionResponse, ApiError> {
        let mut messages = self
            .store
            .get(chat_id)
            .ok_or_else(|| ApiError::NotFound(format!("Unknown chat: {}", chat_id)))?;
        messages.push(ChatMessage::user(content));

        debug!("Sending {} messages for chat {}", messages.len(), chat_id);
        let request = CompletionRequest::new(self.model.clone(), messages.clone());
        let response = self.llm.complete(&request).await?;

        if let Some(choice) = response.choices.first() {
            messages.push(choice.message.clone());
        }
        self.store.update(chat_id, messages);

        Ok(response)
    }
}
