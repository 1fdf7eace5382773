use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};
use tracing::info;

use crate::models::chat::CompletionResponse;
use crate::services::conversation::ConversationManager;
use crate::utils::error::ApiError;

/// GET /chats — open a new conversation seeded with the fixed prompt.
pub async fn open_chat_handler(
    Extension(manager): Extension<Arc<ConversationManager>>,
) -> Result<Json<CompletionResponse>, ApiError> {
    info!("Opening new chat");
    let response = manager.open_chat().await?;
    Ok(Json(response))
}

/// POST /chats/{id}/messages — continue an existing conversation.
/// The request body is the raw message text.
pub async fn next_message_handler(
    Extension(manager): Extension<Arc<ConversationManager>>,
    Path(chat_id): Path<String>,
    content: String,
) -> Result<Json<CompletionResponse>, ApiError> {
    info!(
        "Chat message: chat={}, message_len={}",
        chat_id,
        content.len()
    );
    let response = manager.next_message(&chat_id, content).await?;
    Ok(Json(response))
}
