use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers;
use crate::services::conversation::ConversationManager;

/// Build the application router with shared services and middleware.
pub fn build_router(manager: Arc<ConversationManager>) -> Router {
    // Public routes (no chat state)
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check));

    let chat_routes = Router::new()
        .route("/chats", get(handlers::chat::open_chat_handler))
        .route(
            "/chats/{id}/messages",
            post(handlers::chat::next_message_handler),
        )
        .layer(Extension(manager));

    // Combine routes
    Router::new()
        .merge(public_routes)
        .merge(chat_routes)
        // CORS
        .layer(
            CorsLayer::permissive()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
}
