use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use energy_chat_server::config::Settings;
use energy_chat_server::routes::build_router;
use energy_chat_server::services::conversation::{ConversationManager, ConversationStore};
use energy_chat_server::services::LlmService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,energy_chat_server=debug".to_string()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .init();

    info!("🚀 Starting Energy Chat Server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("✅ Configuration loaded");

    // Initialize services
    let llm_service = Arc::new(LlmService::new(settings.llm.clone()));
    let store = ConversationStore::new();
    let manager = Arc::new(ConversationManager::new(
        llm_service,
        store,
        settings.llm.model.clone(),
    ));

    // Build router
    let app = build_router(manager);

    // Server address
    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    info!("🎯 Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
