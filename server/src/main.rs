#![recursion_limit = "256"]

mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::services::assist::AssistConfig;

#[tokio::main]
async fn main() {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Upstream is optional: without a key the assist endpoint serves placeholder content.
    let llm: Option<Arc<dyn LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, serving placeholder answers");
            None
        }
    };

    let assist = AssistConfig::from_env();
    tracing::info!(max_duration_secs = assist.max_duration.as_secs(), max_tokens = assist.max_tokens, "assist config");
    let state = state::AppState::new(llm, assist);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos frontend unavailable, serving API routes only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "casebook listening");
    axum::serve(listener, app).await.expect("server failed");
}
