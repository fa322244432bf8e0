mod config;
mod handlers;
mod services;
mod state;
mod types;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use handlers::{create_session, end_session, get_session, health, send_message};
use services::HttpAgent;
use state::AppState;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env();
    let agent = HttpAgent::new(&config.agent_url).context("Failed to build agent client")?;
    info!(agent_url = %agent.endpoint(), static_dir = %config.static_dir, "Configured agent");

    let bind_address = config.bind_address.clone();
    let session_idle = config.session_idle();
    let state = AppState::new(config, Arc::new(agent));
    state.sessions.start_sweeper(session_idle, SWEEP_INTERVAL);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to {bind_address}"))?;

    info!("Server running on http://{}", bind_address);
    axum::serve(listener, app).await.context("Server stopped unexpectedly")?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    let frontend = ServeDir::new(state.config.static_dir());

    Router::new()
        .route("/api/health", get(health))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session).delete(end_session))
        .route("/api/sessions/:id/messages", post(send_message))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn init_logging() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .try_init()?;

    Ok(())
}
