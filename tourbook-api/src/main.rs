use anyhow::Context;
use tourbook_api::{app, AppState};
use tourbook_store::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tourbook_api=debug,tourbook_core=debug,tourbook_store=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    let addr = config.server.socket_addr().context("Invalid server address")?;

    let app = app(AppState::in_memory());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server is running on http://{}", addr);

    axum::serve(listener, app).await.context("Server terminated")?;
    Ok(())
}
