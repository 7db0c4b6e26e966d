use ops_gateway::app::{app, AppState};
use ops_gateway::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up OPS_GATEWAY_BACKEND_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Refuses to start without a backend to relay to.
    let config = AppConfig::from_env()?;
    tracing::info!(backend = %config.backend_base_url, "starting ops gateway");

    let state = AppState::new(&config)?;
    let router = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Ops gateway listening on http://{}", bind_addr);

    axum::serve(listener, router).await?;
    Ok(())
}
