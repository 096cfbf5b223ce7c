mod api;
mod config;
mod router;
mod state;


use std::sync::Arc;

use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    config::load_dotenv();
    let config = config::Config::from_env();
    config.log_summary();

    let state = Arc::new(state::AppState::new(&config));
    let app = router::build_router(state, &config);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://localhost:{}", config.server.port);
    axum::serve(listener, app).await?;

    Ok(())
}
