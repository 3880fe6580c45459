use anyhow::Context;
use dotenv::dotenv;
use tracing::info;

mod app;
mod app_state;
mod config;
mod db;
mod error;
mod middleware;
mod modules;
mod schedule;
mod telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    telemetry::init_telemetry()?;

    let env = config::init()?.clone();
    let db = db::init_pool().await?;

    let state = app_state::AppState::new(db, env);
    let addr = state.env.server_addr();
    let app = app::create_router(state);

    info!("{} listening on {}", config::get().app.name, addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to serve application")?;

    Ok(())
}
