use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shipkeep_web::cache::warm_cache;
use shipkeep_web::config::Config;
use shipkeep_web::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; the environment may already be set
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shipkeep_web=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let schedule = config.load_schedule()?;
    info!(
        "Loaded timetable: {} dates ({:?} to {:?})",
        schedule.len(),
        schedule.first_date(),
        schedule.last_date()
    );

    let state = AppState::new(schedule);
    warm_cache(&state.cache, state.engine()).await;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {}", addr);

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
