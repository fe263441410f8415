//! HTTP routes

pub mod accounts;
pub mod admin;
pub mod bookings;
pub mod schedule;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/schedule/dates", get(schedule::dates))
        .route("/schedule/:date/departures", get(schedule::departures))
        .route("/schedule/:date/voyages/:voyage/stops", get(schedule::future_stops))
        .route("/routes/quote", get(schedule::quote))
        .route("/accounts", post(accounts::create).get(accounts::list))
        .route("/accounts/password-strength", post(accounts::strength))
        .route("/bookings", post(bookings::create).get(bookings::list))
        .route("/admin/summary", get(admin::summary))
        .route("/admin/cache", get(admin::cache_stats));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
