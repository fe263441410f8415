//! Timetable route handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;

use crate::error::{AppError, Result};
use crate::voyages::requests::QuoteQuery;
use crate::voyages::responses::{DatesResponse, DeparturesResponse, FutureStopsResponse, QuoteResponse};
use crate::voyages::{parse_date, VoyageId};
use crate::AppState;

/// Parse a date path/query segment, rejecting anything that is not YYYY-MM-DD
pub(crate) fn require_date(field: &str, raw: &str) -> Result<NaiveDate> {
    parse_date(raw).ok_or_else(|| {
        AppError::BadRequest(format!("{field} must be a YYYY-MM-DD date, got '{raw}'"))
    })
}

/// All timetable dates
pub async fn dates(State(state): State<AppState>) -> Json<DatesResponse> {
    let schedule = state.schedule.as_ref();
    Json(DatesResponse {
        dates: schedule.dates_sorted().collect(),
        first_date: schedule.first_date(),
        last_date: schedule.last_date(),
    })
}

/// Voyages that can be boarded on a date
pub async fn departures(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DeparturesResponse>> {
    let day = require_date("date", &date)?;
    let departures = state.cache.departures(state.engine(), day).await;

    if departures.is_empty() {
        tracing::debug!("No departures on {}", day);
    }

    Ok(Json(DeparturesResponse {
        date: day.to_string(),
        departures: departures.as_ref().clone(),
    }))
}

/// Where a passenger can disembark after boarding `voyage` on `date`
pub async fn future_stops(
    State(state): State<AppState>,
    Path((date, voyage)): Path<(String, String)>,
) -> Result<Json<FutureStopsResponse>> {
    let day = require_date("date", &date)?;

    // An unknown voyage has no stops, same as an unknown date
    let stops = match voyage.parse::<VoyageId>() {
        Ok(voyage) => state.cache.future_stops(state.engine(), day, voyage).await.as_ref().clone(),
        Err(e) => {
            tracing::debug!("{}", e);
            Vec::new()
        }
    };

    Ok(Json(FutureStopsResponse {
        date: day.to_string(),
        voyage,
        stops,
    }))
}

/// Fare preview for the booking form
pub async fn quote(
    State(state): State<AppState>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<QuoteResponse>> {
    let departure = require_date("departure_date", &query.departure_date)?;
    let arrival = require_date("arrival_date", &query.arrival_date)?;
    let voyage = query
        .voyage
        .parse::<VoyageId>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let quote = state.engine().quote(departure, arrival, voyage);
    Ok(Json(QuoteResponse::new(voyage, departure, arrival, quote)))
}
