//! Booking route handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, Result};
use crate::validation::validate_booking_form;
use crate::voyages::requests::{BookingListQuery, CreateBookingRequest};
use crate::voyages::responses::BookingResponse;
use crate::voyages::{assemble_booking, parse_date, BookingDraft, VoyageId};
use crate::AppState;

/// Book a trip for an existing account
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>)> {
    let account = state
        .store
        .find_account(request.account_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Account {}", request.account_id)))?;

    let mut errors = validate_booking_form(
        &request.passenger_name,
        &request.departure_date,
        &request.departure_port,
        &request.arrival_date,
        &request.arrival_port,
    );

    let voyage = request.voyage.parse::<VoyageId>().ok();
    if voyage.is_none() {
        errors.insert("voyage".into(), "Please select a voyage".into());
    }
    let departure_date = parse_date(&request.departure_date);
    if departure_date.is_none() && !errors.contains_key("departure_date") {
        errors.insert("departure_date".into(), "Please select a valid departure date".into());
    }
    let arrival_date = parse_date(&request.arrival_date);
    if arrival_date.is_none() && !errors.contains_key("arrival_date") {
        errors.insert("arrival_date".into(), "Please select a valid arrival date".into());
    }

    let (Some(voyage), Some(departure_date), Some(arrival_date)) = (voyage, departure_date, arrival_date)
    else {
        return Err(AppError::Validation(errors));
    };

    // Route ordering and timetable checks are reported by the assembler with a reason
    errors.remove("arrival_date");
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let draft = BookingDraft {
        passenger_name: request.passenger_name,
        voyage,
        departure_date,
        departure_port: request.departure_port,
        arrival_date,
        arrival_port: request.arrival_port,
    };

    let booking = assemble_booking(state.engine(), draft, account.id, None).map_err(|e| {
        tracing::info!(account_id = %account.id, "Booking rejected: {}", e);
        AppError::from(e)
    })?;
    let booking = state.store.record_booking(booking).await;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(&booking))))
}

/// List bookings, optionally for one account
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<BookingListQuery>,
) -> Json<Vec<BookingResponse>> {
    let bookings = match query.account_id {
        Some(account_id) => state.store.bookings_for_account(account_id).await,
        None => state.store.bookings().await,
    };

    Json(bookings.iter().map(BookingResponse::from).collect())
}
