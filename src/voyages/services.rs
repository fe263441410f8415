//! Booking assembly.
//!
//! Turns a passenger's selections into an immutable [`Booking`], re-deriving
//! route validity from the timetable rather than trusting the form.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::validation::validate_name;

use super::calculators::{nights_between, trip_cost};
use super::models::{Booking, BookingDraft, Stop};
use super::routing::RoutingEngine;

/// Why a route was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteRejection {
    #[error("arrival date must be after departure date")]
    NotAfterDeparture,

    #[error("{voyage} is at sea on {date}")]
    DepartureAtSea { voyage: String, date: String },

    #[error("{voyage} calls at {expected} on {date}, not {requested}")]
    DeparturePortMismatch {
        voyage: String,
        date: String,
        expected: String,
        requested: String,
    },

    #[error("{voyage} has no later port call on {date}")]
    ArrivalNotOnVoyage { voyage: String, date: String },

    #[error("{voyage} calls at {expected} on {date}, not {requested}")]
    ArrivalPortMismatch {
        voyage: String,
        date: String,
        expected: String,
        requested: String,
    },
}

/// Booking assembly errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid route: {0}")]
    InvalidRoute(#[from] RouteRejection),

    #[error("Invalid passenger name: must be 2-50 letters, spaces, hyphens or apostrophes")]
    InvalidPassengerName(String),
}

/// Build a booking from validated selections.
///
/// Checks, in order: the passenger name, that arrival follows departure,
/// that the voyage is in port at the chosen departure, and that the arrival
/// is one of that voyage's later port calls. `as_of` defaults to now.
pub fn assemble_booking(
    engine: RoutingEngine<'_>,
    draft: BookingDraft,
    account_id: Uuid,
    as_of: Option<DateTime<Utc>>,
) -> Result<Booking, BookingError> {
    if !validate_name(&draft.passenger_name) {
        return Err(BookingError::InvalidPassengerName(draft.passenger_name));
    }

    let voyage = draft.voyage;
    if draft.departure_date >= draft.arrival_date {
        return Err(RouteRejection::NotAfterDeparture.into());
    }

    let departure_port = engine
        .schedule()
        .port_on(draft.departure_date, voyage)
        .ok_or_else(|| RouteRejection::DepartureAtSea {
            voyage: voyage.to_string(),
            date: draft.departure_date.to_string(),
        })?;
    if departure_port != draft.departure_port.trim() {
        return Err(RouteRejection::DeparturePortMismatch {
            voyage: voyage.to_string(),
            date: draft.departure_date.to_string(),
            expected: departure_port.to_string(),
            requested: draft.departure_port,
        }
        .into());
    }

    if !engine.is_valid_route(draft.departure_date, draft.arrival_date, voyage) {
        return Err(RouteRejection::ArrivalNotOnVoyage {
            voyage: voyage.to_string(),
            date: draft.arrival_date.to_string(),
        }
        .into());
    }

    // is_valid_route guarantees a port call on the arrival date
    let arrival_port = engine
        .schedule()
        .port_on(draft.arrival_date, voyage)
        .ok_or_else(|| RouteRejection::ArrivalNotOnVoyage {
            voyage: voyage.to_string(),
            date: draft.arrival_date.to_string(),
        })?;
    if arrival_port != draft.arrival_port.trim() {
        return Err(RouteRejection::ArrivalPortMismatch {
            voyage: voyage.to_string(),
            date: draft.arrival_date.to_string(),
            expected: arrival_port.to_string(),
            requested: draft.arrival_port,
        }
        .into());
    }

    let booking = Booking {
        id: Uuid::new_v4(),
        passenger_name: draft.passenger_name.trim().to_string(),
        voyage,
        departure: Stop {
            date: draft.departure_date,
            port: departure_port.clone(),
        },
        arrival: Stop {
            date: draft.arrival_date,
            port: arrival_port.clone(),
        },
        nights: nights_between(draft.departure_date, draft.arrival_date),
        cost: trip_cost(draft.departure_date, draft.arrival_date),
        booked_at: as_of.unwrap_or_else(Utc::now),
        account_id,
    };

    tracing::info!(
        booking_id = %booking.id,
        voyage = %booking.voyage,
        nights = booking.nights,
        cost = %booking.cost,
        "Assembled booking"
    );

    Ok(booking)
}
