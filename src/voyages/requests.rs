//! Request DTOs for schedule and booking endpoints.

use serde::Deserialize;
use uuid::Uuid;

/// Query string for a fare preview
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub departure_date: String,
    pub arrival_date: String,
    pub voyage: String,
}

/// Request to book a trip.
///
/// Dates and voyage stay as raw strings so that missing or malformed
/// values are reported per field rather than as a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub account_id: Uuid,
    #[serde(default)]
    pub passenger_name: String,
    #[serde(default)]
    pub voyage: String,
    #[serde(default)]
    pub departure_date: String,
    #[serde(default)]
    pub departure_port: String,
    #[serde(default)]
    pub arrival_date: String,
    #[serde(default)]
    pub arrival_port: String,
}

/// Query string for listing bookings
#[derive(Debug, Default, Deserialize)]
pub struct BookingListQuery {
    #[serde(default)]
    pub account_id: Option<Uuid>,
}
