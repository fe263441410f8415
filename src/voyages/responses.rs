//! Response DTOs for schedule and booking endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::calculators::{money, NIGHTLY_RATE};
use super::models::{Booking, Departure, Stop, VoyageId};
use super::routing::RouteQuote;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// Timetable date range
#[derive(Debug, Serialize)]
pub struct DatesResponse {
    pub dates: Vec<NaiveDate>,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// Boardable voyages on a date
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    pub date: String,
    pub departures: Vec<Departure>,
}

/// Disembarkation options once a voyage is boarded
#[derive(Debug, Serialize)]
pub struct FutureStopsResponse {
    pub date: String,
    pub voyage: String,
    pub stops: Vec<Stop>,
}

/// Fare preview
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub voyage: VoyageId,
    pub departure_date: NaiveDate,
    pub arrival_date: NaiveDate,
    pub valid: bool,
    pub nights: i64,
    pub nightly_rate: MoneyResponse,
    pub cost: Option<MoneyResponse>,
}

impl QuoteResponse {
    pub fn new(
        voyage: VoyageId,
        departure_date: NaiveDate,
        arrival_date: NaiveDate,
        quote: RouteQuote,
    ) -> Self {
        Self {
            voyage,
            departure_date,
            arrival_date,
            valid: quote.valid,
            nights: quote.nights,
            nightly_rate: money(NIGHTLY_RATE),
            cost: quote.cost.map(money),
        }
    }
}

/// A booking as shown to the passenger and the admin view
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub passenger_name: String,
    pub voyage: VoyageId,
    pub departure_date: NaiveDate,
    pub departure_port: String,
    pub arrival_date: NaiveDate,
    pub arrival_port: String,
    pub nights: i64,
    pub cost: MoneyResponse,
    pub booked_at: DateTime<Utc>,
    pub account_id: Uuid,
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            passenger_name: booking.passenger_name.clone(),
            voyage: booking.voyage,
            departure_date: booking.departure.date,
            departure_port: booking.departure.port.to_string(),
            arrival_date: booking.arrival.date,
            arrival_port: booking.arrival.port.to_string(),
            nights: booking.nights,
            cost: money(booking.cost),
            booked_at: booking.booked_at,
            account_id: booking.account_id,
        }
    }
}
