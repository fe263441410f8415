//! Admin reporting handlers
//!
//! Read-only projections over the application store.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::accounts::responses::AccountResponse;
use crate::accounts::Account;
use crate::cache::CacheStats;
use crate::voyages::calculators::{money, total_revenue};
use crate::voyages::responses::{BookingResponse, MoneyResponse};
use crate::voyages::Booking;
use crate::AppState;

/// Everything the admin dashboard shows
#[derive(Debug, Serialize)]
pub struct AdminSummary {
    pub accounts: Vec<AccountResponse>,
    pub bookings: Vec<BookingResponse>,
    pub total_accounts: usize,
    pub total_bookings: usize,
    pub total_revenue: MoneyResponse,
}

impl AdminSummary {
    pub fn from_records(accounts: &[Account], bookings: &[Booking]) -> Self {
        Self {
            accounts: accounts.iter().map(AccountResponse::from).collect(),
            bookings: bookings.iter().map(BookingResponse::from).collect(),
            total_accounts: accounts.len(),
            total_bookings: bookings.len(),
            total_revenue: money(total_revenue(bookings.iter().map(|b| &b.cost))),
        }
    }
}

pub async fn summary(State(state): State<AppState>) -> Json<AdminSummary> {
    let accounts = state.store.accounts().await;
    let bookings = state.store.bookings().await;
    Json(AdminSummary::from_records(&accounts, &bookings))
}

pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}
