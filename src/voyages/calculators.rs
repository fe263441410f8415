//! Core fare calculation functions.
//!
//! Pure functions for fare math - no schedule access.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::responses::MoneyResponse;

/// Price of one night aboard any voyage
pub const NIGHTLY_RATE: Decimal = dec!(249.99);

/// Currency all fares are quoted in
pub const CURRENCY: &str = "USD";

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use shipkeep_web::voyages::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Nights spent aboard between two calendar dates.
///
/// Dates carry no time of day, so the day difference is already whole and
/// needs no rounding up. The result is zero or negative when `arrival` does
/// not follow `departure`; callers reject such routes before pricing them.
pub fn nights_between(departure: NaiveDate, arrival: NaiveDate) -> i64 {
    (arrival - departure).num_days()
}

/// Fare for a trip: nights × [`NIGHTLY_RATE`].
///
/// Does not reject non-positive night counts; validate the route first.
pub fn trip_cost(departure: NaiveDate, arrival: NaiveDate) -> Decimal {
    Decimal::from(nights_between(departure, arrival)) * NIGHTLY_RATE
}

/// Wrap an amount in the fare currency
pub fn money(amount: Decimal) -> MoneyResponse {
    MoneyResponse {
        amount,
        currency: CURRENCY.to_string(),
    }
}

/// Total of a set of fares, rounded to cents
pub fn total_revenue<'a>(costs: impl IntoIterator<Item = &'a Decimal>) -> Decimal {
    round_money(costs.into_iter().copied().sum(), 2)
}
