//! Route lookups over the sailing timetable.
//!
//! Answers "where can I board on this date" and "where can I get off once
//! aboard". Every query is a read over the immutable [`ScheduleStore`];
//! absence of options is an ordinary empty result, never an error.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::calculators::{nights_between, trip_cost};
use super::models::{Departure, Stop, VoyageId};
use super::schedule::ScheduleStore;

/// Fare preview for a candidate route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteQuote {
    pub valid: bool,
    pub nights: i64,
    /// Only present for valid routes
    pub cost: Option<Decimal>,
}

/// Stateless query layer over a [`ScheduleStore`]
#[derive(Debug, Clone, Copy)]
pub struct RoutingEngine<'a> {
    schedule: &'a ScheduleStore,
}

impl<'a> RoutingEngine<'a> {
    pub fn new(schedule: &'a ScheduleStore) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &'a ScheduleStore {
        self.schedule
    }

    /// Voyages with a port call on `date`, in timetable column order.
    ///
    /// Empty when the date is unknown or every ship is at sea.
    pub fn voyages_at(&self, date: NaiveDate) -> Vec<Departure> {
        let Some(day) = self.schedule.day(date) else {
            return Vec::new();
        };

        day.iter()
            .filter_map(|(voyage, port)| {
                port.as_ref().map(|port| Departure {
                    voyage: *voyage,
                    port: port.clone(),
                })
            })
            .collect()
    }

    /// Every later port call on `voyage`, ascending by date.
    ///
    /// Only dates after `date` in the timetable's own ordering are
    /// considered, and at-sea days are skipped, so each entry is a valid
    /// place to disembark once `voyage` has been boarded on `date`. Empty if
    /// `date` is not in the timetable or is its last day.
    pub fn future_stops(&self, date: NaiveDate, voyage: VoyageId) -> Vec<Stop> {
        if !self.schedule.contains(date) {
            return Vec::new();
        }

        self.schedule
            .days_after(date)
            .filter_map(|(stop_date, day)| {
                day.get(&voyage)?.as_ref().map(|port| Stop {
                    date: stop_date,
                    port: port.clone(),
                })
            })
            .collect()
    }

    /// True when `arrival` is a later port call on `voyage` reachable from `departure`
    pub fn is_valid_route(&self, departure: NaiveDate, arrival: NaiveDate, voyage: VoyageId) -> bool {
        departure < arrival
            && self
                .future_stops(departure, voyage)
                .iter()
                .any(|stop| stop.date == arrival)
    }

    /// Validity, night count and fare for a candidate route
    pub fn quote(&self, departure: NaiveDate, arrival: NaiveDate, voyage: VoyageId) -> RouteQuote {
        let valid = self.is_valid_route(departure, arrival, voyage);
        RouteQuote {
            valid,
            nights: nights_between(departure, arrival).max(0),
            cost: valid.then(|| trip_cost(departure, arrival)),
        }
    }
}
