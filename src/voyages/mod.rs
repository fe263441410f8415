//! Voyage timetable, routing and booking module.
//!
//! The timetable is read-only reference data; routing queries and fare
//! calculations are pure functions over it, and booking assembly produces
//! immutable records that the application store keeps.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routing;
pub mod schedule;
pub mod services;
pub mod timetable;

// Re-export commonly used items
pub use calculators::{round_money, trip_cost, NIGHTLY_RATE};
pub use models::{Booking, BookingDraft, Departure, PortName, Stop, VoyageId};
pub use routing::{RouteQuote, RoutingEngine};
pub use schedule::{parse_date, ScheduleError, ScheduleStore};
pub use services::{assemble_booking, BookingError, RouteRejection};
