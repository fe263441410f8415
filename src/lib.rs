//! Ship Keep Co cruise booking service.
//!
//! Passengers create an account, pick a departure port from the sailing
//! timetable, choose a later stop on the same voyage and book the trip.
//! Accounts and bookings are held in memory for the life of the process.

pub mod accounts;
pub mod cache;
pub mod config;
pub mod error;
pub mod routes;
pub mod store;
pub mod validation;
pub mod voyages;

use std::sync::Arc;

use cache::AppCache;
use store::AppStore;
use voyages::{RoutingEngine, ScheduleStore};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub schedule: Arc<ScheduleStore>,
    pub store: Arc<AppStore>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(schedule: ScheduleStore) -> Self {
        Self {
            schedule: Arc::new(schedule),
            store: Arc::new(AppStore::new()),
            cache: AppCache::new(),
        }
    }

    pub fn engine(&self) -> RoutingEngine<'_> {
        RoutingEngine::new(&self.schedule)
    }
}

pub use routes::router;
