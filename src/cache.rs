//! In-memory caching using moka
//!
//! Memoizes timetable lookups for the booking form. The timetable never
//! changes while the process runs, so entries only leave the cache through
//! capacity eviction or idling.

use chrono::NaiveDate;
use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::voyages::{Departure, RoutingEngine, Stop, VoyageId};

/// Application cache holding routing query results
#[derive(Clone)]
pub struct AppCache {
    /// Boardable voyages (date -> departures)
    pub departures: Cache<NaiveDate, Arc<Vec<Departure>>>,
    /// Disembarkation options ((date, voyage) -> stops)
    pub future_stops: Cache<(NaiveDate, VoyageId), Arc<Vec<Stop>>>,
}

impl AppCache {
    /// Create a new cache instance with configured limits
    pub fn new() -> Self {
        Self {
            // Departures: one entry per timetable date
            departures: Cache::builder()
                .max_capacity(1_000)
                .time_to_idle(Duration::from_secs(60 * 60))
                .build(),

            // Future stops: date x voyage, filled on demand
            future_stops: Cache::builder()
                .max_capacity(4_000)
                .time_to_idle(Duration::from_secs(30 * 60))
                .build(),
        }
    }

    /// Departures on `date`, computed on first request
    pub async fn departures(&self, engine: RoutingEngine<'_>, date: NaiveDate) -> Arc<Vec<Departure>> {
        if let Some(cached) = self.departures.get(&date).await {
            tracing::debug!("Cache HIT for departures: {}", date);
            return cached;
        }
        tracing::debug!("Cache MISS for departures: {}", date);
        let departures = Arc::new(engine.voyages_at(date));
        self.departures.insert(date, Arc::clone(&departures)).await;
        departures
    }

    /// Future stops for `voyage` boarded on `date`, computed on first request
    pub async fn future_stops(
        &self,
        engine: RoutingEngine<'_>,
        date: NaiveDate,
        voyage: VoyageId,
    ) -> Arc<Vec<Stop>> {
        let key = (date, voyage);
        if let Some(cached) = self.future_stops.get(&key).await {
            tracing::debug!("Cache HIT for future stops: {} {}", date, voyage);
            return cached;
        }
        tracing::debug!("Cache MISS for future stops: {} {}", date, voyage);
        let stops = Arc::new(engine.future_stops(date, voyage));
        self.future_stops.insert(key, Arc::clone(&stops)).await;
        stops
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            departures_size: self.departures.entry_count(),
            future_stops_size: self.future_stops.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.departures.invalidate_all();
        self.future_stops.invalidate_all();
        info!("All caches invalidated");
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub departures_size: u64,
    pub future_stops_size: u64,
}

/// Warm the departures cache with every timetable date
pub async fn warm_cache(cache: &AppCache, engine: RoutingEngine<'_>) {
    info!("Starting cache warm-up...");

    for date in engine.schedule().dates_sorted() {
        cache
            .departures
            .insert(date, Arc::new(engine.voyages_at(date)))
            .await;
    }

    // entry_count is eventually consistent; flush pending writes first
    cache.departures.run_pending_tasks().await;
    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}
