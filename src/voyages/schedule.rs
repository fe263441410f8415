//! Immutable date × voyage → port matrix.
//!
//! The store is built once at startup and shared read-only for the life of
//! the process; nothing in the booking flow ever writes to it.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;

use super::models::{PortName, ScheduleDay, UnknownVoyage, VoyageId};
use super::timetable::REFERENCE_TIMETABLE;

/// Errors raised while building a schedule from external data
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Invalid timetable date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error(transparent)]
    UnknownVoyage(#[from] UnknownVoyage),

    #[error("Failed to read timetable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse timetable JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timetable contains no dates")]
    Empty,
}

/// Parse a fixed-width ISO 8601 calendar date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn parse_timetable_date(raw: &str) -> Result<NaiveDate, ScheduleError> {
    parse_date(raw).ok_or_else(|| ScheduleError::InvalidDate(raw.to_string()))
}

fn at_sea_day() -> ScheduleDay {
    VoyageId::ALL.iter().map(|v| (*v, None)).collect()
}

/// The sailing timetable
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    days: BTreeMap<NaiveDate, ScheduleDay>,
}

impl ScheduleStore {
    /// Build the built-in January 2026 timetable
    pub fn reference() -> Self {
        let rows = REFERENCE_TIMETABLE.iter().flat_map(|(date, ports)| {
            VoyageId::ALL
                .iter()
                .zip(ports.iter())
                .map(move |(voyage, port)| (*date, voyage.as_str(), *port))
        });

        // The table is compiled in, so a failure here is a typo in timetable.rs
        Self::from_rows(rows).unwrap_or_else(|e| panic!("reference timetable is malformed: {e}"))
    }

    /// Build a store from `(date, voyage, port)` rows.
    ///
    /// A blank port means the voyage is at sea. Voyages that never appear
    /// for a date are recorded as at sea, so every day carries an entry for
    /// every [`VoyageId`].
    pub fn from_rows<'r, I>(rows: I) -> Result<Self, ScheduleError>
    where
        I: IntoIterator<Item = (&'r str, &'r str, &'r str)>,
    {
        let mut days: BTreeMap<NaiveDate, ScheduleDay> = BTreeMap::new();

        for (raw_date, raw_voyage, raw_port) in rows {
            let date = parse_timetable_date(raw_date)?;
            let voyage: VoyageId = raw_voyage.parse()?;
            days.entry(date)
                .or_insert_with(at_sea_day)
                .insert(voyage, PortName::new(raw_port));
        }

        Self::from_days(days)
    }

    /// Parse a timetable shaped `{ "2026-01-01": { "Europe A": "Southampton, UK", ... } }`
    pub fn from_json_str(json: &str) -> Result<Self, ScheduleError> {
        let raw: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)?;

        let mut days: BTreeMap<NaiveDate, ScheduleDay> = BTreeMap::new();
        for (raw_date, voyages) in &raw {
            let day = days
                .entry(parse_timetable_date(raw_date)?)
                .or_insert_with(at_sea_day);
            for (raw_voyage, raw_port) in voyages {
                day.insert(raw_voyage.parse()?, PortName::new(raw_port.as_str()));
            }
        }

        Self::from_days(days)
    }

    fn from_days(days: BTreeMap<NaiveDate, ScheduleDay>) -> Result<Self, ScheduleError> {
        if days.is_empty() {
            return Err(ScheduleError::Empty);
        }
        tracing::debug!("Loaded schedule with {} dates", days.len());
        Ok(Self { days })
    }

    /// Read a JSON timetable from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// All timetable dates in ascending order
    pub fn dates_sorted(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// The port `voyage` calls at on `date`, or `None` when at sea or the date is unknown
    pub fn port_on(&self, date: NaiveDate, voyage: VoyageId) -> Option<&PortName> {
        self.days.get(&date)?.get(&voyage)?.as_ref()
    }

    /// Full day entry for `date`
    pub fn day(&self, date: NaiveDate) -> Option<&ScheduleDay> {
        self.days.get(&date)
    }

    /// Days strictly after `date`, in ascending order
    pub fn days_after(&self, date: NaiveDate) -> impl Iterator<Item = (NaiveDate, &ScheduleDay)> + '_ {
        use std::ops::Bound::{Excluded, Unbounded};
        self.days
            .range((Excluded(date), Unbounded))
            .map(|(d, day)| (*d, day))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    // ==================== reference data tests ====================

    #[test]
    fn test_reference_covers_january() {
        let store = ScheduleStore::reference();
        assert_eq!(store.len(), 31);
        assert_eq!(store.first_date(), Some(date("2026-01-01")));
        assert_eq!(store.last_date(), Some(date("2026-01-31")));
    }

    #[test]
    fn test_dates_sorted_ascending_and_restartable() {
        let store = ScheduleStore::reference();
        let first: Vec<_> = store.dates_sorted().collect();
        let second: Vec<_> = store.dates_sorted().collect();
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_every_day_has_every_voyage() {
        let store = ScheduleStore::reference();
        for d in store.dates_sorted() {
            let day = store.day(d).unwrap();
            for voyage in VoyageId::ALL {
                assert!(day.contains_key(&voyage), "{d} missing {voyage}");
            }
        }
    }

    #[test]
    fn test_port_on_landfall_and_at_sea() {
        let store = ScheduleStore::reference();
        assert_eq!(
            store.port_on(date("2026-01-02"), VoyageId::EuropeA).unwrap().as_str(),
            "Cherbourg, France"
        );
        assert!(store.port_on(date("2026-01-02"), VoyageId::AmericasB).is_none());
    }

    #[test]
    fn test_port_on_unknown_date() {
        let store = ScheduleStore::reference();
        assert!(store.port_on(date("2025-12-31"), VoyageId::EuropeA).is_none());
        assert!(store.port_on(date("2026-02-01"), VoyageId::EuropeA).is_none());
    }

    #[test]
    fn test_days_after_excludes_start() {
        let store = ScheduleStore::reference();
        let after: Vec<_> = store.days_after(date("2026-01-29")).map(|(d, _)| d).collect();
        assert_eq!(after, vec![date("2026-01-30"), date("2026-01-31")]);
        assert_eq!(store.days_after(date("2026-01-31")).count(), 0);
    }

    // ==================== loading tests ====================

    #[test]
    fn test_from_rows_fills_missing_voyages_as_at_sea() {
        let store = ScheduleStore::from_rows([("2026-03-01", "Europe A", "Lisbon, Portugal")]).unwrap();
        let d = date("2026-03-01");
        assert_eq!(store.port_on(d, VoyageId::EuropeA).unwrap().as_str(), "Lisbon, Portugal");
        assert!(store.port_on(d, VoyageId::AmericasA).is_none());
        assert_eq!(store.day(d).unwrap().len(), VoyageId::ALL.len());
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(matches!(
            ScheduleStore::from_rows([("01/03/2026", "Europe A", "Lisbon")]),
            Err(ScheduleError::InvalidDate(_))
        ));
        assert!(matches!(
            ScheduleStore::from_rows([("2026-03-01", "Pacific A", "Lisbon")]),
            Err(ScheduleError::UnknownVoyage(_))
        ));
        assert!(matches!(
            ScheduleStore::from_rows(std::iter::empty()),
            Err(ScheduleError::Empty)
        ));
    }

    #[test]
    fn test_from_json_str_with_gaps() {
        let json = r#"{
            "2026-02-03": { "Europe A": "Bergen, Norway", "Europe B": "" },
            "2026-02-01": { "Europe A": "Southampton, UK" },
            "2026-02-10": {}
        }"#;
        let store = ScheduleStore::from_json_str(json).unwrap();
        let dates: Vec<_> = store.dates_sorted().collect();
        assert_eq!(dates, vec![date("2026-02-01"), date("2026-02-03"), date("2026-02-10")]);
        assert!(store.port_on(date("2026-02-03"), VoyageId::EuropeB).is_none());
        assert!(store.port_on(date("2026-02-10"), VoyageId::EuropeA).is_none());
    }

    #[test]
    fn test_from_json_str_errors() {
        assert!(matches!(ScheduleStore::from_json_str("{}"), Err(ScheduleError::Empty)));
        assert!(matches!(ScheduleStore::from_json_str("not json"), Err(ScheduleError::Json(_))));
        assert!(matches!(
            ScheduleStore::from_json_str(r#"{"2026-13-01": {}}"#),
            Err(ScheduleError::InvalidDate(_))
        ));
    }
}
