//! Timetable and booking models for voyages.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the fixed cruise routes operated by the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VoyageId {
    #[serde(rename = "Americas A")]
    AmericasA,
    #[serde(rename = "Americas B")]
    AmericasB,
    #[serde(rename = "Europe A")]
    EuropeA,
    #[serde(rename = "Europe B")]
    EuropeB,
}

impl VoyageId {
    /// Every voyage, in timetable column order
    pub const ALL: [VoyageId; 4] = [
        VoyageId::AmericasA,
        VoyageId::AmericasB,
        VoyageId::EuropeA,
        VoyageId::EuropeB,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoyageId::AmericasA => "Americas A",
            VoyageId::AmericasB => "Americas B",
            VoyageId::EuropeA => "Europe A",
            VoyageId::EuropeB => "Europe B",
        }
    }
}

impl fmt::Display for VoyageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known voyage
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown voyage: {0}")]
pub struct UnknownVoyage(pub String);

impl FromStr for VoyageId {
    type Err = UnknownVoyage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VoyageId::ALL
            .into_iter()
            .find(|v| v.as_str() == s.trim())
            .ok_or_else(|| UnknownVoyage(s.to_string()))
    }
}

/// Name of a port of call. Never empty; "at sea" is modelled as `Option::None`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PortName(String);

impl PortName {
    /// Wrap a port name, returning `None` for a blank entry (ship at sea)
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == name.len() {
            Some(Self(name))
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for PortName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Port calls for every voyage on a single day
pub type ScheduleDay = BTreeMap<VoyageId, Option<PortName>>;

/// A (date, port) pair where the ship makes landfall
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub date: NaiveDate,
    pub port: PortName,
}

/// A voyage that can be boarded at `port` on a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Departure {
    pub voyage: VoyageId,
    pub port: PortName,
}

/// A finalized trip. Built only by the booking assembler and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub passenger_name: String,
    pub voyage: VoyageId,
    pub departure: Stop,
    pub arrival: Stop,
    pub nights: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub cost: Decimal,
    pub booked_at: DateTime<Utc>,
    pub account_id: Uuid,
}

/// Passenger selections from the booking form, before validation
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub passenger_name: String,
    pub voyage: VoyageId,
    pub departure_date: NaiveDate,
    pub departure_port: String,
    pub arrival_date: NaiveDate,
    pub arrival_port: String,
}
