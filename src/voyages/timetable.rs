//! Reference sailing timetable for January 2026.
//!
//! Columns follow [`VoyageId::ALL`](super::models::VoyageId::ALL):
//! Americas A, Americas B, Europe A, Europe B. A blank entry means the
//! ship is at sea that day.

pub const REFERENCE_TIMETABLE: &[(&str, [&str; 4])] = &[
    ("2026-01-01", ["New York City", "Halifax, NS", "Southampton, UK", "Lisbon, Portugal"]),
    ("2026-01-02", ["Wilmington, NC", "", "Cherbourg, France", "Cobh, Ireland"]),
    ("2026-01-03", ["Miami", "Bar Harbor, ME", "Bilbao, Spain", "Galway, Ireland"]),
    ("2026-01-04", ["Cancun", "Portland, ME", "", ""]),
    ("2026-01-05", ["Montego Bay", "", "Casablanca, Morocco", "Bergen, Norway"]),
    ("2026-01-06", ["Parrot Bay", "New York City", "Santa Cruz de Tenerife, Spain", "Bergen, Norway"]),
    ("2026-01-07", ["Tuckers Town, Bermuda", "New York City", "", ""]),
    ("2026-01-08", ["Wilmington, NC", "", "Edinburgh, Scotland", ""]),
    ("2026-01-09", ["Atlantic City", "Miami", "Ponta Delgada, Portugal", ""]),
    ("2026-01-10", ["", "Cancun", "Lisbon, Portugal", "Amsterdam, Netherlands"]),
    ("2026-01-11", ["Halifax, NS", "Montego Bay", "Cobh, Ireland", "Southampton, UK"]),
    ("2026-01-12", ["", "Parrot Bay", "Galway, Ireland", "Southampton, UK"]),
    ("2026-01-13", ["Bar Harbor, ME", "Tuckers Town, Bermuda", "Cherbourg, France", ""]),
    ("2026-01-14", ["Portland, ME", "", "Bergen, Norway", "Bilbao, Spain"]),
    ("2026-01-15", ["Atlantic City", "", "Bergen, Norway", ""]),
    ("2026-01-16", ["New York City", "", "Casablanca, Morocco", ""]),
    ("2026-01-17", ["New York City", "Halifax, NS", "Edinburgh, Scotland", "Santa Cruz de Tenerife, Spain"]),
    ("2026-01-18", ["Wilmington, NC", "", "", ""]),
    ("2026-01-19", ["Miami", "Bar Harbor, ME", "Amsterdam, Netherlands", ""]),
    ("2026-01-20", ["Cancun", "Portland, ME", "Southampton, UK", "Ponta Delgada, Portugal"]),
    ("2026-01-21", ["Montego Bay", "", "Southampton, UK", "Lisbon, Portugal"]),
    ("2026-01-22", ["Parrot Bay", "New York City", "Cherbourg, France", "Cobh, Ireland"]),
    ("2026-01-23", ["Tuckers Town, Bermuda", "New York City", "Bilbao, Spain", "Galway, Ireland"]),
    ("2026-01-24", ["Wilmington, NC", "", "", ""]),
    ("2026-01-25", ["Atlantic City", "Miami", "Casablanca, Morocco", "Bergen, Norway"]),
    ("2026-01-26", ["", "Cancun", "Santa Cruz de Tenerife, Spain", "Bergen, Norway"]),
    ("2026-01-27", ["Halifax, NS", "Montego Bay", "", ""]),
    ("2026-01-28", ["", "Parrot Bay", "Edinburgh, Scotland", ""]),
    ("2026-01-29", ["Bar Harbor, ME", "Tuckers Town, Bermuda", "Ponta Delgada, Portugal", ""]),
    ("2026-01-30", ["Portland, ME", "", "Lisbon, Portugal", "Amsterdam, Netherlands"]),
    ("2026-01-31", ["Atlantic City", "", "Cobh, Ireland", "Southampton, UK"]),
];
