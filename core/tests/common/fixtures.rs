// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use calcmd_core::{Config, ConflictPolicy, Event, EventStore, Interpreter};
use chrono::{NaiveDate, NaiveDateTime};

/// Parses a `YYYY-MM-DDTHH:MM` literal.
#[must_use]
pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").expect("valid date-time literal")
}

/// Parses a `YYYY-MM-DD` literal.
#[must_use]
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date literal")
}

/// Creates a timed event.
///
/// # Example
///
/// ```ignore
/// let event = timed("Team Meeting", "2025-03-01T10:00", "2025-03-01T11:00");
/// ```
#[must_use]
pub fn timed(name: &str, start: &str, end: &str) -> Event {
    Event::timed(name, dt(start), dt(end)).expect("valid interval")
}

/// Creates an all-day event.
#[must_use]
pub fn all_day(name: &str, on: &str) -> Event {
    Event::all_day(name, date(on)).expect("valid date")
}

/// Creates a store holding `events`, inserted in order with warnings allowed.
#[must_use]
pub fn store_with(events: impl IntoIterator<Item = Event>) -> EventStore {
    let mut store = EventStore::new();
    for event in events {
        store
            .insert(event, ConflictPolicy::Warn)
            .expect("warn policy never fails");
    }
    store
}

/// Creates an interpreter with default configuration, writing to a buffer.
#[must_use]
pub fn interpreter() -> Interpreter<Vec<u8>> {
    Interpreter::new(&Config::default(), Vec::new())
}
