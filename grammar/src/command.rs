// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::num::NonZeroU32;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, Weekday};

/// A fully typed command, ready to be executed against an event store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a timed event, optionally recurring.
    CreateTimed {
        name: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
        recurrence: Option<RecurrenceRule>,
        auto_decline: bool,
    },

    /// Create an all-day event, optionally recurring.
    CreateAllDay {
        name: String,
        date: NaiveDate,
        recurrence: Option<RecurrenceRule>,
        auto_decline: bool,
    },

    /// Edit the one event matching name, start and end exactly.
    EditSingle {
        property: String,
        name: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
        value: String,
    },

    /// Edit every event with the name starting at or after `start`.
    EditManyFromStart {
        property: String,
        name: String,
        start: NaiveDateTime,
        value: String,
    },

    /// Edit every event with the name.
    EditManyByName {
        property: String,
        name: String,
        value: String,
    },

    /// List events touching a date.
    QueryOn { date: NaiveDate },

    /// List events overlapping a range.
    QueryRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Export all events in the custom CSV dialect.
    ExportCsv { path: PathBuf },

    /// Export all events in the Google Calendar CSV dialect.
    ExportGoogleCsv { path: PathBuf },

    /// Report whether any event covers an instant.
    ShowStatus { at: NaiveDateTime },
}

/// Weekly recurrence: the weekdays an occurrence may fall on, and when to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub weekdays: WeekdaySet,
    pub end: RecurrenceEnd,
}

/// Termination of a recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceEnd {
    /// Stop after this many occurrences.
    Count(NonZeroU32),

    /// Exclusive upper bound for occurrence starts.
    ///
    /// For an all-day rule this is midnight after the given date, so the date
    /// itself is still covered.
    Until(NaiveDateTime),
}

/// A set of weekdays, as written with the letters `MTWRFSU`.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Map a weekday letter, case-insensitively.
    #[must_use]
    pub fn weekday_of(letter: char) -> Option<Weekday> {
        match letter.to_ascii_uppercase() {
            'M' => Some(Weekday::Mon),
            'T' => Some(Weekday::Tue),
            'W' => Some(Weekday::Wed),
            'R' => Some(Weekday::Thu),
            'F' => Some(Weekday::Fri),
            'S' => Some(Weekday::Sat),
            'U' => Some(Weekday::Sun),
            _ => None,
        }
    }

    #[must_use]
    pub fn with(self, weekday: Weekday) -> Self {
        Self(self.0 | (1 << weekday.num_days_from_monday()))
    }

    pub fn insert(&mut self, weekday: Weekday) {
        *self = self.with(weekday);
    }

    #[must_use]
    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.num_days_from_monday()) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Weekdays in the set, Monday first.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            let letter = match day {
                Weekday::Mon => 'M',
                Weekday::Tue => 'T',
                Weekday::Wed => 'W',
                Weekday::Thu => 'R',
                Weekday::Fri => 'F',
                Weekday::Sat => 'S',
                Weekday::Sun => 'U',
            };
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
