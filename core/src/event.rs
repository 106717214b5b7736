// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::Error;

/// A calendar event over the half-open interval `[start, end)`.
///
/// `start < end` holds for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    all_day: bool,
    description: String,
    location: String,
    public: bool,
}

impl Event {
    /// Creates a timed event.
    ///
    /// ## Errors
    /// Fails if the name is empty or `end` is not after `start`.
    pub fn timed(
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if end <= start {
            return Err(Error::InvalidInterval { start, end });
        }
        Ok(Self {
            name,
            start,
            end,
            all_day: false,
            description: String::new(),
            location: String::new(),
            public: true,
        })
    }

    /// Creates an all-day event, spanning midnight to the following midnight.
    ///
    /// ## Errors
    /// Fails if the name is empty or the date is the last representable one.
    pub fn all_day(name: impl Into<String>, date: NaiveDate) -> Result<Self, Error> {
        let start = date.and_time(NaiveTime::MIN);
        let end = start
            .checked_add_signed(TimeDelta::days(1))
            .ok_or(Error::InvalidInterval { start, end: start })?;
        let mut event = Self::timed(name, start, end)?;
        event.all_day = true;
        Ok(event)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// A copy of this event moved to `start`, keeping its duration and properties.
    ///
    /// Returns `None` if the moved interval is out of range.
    #[must_use]
    pub fn moved_to(&self, start: NaiveDateTime) -> Option<Self> {
        let end = start.checked_add_signed(self.duration())?;
        Some(Self {
            start,
            end,
            ..self.clone()
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    #[must_use]
    pub fn is_all_day(&self) -> bool {
        self.all_day
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.public
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether the two intervals overlap. Touching boundaries do not.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether the event touches `date`.
    ///
    /// An all-day event only matches its own date; a timed event matches every
    /// date from its start date to its end date, inclusive.
    #[must_use]
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        if self.all_day {
            self.start.date() == date
        } else {
            self.start.date() <= date && date <= self.end.date()
        }
    }

    /// Whether `instant` falls within `[start, end)`.
    #[must_use]
    pub fn covers(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    pub(crate) fn apply(&mut self, patch: &EventPatch) {
        match patch {
            EventPatch::Name(name) => self.name.clone_from(name),
            EventPatch::Description(description) => self.description.clone_from(description),
            EventPatch::Location(location) => self.location.clone_from(location),
            EventPatch::Public(public) => self.public = *public,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FORMAT: &str = "%Y-%m-%d %H:%M";
        if self.all_day {
            write!(f, "{} (All Day on {})", self.name, self.start.date())?;
        } else {
            write!(
                f,
                "{} from {} to {}",
                self.name,
                self.start.format(FORMAT),
                self.end.format(FORMAT)
            )?;
        }
        if !self.description.is_empty() {
            write!(f, ", Description: {}", self.description)?;
        }
        if !self.location.is_empty() {
            write!(f, ", Location: {}", self.location)?;
        }
        write!(f, ", {}", if self.public { "Public" } else { "Private" })
    }
}

/// A change to a single editable property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPatch {
    Name(String),
    Description(String),
    Location(String),
    Public(bool),
}

impl EventPatch {
    /// Builds a patch from a property name and its raw value.
    ///
    /// Property names are matched case-insensitively. `public` is set only when
    /// the value is `true` in any case. Returns `None` for an unknown property.
    #[must_use]
    pub fn parse(property: &str, value: &str) -> Option<Self> {
        match property.to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name(value.to_owned())),
            "description" => Some(Self::Description(value.to_owned())),
            "location" => Some(Self::Location(value.to_owned())),
            "public" => Some(Self::Public(value.eq_ignore_ascii_case("true"))),
            _ => None,
        }
    }

    /// Name of the patched property, lower case.
    #[must_use]
    pub fn property(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Description(_) => "description",
            Self::Location(_) => "location",
            Self::Public(_) => "public",
        }
    }
}
