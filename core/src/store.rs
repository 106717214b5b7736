// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime};

use crate::{Error, Event, EventPatch};

/// What to do when a new event overlaps existing ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Insert anyway and report every overlapping event.
    #[default]
    Warn,

    /// Decline the insertion on the first overlap.
    Reject,
}

/// In-memory collection of events, kept sorted by start time.
///
/// Events with the same start keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an event under a conflict policy.
    ///
    /// Returns the names of the overlapping events that were tolerated.
    ///
    /// ## Errors
    /// Under [`ConflictPolicy::Reject`], fails with [`Error::Conflict`] naming the
    /// first overlapping event in store order; the store is left unchanged.
    pub fn insert(&mut self, event: Event, policy: ConflictPolicy) -> Result<Vec<String>, Error> {
        let mut conflicts = Vec::new();
        for existing in self.events.iter().filter(|e| e.conflicts_with(&event)) {
            tracing::warn!(new = event.name(), existing = existing.name(), "event conflict");
            match policy {
                ConflictPolicy::Reject => {
                    return Err(Error::Conflict {
                        name: existing.name().to_owned(),
                    });
                }
                ConflictPolicy::Warn => conflicts.push(existing.name().to_owned()),
            }
        }

        let index = self.events.partition_point(|e| e.start() <= event.start());
        tracing::debug!(index, %event, "inserting event");
        self.events.insert(index, event);
        Ok(conflicts)
    }

    /// Events touching `date`, in start order.
    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.occurs_on(date))
    }

    /// Events overlapping `(start, end)`, in start order. Touching boundaries
    /// are excluded.
    pub fn events_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |e| e.start() < end && e.end() > start)
    }

    /// Whether any event covers `instant`.
    #[must_use]
    pub fn is_busy_at(&self, instant: NaiveDateTime) -> bool {
        self.events.iter().any(|e| e.covers(instant))
    }

    /// Patches the first event matching name, start and end exactly.
    ///
    /// Returns whether an event was found.
    pub fn edit_one(
        &mut self,
        name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        patch: &EventPatch,
    ) -> bool {
        let found = self
            .events
            .iter_mut()
            .find(|e| e.name() == name && e.start() == start && e.end() == end);
        match found {
            Some(event) => {
                event.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Patches every event named `name` that starts at or after `start`.
    ///
    /// Returns the number of events changed.
    pub fn edit_from_start(&mut self, name: &str, start: NaiveDateTime, patch: &EventPatch) -> usize {
        self.edit_where(patch, |e| e.name() == name && e.start() >= start)
    }

    /// Patches every event named `name`.
    ///
    /// Returns the number of events changed.
    pub fn edit_by_name(&mut self, name: &str, patch: &EventPatch) -> usize {
        self.edit_where(patch, |e| e.name() == name)
    }

    fn edit_where(&mut self, patch: &EventPatch, pred: impl Fn(&Event) -> bool) -> usize {
        let mut count = 0;
        for event in self.events.iter_mut().filter(|e| pred(e)) {
            event.apply(patch);
            count += 1;
        }
        tracing::debug!(count, property = patch.property(), "events patched");
        count
    }

    /// All events in start order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
