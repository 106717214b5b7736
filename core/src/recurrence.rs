// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Expansion of weekly recurrence rules into concrete occurrences.

use calcmd_grammar::{RecurrenceEnd, RecurrenceRule};
use chrono::{Datelike, TimeDelta};

use crate::Event;

/// Expands `rule` into occurrences of `template`.
///
/// Candidate days are walked from the template's start date, inclusive. Each
/// day whose weekday is in the rule yields a copy of the template at the same
/// time of day, with the same duration and properties.
///
/// A count rule yields exactly that many occurrences. An until rule yields every
/// occurrence starting strictly before its boundary, and nothing if the
/// boundary precedes the template.
#[must_use]
pub fn expand(template: &Event, rule: &RecurrenceRule) -> Vec<Event> {
    if rule.weekdays.is_empty() {
        return Vec::new();
    }

    let starts = template
        .start()
        .date()
        .iter_days()
        .filter(|day| rule.weekdays.contains(day.weekday()))
        .map(|day| day.and_time(template.start().time()));

    let occurrences: Vec<Event> = match rule.end {
        RecurrenceEnd::Count(count) => starts
            .map_while(|start| template.moved_to(start))
            .take(usize::try_from(count.get()).unwrap_or(usize::MAX))
            .collect(),

        RecurrenceEnd::Until(until) => match until.checked_sub_signed(TimeDelta::seconds(1)) {
            Some(last) => starts
                .take_while(|start| *start <= last)
                .map_while(|start| template.moved_to(start))
                .collect(),
            None => Vec::new(),
        },
    };

    tracing::debug!(
        name = template.name(),
        weekdays = %rule.weekdays,
        occurrences = occurrences.len(),
        "recurrence expanded"
    );
    occurrences
}
