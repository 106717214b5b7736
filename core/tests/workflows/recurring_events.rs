// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurring event creation through the command language.

use calcmd_core::{Error, Outcome, ParseError};
use chrono::{Datelike, Weekday};

use crate::common::{assert_output_lines, assert_sorted_by_start, date, dt, interpreter};

#[test]
fn weekday_count_on_all_day_events() {
    let mut it = interpreter();

    let outcome = it
        .execute("create event Workshop on 2025-03-02 repeats MTWRF for 3 times")
        .unwrap();

    assert!(matches!(outcome, Outcome::Created { occurrences: 3, .. }));
    let events = it.store().events();
    assert_eq!(events.len(), 3);
    let mut previous = date("2025-03-01");
    for event in events {
        let day = event.start().date();
        assert!(event.is_all_day());
        assert!(day >= date("2025-03-02"));
        assert!(day > previous, "dates strictly increase");
        assert!(!matches!(day.weekday(), Weekday::Sat | Weekday::Sun));
        previous = day;
    }
    assert_output_lines(&it, &["Recurring all-day event created with 3 occurrences."]);
}

#[test]
fn weekday_until_on_timed_events() {
    let mut it = interpreter();

    it.execute(
        "create event Seminar from 2025-03-03T09:00 to 2025-03-03T10:30 repeats WF until 2025-03-10T00:00",
    )
    .unwrap();

    let events = it.store().events();
    assert!(!events.is_empty());
    for event in events {
        let day = event.start().date();
        assert!(matches!(day.weekday(), Weekday::Wed | Weekday::Fri));
        assert!(day >= date("2025-03-03") && day <= date("2025-03-09"));
        assert_eq!(event.end() - event.start(), chrono::TimeDelta::minutes(90));
    }
    assert_output_lines(&it, &["Recurring event created with 2 occurrences."]);
}

#[test]
fn all_day_until_includes_the_date() {
    let mut it = interpreter();
    it.execute("create event Review on 2025-03-03 repeats F until 2025-03-14")
        .unwrap();

    let starts: Vec<_> = it.store().iter().map(|e| e.start()).collect();
    assert_eq!(starts, [dt("2025-03-07T00:00"), dt("2025-03-14T00:00")]);
}

#[test]
fn recurring_occurrences_warn_per_conflict() {
    let mut it = interpreter();
    it.execute("create event Trip on 2025-03-04").unwrap();
    it.output_mut().clear();

    let outcome = it
        .execute("create event Standup from 2025-03-03T09:00 to 2025-03-03T09:15 repeats MTW for 3 times")
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Created {
            occurrences: 3,
            conflicts: vec!["Trip".to_owned()],
        }
    );
    assert_output_lines(
        &it,
        &[
            "Warning: Event conflicts with Trip",
            "Recurring event created with 3 occurrences.",
        ],
    );
    assert_sorted_by_start(it.store());
}

#[test]
fn invalid_weekday_creates_nothing() {
    let mut it = interpreter();
    let err = it
        .execute("create event X on 2025-03-03 repeats MQ for 2 times")
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Parse(ParseError::InvalidWeekday { character: 'Q' })
    ));
    assert_eq!(err.to_string(), "Invalid weekday character: Q");
    assert!(it.store().is_empty());
}
