// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calcmd_core::{ConflictPolicy, Error, EventStore};

use crate::common::{all_day, assert_sorted_by_start, store_with, timed};

#[test]
fn conflict_is_symmetric() {
    let pairs = [
        (("10:00", "11:00"), ("10:30", "11:30"), true),
        (("10:00", "11:00"), ("11:00", "12:00"), false),
        (("10:00", "12:00"), ("10:30", "11:00"), true),
        (("10:00", "11:00"), ("09:00", "10:00"), false),
        (("10:00", "11:00"), ("10:00", "11:00"), true),
    ];
    for ((s1, e1), (s2, e2), expected) in pairs {
        let a = timed("A", &format!("2025-03-01T{s1}"), &format!("2025-03-01T{e1}"));
        let b = timed("B", &format!("2025-03-01T{s2}"), &format!("2025-03-01T{e2}"));
        assert_eq!(a.conflicts_with(&b), expected, "{a} vs {b}");
        assert_eq!(b.conflicts_with(&a), expected, "{b} vs {a}");
    }
}

#[test]
fn all_day_conflicts_with_timed_on_same_day() {
    let holiday = all_day("Holiday", "2025-03-01");
    assert!(holiday.conflicts_with(&timed("Lunch", "2025-03-01T12:00", "2025-03-01T13:00")));
    assert!(!holiday.conflicts_with(&timed("Late", "2025-03-02T00:00", "2025-03-02T01:00")));
}

#[test]
fn reject_names_first_conflict_in_store_order() {
    let mut store = store_with([
        timed("Late", "2025-03-01T10:30", "2025-03-01T12:00"),
        timed("Early", "2025-03-01T09:00", "2025-03-01T10:45"),
    ]);

    let err = store
        .insert(
            timed("New", "2025-03-01T10:00", "2025-03-01T11:00"),
            ConflictPolicy::Reject,
        )
        .unwrap_err();

    assert!(matches!(err, Error::Conflict { ref name } if name == "Early"));
    assert_eq!(store.len(), 2);
}

#[test]
fn insertion_keeps_store_sorted() {
    let mut store = EventStore::new();
    let starts = [
        "2025-03-05T09:00",
        "2025-03-01T09:00",
        "2025-03-03T09:00",
        "2025-03-01T08:00",
        "2025-03-09T09:00",
    ];
    for (i, start) in starts.into_iter().enumerate() {
        let end = start.replace("T09:00", "T09:30").replace("T08:00", "T08:30");
        store
            .insert(timed(&format!("E{i}"), start, &end), ConflictPolicy::Warn)
            .unwrap();
        assert_sorted_by_start(&store);
    }
}

#[test]
fn equal_starts_keep_insertion_order() {
    let store = store_with([
        timed("First", "2025-03-01T09:00", "2025-03-01T10:00"),
        all_day("Day", "2025-03-01"),
        timed("Second", "2025-03-01T09:00", "2025-03-01T09:30"),
        timed("Third", "2025-03-01T09:00", "2025-03-01T11:00"),
    ]);
    let names: Vec<_> = store.iter().map(|e| e.name()).collect();
    assert_eq!(names, ["Day", "First", "Second", "Third"]);
}
