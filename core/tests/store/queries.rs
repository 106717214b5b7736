// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::{all_day, date, dt, store_with, timed};

#[test]
fn events_on_date() {
    let store = store_with([
        all_day("Holiday", "2025-03-01"),
        timed("Overnight", "2025-02-28T22:00", "2025-03-01T02:00"),
        timed("Meeting", "2025-03-02T10:00", "2025-03-02T11:00"),
    ]);

    let names: Vec<_> = store.events_on(date("2025-03-01")).map(|e| e.name()).collect();
    assert_eq!(names, ["Overnight", "Holiday"]);

    // An all-day event ends at midnight of the next date but does not occur on it
    let names: Vec<_> = store.events_on(date("2025-03-02")).map(|e| e.name()).collect();
    assert_eq!(names, ["Meeting"]);

    assert_eq!(store.events_on(date("2025-03-03")).count(), 0);
}

#[test]
fn range_boundaries_are_strict() {
    let store = store_with([
        timed("Before", "2025-03-01T08:00", "2025-03-01T09:00"),
        timed("Inside", "2025-03-01T09:30", "2025-03-01T10:00"),
        timed("Straddle", "2025-03-01T10:30", "2025-03-01T11:30"),
        timed("After", "2025-03-01T11:00", "2025-03-01T12:00"),
    ]);

    let names: Vec<_> = store
        .events_in_range(dt("2025-03-01T09:00"), dt("2025-03-01T11:00"))
        .map(|e| e.name())
        .collect();
    assert_eq!(names, ["Inside", "Straddle"]);
}

#[test]
fn busy_status() {
    let store = store_with([
        timed("A", "2025-03-01T10:00", "2025-03-01T11:00"),
        all_day("Holiday", "2025-03-03"),
    ]);

    assert!(store.is_busy_at(dt("2025-03-01T10:00")));
    assert!(store.is_busy_at(dt("2025-03-01T10:30")));
    assert!(!store.is_busy_at(dt("2025-03-01T11:00")));
    assert!(store.is_busy_at(dt("2025-03-03T00:00")));
    assert!(store.is_busy_at(dt("2025-03-03T23:59")));
    assert!(!store.is_busy_at(dt("2025-03-04T00:00")));
}
