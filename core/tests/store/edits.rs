// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calcmd_core::EventPatch;

use crate::common::{dt, store_with, timed};

#[test]
fn edit_one_success_and_not_found() {
    let mut store = store_with([timed("Meeting", "2025-03-01T10:00", "2025-03-01T11:00")]);
    let patch = EventPatch::parse("description", "Quarterly").unwrap();

    assert!(store.edit_one("Meeting", dt("2025-03-01T10:00"), dt("2025-03-01T11:00"), &patch));
    assert_eq!(store.events()[0].description(), "Quarterly");

    assert!(!store.edit_one("Meeting", dt("2025-03-01T10:00"), dt("2025-03-01T10:30"), &patch));
    assert!(!store.edit_one("meeting", dt("2025-03-01T10:00"), dt("2025-03-01T11:00"), &patch));
}

#[test]
fn edit_one_touches_first_match_only() {
    let mut store = store_with([
        timed("Dup", "2025-03-01T10:00", "2025-03-01T11:00"),
        timed("Dup", "2025-03-01T10:00", "2025-03-01T11:00"),
    ]);
    let patch = EventPatch::parse("location", "Room 1").unwrap();
    assert!(store.edit_one("Dup", dt("2025-03-01T10:00"), dt("2025-03-01T11:00"), &patch));

    let locations: Vec<_> = store.iter().map(|e| e.location()).collect();
    assert_eq!(locations, ["Room 1", ""]);
}

#[test]
fn edit_from_start_is_inclusive() {
    let mut store = store_with([
        timed("Seminar", "2025-03-03T09:00", "2025-03-03T10:00"),
        timed("Seminar", "2025-03-05T09:00", "2025-03-05T10:00"),
        timed("Seminar", "2025-03-07T09:00", "2025-03-07T10:00"),
        timed("Other", "2025-03-08T09:00", "2025-03-08T10:00"),
    ]);
    let patch = EventPatch::parse("PUBLIC", "False").unwrap();

    assert_eq!(store.edit_from_start("Seminar", dt("2025-03-05T09:00"), &patch), 2);
    let public: Vec<_> = store.iter().map(|e| e.is_public()).collect();
    assert_eq!(public, [true, false, false, true]);
}

#[test]
fn edits_may_create_overlaps() {
    let mut store = store_with([
        timed("A", "2025-03-01T10:00", "2025-03-01T11:00"),
        timed("B", "2025-03-01T10:30", "2025-03-01T11:30"),
    ]);
    let patch = EventPatch::parse("name", "A").unwrap();
    assert_eq!(store.edit_by_name("B", &patch), 1);
    assert_eq!(store.edit_by_name("A", &EventPatch::parse("location", "Hall").unwrap()), 2);
}
