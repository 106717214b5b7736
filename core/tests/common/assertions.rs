// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use calcmd_core::{EventStore, Interpreter};

/// Asserts that the store is sorted by start time.
///
/// # Panics
///
/// Panics if two neighbouring events are out of order.
pub fn assert_sorted_by_start(store: &EventStore) {
    for pair in store.events().windows(2) {
        assert!(
            pair[0].start() <= pair[1].start(),
            "store out of order: {} before {}",
            pair[0],
            pair[1]
        );
    }
}

/// Asserts the interpreter printed exactly `expected`, line by line.
///
/// # Panics
///
/// Panics if the output differs.
pub fn assert_output_lines(interpreter: &Interpreter<Vec<u8>>, expected: &[&str]) {
    let output = String::from_utf8(interpreter.output().clone()).expect("utf-8 output");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, expected, "output mismatch");
}
