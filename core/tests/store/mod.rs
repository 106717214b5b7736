// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event store integration tests: conflicts, ordering, queries and scoped edits.

mod conflicts;
mod edits;
mod queries;
