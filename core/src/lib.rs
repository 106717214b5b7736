// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory calendar engine: events, conflict-aware storage, weekly
//! recurrence, CSV export and a command interpreter on top of them.

mod config;
mod error;
mod event;
pub mod export;
mod interpreter;
pub mod recurrence;
mod store;

pub use crate::config::{APP_NAME, Config};
pub use crate::error::Error;
pub use crate::event::{Event, EventPatch};
pub use crate::export::{CsvFormat, read_csv};
pub use crate::interpreter::{Interpreter, Outcome};
pub use crate::store::{ConflictPolicy, EventStore};
pub use calcmd_grammar::{Command, ParseError, RecurrenceEnd, RecurrenceRule, WeekdaySet};
