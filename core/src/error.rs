// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

use calcmd_grammar::ParseError;
use chrono::NaiveDateTime;

/// Errors raised while executing a command.
///
/// None of them is fatal: a front end reports the error and moves on to the
/// next command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An insertion was declined because it overlaps an existing event.
    #[error("Conflict detected with event: {name}")]
    Conflict {
        /// Name of the first conflicting event in store order
        name: String,
    },

    /// An event would end at or before its start.
    #[error("Invalid event interval: end {end} is not after start {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// An event name is empty.
    #[error("Event name must not be empty")]
    EmptyName,

    /// Writing an export file failed.
    #[error("Failed to export to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A CSV row could not be read back into an event.
    #[error("Invalid CSV at line {line}: {message}")]
    Import { line: usize, message: String },

    /// Writing to the output sink failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
