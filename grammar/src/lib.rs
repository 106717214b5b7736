// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse calendar command lines into typed commands.
//!
//! A line goes through three passes: [`lexer`] splits it into keyword and word
//! tokens, [`syntax`] locates the clauses of its verb, and [`typed`] turns the
//! clause text into dates, recurrence rules and values.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::similar_names, clippy::single_match_else)]

mod command;
pub mod lexer;
mod parser;
pub mod syntax;
pub mod typed;
mod verb;

pub use crate::command::{Command, RecurrenceEnd, RecurrenceRule, WeekdaySet};
pub use crate::lexer::Token;
pub use crate::parser::{ParseError, parse};
pub use crate::typed::{parse_date, parse_datetime, parse_weekdays};
pub use crate::verb::Verb;
