// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed analysis: turn the located clauses of a syntax tree into a [`Command`].

use std::num::NonZeroU32;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::command::{Command, RecurrenceEnd, RecurrenceRule, WeekdaySet};
use crate::lexer::Span;
use crate::parser::ParseError;
use crate::syntax::{SyntaxCommand, SyntaxRecurrence, SyntaxRecurrenceEnd, TokenSpan};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Maps token-index spans back to the text of the command line.
#[derive(Debug, Clone, Copy)]
pub struct SourceMap<'src> {
    src: &'src str,
    spans: &'src [Span],
}

impl<'src> SourceMap<'src> {
    /// `spans[i]` is the byte range of the `i`-th body token in `src`.
    #[must_use]
    pub const fn new(src: &'src str, spans: &'src [Span]) -> Self {
        Self { src, spans }
    }

    /// The source text covered by the tokens in `span`, internal spacing kept.
    #[must_use]
    pub fn slice(&self, span: TokenSpan) -> &'src str {
        if span.start >= span.end {
            return "";
        }
        match (self.spans.get(span.start), self.spans.get(span.end - 1)) {
            (Some(first), Some(last)) => self.src.get(first.start..last.end).unwrap_or(""),
            _ => "",
        }
    }
}

/// Perform typed analysis on a syntax tree.
///
/// ## Errors
/// Fails on the first literal that does not parse as the value its clause
/// requires.
pub fn typed_analysis(
    syntax: SyntaxCommand,
    auto_decline: bool,
    map: &SourceMap<'_>,
) -> Result<Command, ParseError> {
    let text = |span: TokenSpan| map.slice(span).to_owned();
    let datetime = |span: TokenSpan| parse_datetime(map.slice(span));
    let date = |span: TokenSpan| parse_date(map.slice(span));

    Ok(match syntax {
        SyntaxCommand::CreateTimed {
            name,
            start,
            end,
            repeats,
        } => Command::CreateTimed {
            name: text(name),
            start: datetime(start)?,
            end: datetime(end)?,
            recurrence: repeats
                .map(|r| recurrence(r, map, parse_datetime))
                .transpose()?,
            auto_decline,
        },

        SyntaxCommand::CreateAllDay {
            name,
            date: day,
            repeats,
        } => Command::CreateAllDay {
            name: text(name),
            date: date(day)?,
            recurrence: repeats
                .map(|r| recurrence(r, map, |s| end_of_day(parse_date(s)?)))
                .transpose()?,
            auto_decline,
        },

        SyntaxCommand::EditSingle {
            property,
            name,
            start,
            end,
            value,
        } => Command::EditSingle {
            property: text(property),
            name: text(name),
            start: datetime(start)?,
            end: datetime(end)?,
            value: text(value),
        },

        SyntaxCommand::EditMany {
            property,
            name,
            start: Some(start),
            value,
        } => Command::EditManyFromStart {
            property: text(property),
            name: text(name),
            start: datetime(start)?,
            value: text(value),
        },

        SyntaxCommand::EditMany {
            property,
            name,
            start: None,
            value,
        } => Command::EditManyByName {
            property: text(property),
            name: text(name),
            value: text(value),
        },

        SyntaxCommand::PrintOn { date: day } => Command::QueryOn { date: date(day)? },

        SyntaxCommand::PrintRange { start, end } => Command::QueryRange {
            start: datetime(start)?,
            end: datetime(end)?,
        },

        SyntaxCommand::ExportCsv { path } => Command::ExportCsv {
            path: PathBuf::from(map.slice(path)),
        },

        SyntaxCommand::ExportGoogleCsv { path } => Command::ExportGoogleCsv {
            path: PathBuf::from(map.slice(path)),
        },

        SyntaxCommand::ShowStatus { at } => Command::ShowStatus { at: datetime(at)? },
    })
}

/// Weekdays are checked before the count or boundary.
fn recurrence(
    syntax: SyntaxRecurrence,
    map: &SourceMap<'_>,
    until: impl Fn(&str) -> Result<NaiveDateTime, ParseError>,
) -> Result<RecurrenceRule, ParseError> {
    let weekdays = parse_weekdays(map.slice(syntax.weekdays))?;
    let end = match syntax.end {
        SyntaxRecurrenceEnd::Count(span) => RecurrenceEnd::Count(parse_count(map.slice(span))?),
        SyntaxRecurrenceEnd::Until(span) => RecurrenceEnd::Until(until(map.slice(span))?),
    };
    Ok(RecurrenceRule { weekdays, end })
}

/// Parse weekday letters such as `MTWRF`.
///
/// ## Errors
/// Returns [`ParseError::InvalidWeekday`] naming the first letter outside `MTWRFSU`.
pub fn parse_weekdays(letters: &str) -> Result<WeekdaySet, ParseError> {
    letters
        .chars()
        .map(|c| WeekdaySet::weekday_of(c).ok_or(ParseError::InvalidWeekday { character: c }))
        .collect()
}

fn parse_count(literal: &str) -> Result<NonZeroU32, ParseError> {
    literal
        .parse::<NonZeroU32>()
        .map_err(|_| ParseError::InvalidCount {
            literal: literal.to_owned(),
        })
}

/// Parse a `YYYY-MM-DD` literal.
///
/// ## Errors
/// Returns [`ParseError::InvalidDate`] naming the literal.
pub fn parse_date(literal: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(literal, DATE_FORMAT).map_err(|_| ParseError::InvalidDate {
        literal: literal.to_owned(),
    })
}

/// Parse a `YYYY-MM-DDTHH:MM` literal.
///
/// ## Errors
/// Returns [`ParseError::InvalidDateTime`] naming the literal.
pub fn parse_datetime(literal: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(literal, DATETIME_FORMAT).map_err(|_| {
        ParseError::InvalidDateTime {
            literal: literal.to_owned(),
        }
    })
}

/// Midnight after `date`.
fn end_of_day(date: NaiveDate) -> Result<NaiveDateTime, ParseError> {
    date.and_time(chrono::NaiveTime::MIN)
        .checked_add_signed(TimeDelta::days(1))
        .ok_or(ParseError::InvalidDate {
            literal: date.format(DATE_FORMAT).to_string(),
        })
}
