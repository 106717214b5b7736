// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! CSV export in two dialects, and import of the custom one.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::{Error, Event};

const CUSTOM_HEADER: &str = "EventName,Start,End,AllDay,Description,Location,Public";
const CUSTOM_DATETIME: &str = "%Y-%m-%d %H:%M";

const GOOGLE_HEADER: &str =
    "Subject,Start Date,Start Time,End Date,End Time,All Day Event,Description,Location,Private";
const GOOGLE_DATE: &str = "%m/%d/%Y";
const GOOGLE_TIME: &str = "%I:%M %p";

/// CSV dialect of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum CsvFormat {
    /// Round-trippable dialect with one timestamp per column.
    #[strum(to_string = "CSV")]
    Custom,

    /// Dialect accepted by the Google Calendar importer.
    #[strum(to_string = "Google CSV")]
    Google,
}

/// Writes `events` to `out` as CSV, header first.
///
/// ## Errors
/// Propagates any write failure.
pub fn write_csv<'a, W: Write>(
    out: &mut W,
    events: impl IntoIterator<Item = &'a Event>,
    format: CsvFormat,
) -> io::Result<()> {
    match format {
        CsvFormat::Custom => {
            writeln!(out, "{CUSTOM_HEADER}")?;
            for event in events {
                writeln!(
                    out,
                    "{},{},{},{},{},{},{}",
                    quote(event.name()),
                    event.start().format(CUSTOM_DATETIME),
                    event.end().format(CUSTOM_DATETIME),
                    event.is_all_day(),
                    quote(event.description()),
                    quote(event.location()),
                    event.is_public(),
                )?;
            }
        }

        CsvFormat::Google => {
            writeln!(out, "{GOOGLE_HEADER}")?;
            for event in events {
                write!(out, "{},", quote(event.name()))?;
                if event.is_all_day() {
                    let date = event.start().format(GOOGLE_DATE);
                    write!(out, "{date},,{date},,True,")?;
                } else {
                    write!(
                        out,
                        "{},{},{},{},False,",
                        event.start().format(GOOGLE_DATE),
                        event.start().format(GOOGLE_TIME),
                        event.end().format(GOOGLE_DATE),
                        event.end().format(GOOGLE_TIME),
                    )?;
                }
                writeln!(
                    out,
                    "{},{},{}",
                    quote(event.description()),
                    quote(event.location()),
                    if event.is_public() { "False" } else { "True" },
                )?;
            }
        }
    }
    Ok(())
}

/// Writes a full snapshot of `events` to the file at `path`, replacing it.
///
/// Returns the absolute path of the written file.
///
/// ## Errors
/// Fails with [`Error::Export`] if the file cannot be created or written.
pub fn export_to_path<'a>(
    path: &Path,
    events: impl IntoIterator<Item = &'a Event>,
    format: CsvFormat,
) -> Result<PathBuf, Error> {
    let to_error = |source: io::Error| Error::Export {
        path: path.to_owned(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(to_error)?);
    write_csv(&mut out, events, format).map_err(to_error)?;
    out.flush().map_err(to_error)?;

    let absolute = std::path::absolute(path).map_err(to_error)?;
    tracing::debug!(path = %absolute.display(), %format, "events exported");
    Ok(absolute)
}

/// Reads events back from the custom CSV dialect.
///
/// ## Errors
/// Fails with [`Error::Import`] carrying the 1-based line number of the first
/// malformed line, or with [`Error::Output`] if reading fails.
pub fn read_csv<R: BufRead>(reader: R) -> Result<Vec<Event>, Error> {
    let mut lines = reader.lines().enumerate();
    let Some((_, header)) = lines.next() else {
        return Ok(Vec::new());
    };
    if header?.trim_end() != CUSTOM_HEADER {
        return Err(Error::Import {
            line: 1,
            message: format!("expected header `{CUSTOM_HEADER}`"),
        });
    }

    let mut events = Vec::new();
    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = parse_row(&line).map_err(|message| Error::Import {
            line: index + 1,
            message,
        })?;
        events.push(event);
    }
    Ok(events)
}

fn parse_row(line: &str) -> Result<Event, String> {
    let fields = split_fields(line)?;
    let [name, start, end, all_day, description, location, public] =
        <[String; 7]>::try_from(fields)
            .map_err(|fields| format!("expected 7 fields, found {}", fields.len()))?;

    let start = parse_timestamp(&start)?;
    let end = parse_timestamp(&end)?;
    let event = if parse_bool(&all_day)? {
        Event::all_day(name, start.date())
    } else {
        Event::timed(name, start, end)
    }
    .map_err(|e| e.to_string())?;

    Ok(event
        .with_description(description)
        .with_location(location)
        .with_public(parse_bool(&public)?))
}

fn parse_timestamp(field: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(field, CUSTOM_DATETIME)
        .map_err(|e| format!("invalid timestamp `{field}`: {e}"))
}

fn parse_bool(field: &str) -> Result<bool, String> {
    match field {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(format!("invalid boolean `{field}`")),
    }
}

/// Splits one CSV line, honoring double-quoted fields with `""` escapes.
fn split_fields(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut at_field_start = true;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if quoted {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => quoted = false,
                _ => field.push(c),
            }
        } else {
            match c {
                ',' => {
                    fields.push(std::mem::take(&mut field));
                    at_field_start = true;
                    continue;
                }
                '"' if at_field_start => quoted = true,
                '"' => return Err("unexpected quote inside unquoted field".to_owned()),
                _ => field.push(c),
            }
        }
        at_field_start = false;
    }

    if quoted {
        return Err("unterminated quoted field".to_owned());
    }
    fields.push(field);
    Ok(fields)
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
