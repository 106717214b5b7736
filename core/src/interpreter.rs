// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use calcmd_grammar::{Command, RecurrenceRule};

use crate::export::{CsvFormat, export_to_path};
use crate::recurrence::expand;
use crate::{Config, ConflictPolicy, Error, Event, EventPatch, EventStore};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// What a command did, alongside the text it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Events were inserted.
    Created {
        /// Number of occurrences inserted
        occurrences: usize,
        /// Names of existing events the new ones overlap
        conflicts: Vec<String>,
    },

    /// Events were edited. A singular edit reports at most one.
    Updated { count: usize },

    /// Events matched a query, in start order.
    Events(Vec<Event>),

    /// Busy or available at an instant.
    Status { busy: bool },

    /// Events were written to a file.
    Exported { path: PathBuf },
}

/// Executes commands against an event store, writing human-readable output to
/// a sink.
#[derive(Debug)]
pub struct Interpreter<W: Write> {
    store: EventStore,
    out: W,
    policy: ConflictPolicy,
}

impl Interpreter<io::Stdout> {
    /// An interpreter printing to standard output.
    #[must_use]
    pub fn stdout(config: &Config) -> Self {
        Self::new(config, io::stdout())
    }
}

impl<W: Write> Interpreter<W> {
    pub fn new(config: &Config, out: W) -> Self {
        Self {
            store: EventStore::new(),
            out,
            policy: config.default_policy(),
        }
    }

    /// Parses and runs one command line.
    ///
    /// ## Errors
    /// Fails if the line does not parse, or if the command itself fails. The
    /// store keeps every change made before the failure.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, Error> {
        let command = calcmd_grammar::parse(line)?;
        tracing::debug!(?command, "command parsed");
        self.run(command)
    }

    /// Runs an already parsed command.
    ///
    /// ## Errors
    /// See [`Interpreter::execute`].
    pub fn run(&mut self, command: Command) -> Result<Outcome, Error> {
        match command {
            Command::CreateTimed {
                name,
                start,
                end,
                recurrence,
                auto_decline,
            } => {
                let template = Event::timed(name, start, end)?;
                self.create(template, recurrence, auto_decline)
            }

            Command::CreateAllDay {
                name,
                date,
                recurrence,
                auto_decline,
            } => {
                let template = Event::all_day(name, date)?;
                self.create(template, recurrence, auto_decline)
            }

            Command::EditSingle {
                property,
                name,
                start,
                end,
                value,
            } => {
                let found = patch(&property, &value)
                    .is_some_and(|p| self.store.edit_one(&name, start, end, &p));
                if found {
                    writeln!(self.out, "Event updated successfully.")?;
                } else {
                    writeln!(self.out, "Event not found or update failed.")?;
                }
                Ok(Outcome::Updated {
                    count: usize::from(found),
                })
            }

            Command::EditManyFromStart {
                property,
                name,
                start,
                value,
            } => {
                let count = patch(&property, &value)
                    .map_or(0, |p| self.store.edit_from_start(&name, start, &p));
                writeln!(
                    self.out,
                    "{count} event(s) updated starting from {}",
                    start.format(DATETIME_FORMAT)
                )?;
                Ok(Outcome::Updated { count })
            }

            Command::EditManyByName {
                property,
                name,
                value,
            } => {
                let count = patch(&property, &value)
                    .map_or(0, |p| self.store.edit_by_name(&name, &p));
                writeln!(self.out, "{count} event(s) updated with new {property}")?;
                Ok(Outcome::Updated { count })
            }

            Command::QueryOn { date } => {
                let events: Vec<Event> = self.store.events_on(date).cloned().collect();
                if events.is_empty() {
                    writeln!(self.out, "No events found on {date}")?;
                } else {
                    writeln!(self.out, "Events on {date}:")?;
                    self.list(&events)?;
                }
                Ok(Outcome::Events(events))
            }

            Command::QueryRange { start, end } => {
                let events: Vec<Event> = self.store.events_in_range(start, end).cloned().collect();
                let (start, end) = (start.format(DATETIME_FORMAT), end.format(DATETIME_FORMAT));
                if events.is_empty() {
                    writeln!(self.out, "No events found between {start} and {end}")?;
                } else {
                    writeln!(self.out, "Events between {start} and {end}:")?;
                    self.list(&events)?;
                }
                Ok(Outcome::Events(events))
            }

            Command::ExportCsv { path } => self.export(&path, CsvFormat::Custom),

            Command::ExportGoogleCsv { path } => self.export(&path, CsvFormat::Google),

            Command::ShowStatus { at } => {
                let busy = self.store.is_busy_at(at);
                writeln!(
                    self.out,
                    "Status at {}: {}",
                    at.format(DATETIME_FORMAT),
                    if busy { "Busy" } else { "Available" }
                )?;
                Ok(Outcome::Status { busy })
            }
        }
    }

    fn create(
        &mut self,
        template: Event,
        recurrence: Option<RecurrenceRule>,
        auto_decline: bool,
    ) -> Result<Outcome, Error> {
        let policy = if auto_decline {
            ConflictPolicy::Reject
        } else {
            self.policy
        };
        let all_day = template.is_all_day();

        let Some(rule) = recurrence else {
            let conflicts = self.insert(template.clone(), policy)?;
            if all_day {
                writeln!(self.out, "All-day event created: {template}")?;
            } else {
                writeln!(self.out, "Event created: {template}")?;
            }
            return Ok(Outcome::Created {
                occurrences: 1,
                conflicts,
            });
        };

        // Occurrences inserted before a declined one are kept
        let occurrences = expand(&template, &rule);
        let mut conflicts = Vec::new();
        for occurrence in &occurrences {
            conflicts.extend(self.insert(occurrence.clone(), policy)?);
        }
        let n = occurrences.len();
        if all_day {
            writeln!(self.out, "Recurring all-day event created with {n} occurrences.")?;
        } else {
            writeln!(self.out, "Recurring event created with {n} occurrences.")?;
        }
        Ok(Outcome::Created {
            occurrences: n,
            conflicts,
        })
    }

    fn insert(&mut self, event: Event, policy: ConflictPolicy) -> Result<Vec<String>, Error> {
        let conflicts = self.store.insert(event, policy)?;
        for name in &conflicts {
            writeln!(self.out, "Warning: Event conflicts with {name}")?;
        }
        Ok(conflicts)
    }

    fn list(&mut self, events: &[Event]) -> io::Result<()> {
        for event in events {
            writeln!(self.out, " - {event}")?;
        }
        Ok(())
    }

    fn export(&mut self, path: &Path, format: CsvFormat) -> Result<Outcome, Error> {
        let path = export_to_path(path, &self.store, format)?;
        writeln!(self.out, "Exported to {format}: {}", path.display())?;
        Ok(Outcome::Exported { path })
    }

    #[must_use]
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// The output sink.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the interpreter, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

fn patch(property: &str, value: &str) -> Option<EventPatch> {
    let patch = EventPatch::parse(property, value);
    if patch.is_none() {
        tracing::warn!(property, "unknown event property, nothing updated");
    }
    patch
}
