// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command verbs, the fixed leading keywords of every command.

use crate::lexer::Token;

/// The verb of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Verb {
    /// `create event`
    #[strum(to_string = "create event")]
    CreateEvent,

    /// `edit events`
    #[strum(to_string = "edit events")]
    EditEvents,

    /// `edit event`
    #[strum(to_string = "edit event")]
    EditEvent,

    /// `print events on`
    #[strum(to_string = "print events on")]
    PrintEventsOn,

    /// `print events from`
    #[strum(to_string = "print events from")]
    PrintEventsFrom,

    /// `export cal`
    #[strum(to_string = "export cal")]
    ExportCal,

    /// `export googlecsv`
    #[strum(to_string = "export googlecsv")]
    ExportGoogleCsv,

    /// `show status on`
    #[strum(to_string = "show status on")]
    ShowStatusOn,
}

// Order matters: a verb must come before any verb that is a prefix of it.
const VERBS: &[(Verb, &[Token])] = &[
    (Verb::CreateEvent, &[Token::Create, Token::Event]),
    (Verb::EditEvents, &[Token::Edit, Token::Events]),
    (Verb::EditEvent, &[Token::Edit, Token::Event]),
    (Verb::PrintEventsOn, &[Token::Print, Token::Events, Token::On]),
    (Verb::PrintEventsFrom, &[Token::Print, Token::Events, Token::From]),
    (Verb::ExportCal, &[Token::Export, Token::Cal]),
    (Verb::ExportGoogleCsv, &[Token::Export, Token::GoogleCsv]),
    (Verb::ShowStatusOn, &[Token::Show, Token::Status, Token::On]),
];

/// Match the leading tokens against the verb table.
///
/// Returns the verb and the number of tokens it spans.
#[must_use]
pub fn match_verb(tokens: &[Token]) -> Option<(Verb, usize)> {
    VERBS
        .iter()
        .find(|(_, pattern)| tokens.starts_with(pattern))
        .map(|(verb, pattern)| (*verb, pattern.len()))
}
