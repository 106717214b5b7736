// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use crate::command::Command;
use crate::lexer::{Token, lex_analysis};
use crate::syntax::syntax_analysis;
use crate::typed::{SourceMap, typed_analysis};
use crate::verb::{Verb, match_verb};

/// Parse one command line into a typed command.
///
/// ## Errors
///
/// Fails if the line does not start with a known verb, if the clauses after the
/// verb do not match its grammar, or if a literal cannot be interpreted.
///
/// ## Examples
///
/// ```
/// # use calcmd_grammar::{Command, parse};
/// let cmd = parse("create event Team  Sync from 2025-03-01T10:00 to 2025-03-01T11:00").unwrap();
/// let Command::CreateTimed { name, recurrence, .. } = cmd else {
///     panic!("expected a timed event");
/// };
/// assert_eq!(name, "Team  Sync");
/// assert!(recurrence.is_none());
/// ```
///
/// An unknown verb is reported with the whole line
///
/// ```
/// # use calcmd_grammar::parse;
/// let err = parse("delete event Meeting").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid command: delete event Meeting");
/// ```
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let tokens = lex_analysis(line)?;
    let kinds: Vec<Token> = tokens.iter().map(|(token, _)| *token).collect();
    let Some((verb, verb_len)) = match_verb(&kinds) else {
        return Err(ParseError::UnrecognizedCommand {
            line: line.to_owned(),
        });
    };

    // `--autodecline` may appear anywhere in a create command. It is cut out of
    // the line together with one separating blank, and later spans are shifted.
    let mut src = Cow::Borrowed(line);
    let mut removed = 0;
    let mut auto_decline = false;
    let mut body = Vec::with_capacity(tokens.len() - verb_len);
    let mut spans = Vec::with_capacity(tokens.len() - verb_len);
    for (token, span) in tokens.into_iter().skip(verb_len) {
        let span = (span.start - removed)..(span.end - removed);
        if verb == Verb::CreateEvent && token == Token::AutoDecline {
            auto_decline = true;
            let after_blank = src
                .get(..span.start)
                .is_some_and(|head| head.ends_with(char::is_whitespace));
            let cut = if after_blank { span.start - 1 } else { span.start }..span.end;
            removed += cut.len();
            src.to_mut().replace_range(cut, "");
        } else {
            body.push(token);
            spans.push(span);
        }
    }

    let syntax = syntax_analysis(verb, &body).map_err(|errs| ParseError::Syntax {
        verb,
        message: errs
            .first()
            .map_or_else(|| "unexpected input".to_owned(), |e| e.reason().to_string()),
    })?;

    tracing::trace!(%verb, ?syntax, "syntax analysis done");
    let map = SourceMap::new(&src, &spans);
    typed_analysis(syntax, auto_decline, &map)
}

/// Errors that can occur while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer could not match the input at a byte offset.
    #[error("Unexpected input at position {position}")]
    Lex {
        /// Byte offset in the line
        position: usize,
    },

    /// The line does not start with any known verb.
    #[error("Invalid command: {line}")]
    UnrecognizedCommand {
        /// The offending line
        line: String,
    },

    /// The clauses after a verb do not match its grammar.
    #[error("Invalid {verb} command: {message}")]
    Syntax {
        /// Verb of the command
        verb: Verb,
        /// What was expected and what was found
        message: String,
    },

    /// A literal is not a `YYYY-MM-DD` date.
    #[error("Invalid date: {literal}")]
    InvalidDate {
        /// The literal as written
        literal: String,
    },

    /// A literal is not a `YYYY-MM-DDTHH:MM` date-time.
    #[error("Invalid date-time: {literal}")]
    InvalidDateTime {
        /// The literal as written
        literal: String,
    },

    /// A weekday letter outside `MTWRFSU`.
    #[error("Invalid weekday character: {character}")]
    InvalidWeekday {
        /// The offending letter
        character: char,
    },

    /// An occurrence count that is not a positive integer.
    #[error("Invalid occurrence count: {literal}")]
    InvalidCount {
        /// The literal as written
        literal: String,
    },
}
