// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tokenizer for command lines.
//!
//! A command line is split on whitespace. Keywords of the grammar are matched
//! case-insensitively, everything else becomes a [`Token::Word`]. Tokens carry
//! no text: each token comes with its byte span, so free-text clauses can be
//! sliced back out of the original line verbatim.

use std::ops::Range;

use logos::Logos;

use crate::parser::ParseError;

/// Byte range of a token in the command line.
pub type Span = Range<usize>;

/// A token with its byte span.
pub type SpannedToken = (Token, Span);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos, strum::Display)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Verbs and their objects
    //
    /// `create`
    #[token("create", ignore(case))]
    #[strum(to_string = "'create'")]
    Create,

    /// `edit`
    #[token("edit", ignore(case))]
    #[strum(to_string = "'edit'")]
    Edit,

    /// `print`
    #[token("print", ignore(case))]
    #[strum(to_string = "'print'")]
    Print,

    /// `export`
    #[token("export", ignore(case))]
    #[strum(to_string = "'export'")]
    Export,

    /// `show`
    #[token("show", ignore(case))]
    #[strum(to_string = "'show'")]
    Show,

    /// `event`
    #[token("event", ignore(case))]
    #[strum(to_string = "'event'")]
    Event,

    /// `events`
    #[token("events", ignore(case))]
    #[strum(to_string = "'events'")]
    Events,

    /// `status`
    #[token("status", ignore(case))]
    #[strum(to_string = "'status'")]
    Status,

    /// `cal`
    #[token("cal", ignore(case))]
    #[strum(to_string = "'cal'")]
    Cal,

    /// `googlecsv`
    #[token("googlecsv", ignore(case))]
    #[strum(to_string = "'googlecsv'")]
    GoogleCsv,

    // Clause keywords
    //
    /// `on`
    #[token("on", ignore(case))]
    #[strum(to_string = "'on'")]
    On,

    /// `from`
    #[token("from", ignore(case))]
    #[strum(to_string = "'from'")]
    From,

    /// `to`
    #[token("to", ignore(case))]
    #[strum(to_string = "'to'")]
    To,

    /// `with`
    #[token("with", ignore(case))]
    #[strum(to_string = "'with'")]
    With,

    /// `repeats`
    #[token("repeats", ignore(case))]
    #[strum(to_string = "'repeats'")]
    Repeats,

    /// `for`
    #[token("for", ignore(case))]
    #[strum(to_string = "'for'")]
    For,

    /// `times`
    #[token("times", ignore(case))]
    #[strum(to_string = "'times'")]
    Times,

    /// `until`
    #[token("until", ignore(case))]
    #[strum(to_string = "'until'")]
    Until,

    /// `--autodecline`
    #[token("--autodecline", ignore(case))]
    #[strum(to_string = "'--autodecline'")]
    AutoDecline,

    /// Any other whitespace-delimited run: names, literals, values, paths
    #[regex(r"[^ \t\r\n\f]+")]
    #[strum(to_string = "word")]
    Word,
}

/// Split a command line into spanned tokens.
///
/// ## Errors
/// Returns [`ParseError::Lex`] with the byte offset of the first input the lexer
/// cannot match.
pub fn lex_analysis(src: &str) -> Result<Vec<SpannedToken>, ParseError> {
    Token::lexer(src)
        .spanned()
        .map(|(token, span)| match token {
            Ok(token) => Ok((token, span)),
            Err(()) => Err(ParseError::Lex {
                position: span.start,
            }),
        })
        .collect()
}
