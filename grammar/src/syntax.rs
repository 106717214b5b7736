// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parser for the clause structure of each verb, built on top of the lexer, no type.
//!
//! The syntax tree only records where each clause sits in the token stream.
//! Turning literals into dates, weekdays and counts is left to typed analysis.

use std::borrow::Cow;

use chumsky::error::RichPattern;
use chumsky::input::ValueInput;
use chumsky::prelude::*;

use crate::lexer::Token;
use crate::verb::Verb;

/// Span of a clause, in token indices of the command body.
pub type TokenSpan = SimpleSpan;

/// Clauses named in syntax error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Clause {
    EventName,
    Property,
    Literal,
    Weekdays,
    Value,
}

impl From<Clause> for RichPattern<'_, Token> {
    fn from(clause: Clause) -> Self {
        let label = match clause {
            Clause::EventName => "event name",
            Clause::Property => "property name",
            Clause::Literal => "date or date-time",
            Clause::Weekdays => "weekday letters",
            Clause::Value => "new value",
        };
        Self::Label(Cow::Borrowed(label))
    }
}

type Extra<'tokens> = extra::Err<Rich<'tokens, Token>>;

/// A command body with its clauses located but not yet interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxCommand {
    /// `<name> from <start> to <end> [repeats <rule>]`
    CreateTimed {
        name: TokenSpan,
        start: TokenSpan,
        end: TokenSpan,
        repeats: Option<SyntaxRecurrence>,
    },

    /// `<name> on <date> [repeats <rule>]`
    CreateAllDay {
        name: TokenSpan,
        date: TokenSpan,
        repeats: Option<SyntaxRecurrence>,
    },

    /// `<property> <name> from <start> to <end> with <value>`
    EditSingle {
        property: TokenSpan,
        name: TokenSpan,
        start: TokenSpan,
        end: TokenSpan,
        value: TokenSpan,
    },

    /// `<property> <name> [from <start>] with <value>`
    EditMany {
        property: TokenSpan,
        name: TokenSpan,
        start: Option<TokenSpan>,
        value: TokenSpan,
    },

    /// `<date>`
    PrintOn { date: TokenSpan },

    /// `<start> to <end>`
    PrintRange { start: TokenSpan, end: TokenSpan },

    /// `<path>`
    ExportCsv { path: TokenSpan },

    /// `<path>`
    ExportGoogleCsv { path: TokenSpan },

    /// `<datetime>`
    ShowStatus { at: TokenSpan },
}

/// The `repeats` clause of a create command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxRecurrence {
    /// Weekday letters
    pub weekdays: TokenSpan,
    /// How the recurrence stops
    pub end: SyntaxRecurrenceEnd,
}

/// Termination of a `repeats` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxRecurrenceEnd {
    /// `for <n> times`
    Count(TokenSpan),
    /// `until <date-or-datetime>`
    Until(TokenSpan),
}

/// Parse the body of a command, i.e. the tokens following its verb.
///
/// ## Errors
/// If the body does not fit the clause grammar of the verb, the parser errors
/// are returned.
pub fn syntax_analysis(verb: Verb, body: &[Token]) -> Result<SyntaxCommand, Vec<Rich<'_, Token>>> {
    match verb {
        Verb::CreateEvent => create().parse(body).into_result(),
        Verb::EditEvent => edit_single().parse(body).into_result(),
        Verb::EditEvents => edit_many().parse(body).into_result(),
        Verb::PrintEventsOn => print_on().parse(body).into_result(),
        Verb::PrintEventsFrom => print_range().parse(body).into_result(),
        Verb::ExportCal => path()
            .map(|path| SyntaxCommand::ExportCsv { path })
            .parse(body)
            .into_result(),
        Verb::ExportGoogleCsv => path()
            .map(|path| SyntaxCommand::ExportGoogleCsv { path })
            .parse(body)
            .into_result(),
        Verb::ShowStatusOn => show_status().parse(body).into_result(),
    }
}

fn create<'tokens, I>() -> impl Parser<'tokens, I, SyntaxCommand, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    // A name runs up to the first `from`; only without one is it an all-day event
    let timed = text_until(&[Token::From])
        .labelled(Clause::EventName)
        .then_ignore(just(Token::From))
        .then(literal())
        .then_ignore(just(Token::To))
        .then(literal())
        .then(repeats().or_not())
        .map(|(((name, start), end), repeats)| SyntaxCommand::CreateTimed {
            name,
            start,
            end,
            repeats,
        });

    let all_day = text_until(&[Token::On])
        .labelled(Clause::EventName)
        .then_ignore(just(Token::On))
        .then(literal())
        .then(repeats().or_not())
        .map(|((name, date), repeats)| SyntaxCommand::CreateAllDay {
            name,
            date,
            repeats,
        });

    choice((timed, all_day)).then_ignore(end())
}

fn repeats<'tokens, I>() -> impl Parser<'tokens, I, SyntaxRecurrence, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    let count = just(Token::For)
        .ignore_then(literal())
        .then_ignore(just(Token::Times))
        .map(SyntaxRecurrenceEnd::Count);

    let until = just(Token::Until)
        .ignore_then(literal())
        .map(SyntaxRecurrenceEnd::Until);

    just(Token::Repeats)
        .ignore_then(any().map_with(|_, e| e.span()).labelled(Clause::Weekdays))
        .then(choice((count, until)))
        .map(|(weekdays, end)| SyntaxRecurrence { weekdays, end })
}

fn edit_single<'tokens, I>() -> impl Parser<'tokens, I, SyntaxCommand, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    property()
        .then(text_until(&[Token::From, Token::With]).labelled(Clause::EventName))
        .then_ignore(just(Token::From))
        .then(literal())
        .then_ignore(just(Token::To))
        .then(literal())
        .then_ignore(just(Token::With))
        .then(rest())
        .then_ignore(end())
        .map(
            |((((property, name), start), end), value)| SyntaxCommand::EditSingle {
                property,
                name,
                start,
                end,
                value,
            },
        )
}

fn edit_many<'tokens, I>() -> impl Parser<'tokens, I, SyntaxCommand, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    property()
        .then(text_until(&[Token::From, Token::With]).labelled(Clause::EventName))
        .then(just(Token::From).ignore_then(literal()).or_not())
        .then_ignore(just(Token::With))
        .then(rest())
        .then_ignore(end())
        .map(|(((property, name), start), value)| SyntaxCommand::EditMany {
            property,
            name,
            start,
            value,
        })
}

fn print_on<'tokens, I>() -> impl Parser<'tokens, I, SyntaxCommand, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    literal()
        .then_ignore(end())
        .map(|date| SyntaxCommand::PrintOn { date })
}

fn print_range<'tokens, I>() -> impl Parser<'tokens, I, SyntaxCommand, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    literal()
        .then_ignore(just(Token::To))
        .then(literal())
        .then_ignore(end())
        .map(|(start, end)| SyntaxCommand::PrintRange { start, end })
}

fn show_status<'tokens, I>() -> impl Parser<'tokens, I, SyntaxCommand, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    literal()
        .then_ignore(end())
        .map(|at| SyntaxCommand::ShowStatus { at })
}

/// The destination is the first token after the verb, anything after it is ignored.
fn path<'tokens, I>() -> impl Parser<'tokens, I, TokenSpan, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    any()
        .map_with(|_, e| e.span())
        .then_ignore(any().repeated())
        .then_ignore(end())
}

fn property<'tokens, I>() -> impl Parser<'tokens, I, TokenSpan, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    any().map_with(|_, e| e.span()).labelled(Clause::Property)
}

/// A single token holding a date, date-time or count.
fn literal<'tokens, I>() -> impl Parser<'tokens, I, TokenSpan, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    any().map_with(|_, e| e.span()).labelled(Clause::Literal)
}

/// One or more tokens up to (excluding) any of `stops`.
fn text_until<'tokens, I>(
    stops: &'static [Token],
) -> impl Parser<'tokens, I, TokenSpan, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    any()
        .filter(move |token: &Token| !stops.contains(token))
        .repeated()
        .at_least(1)
        .map_with(|(), e| e.span())
}

/// Everything up to the end of the line.
fn rest<'tokens, I>() -> impl Parser<'tokens, I, TokenSpan, Extra<'tokens>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    any()
        .repeated()
        .at_least(1)
        .map_with(|(), e| e.span())
        .labelled(Clause::Value)
}
