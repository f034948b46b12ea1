#![warn(clippy::uninlined_format_args)]

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_till1, take_until, take_while1},
    character::complete::{char, digit1, multispace1, none_of},
    combinator::{eof, opt, recognize},
    multi::{many0, separated_list1},
    sequence::delimited,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Balances,
    Settle,
    Breakdown,
    Summary,
    Expenses,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share<'a> {
    pub participant: &'a str,
    /// Decimal literal without currency marks.
    pub amount: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Split<'a> {
    Even(Vec<&'a str>),
    Manual(Vec<Share<'a>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseEntry<'a> {
    pub payer: &'a str,
    /// Decimal literal without currency marks.
    pub amount: &'a str,
    pub name: &'a str,
    pub split: Split<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Participants(Vec<&'a str>),
    Expense(ExpenseEntry<'a>),
    RemoveParticipant(&'a str),
    /// Names the expense, not its id.
    RemoveExpense(&'a str),
    Command(Command),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementWithLine<'a> {
    pub line: usize,
    pub statement: Statement<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program<'a> {
    pub statements: Vec<StatementWithLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

fn block_comment(input: &str) -> IResult<&str, &str> {
    recognize(delimited(tag("/*"), take_until("*/"), tag("*/"))).parse(input)
}

fn line_comment(input: &str) -> IResult<&str, &str> {
    recognize((tag("//"), take_till(|c| c == '\n'))).parse(input)
}

fn sp(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((multispace1, block_comment, line_comment)))).parse(input)
}

// Text up to the next newline outside a block comment.
fn source_line(input: &str) -> IResult<&str, &str> {
    fn quoted_text(input: &str) -> IResult<&str, &str> {
        recognize((char('"'), take_till(|c| c == '"' || c == '\n'), char('"'))).parse(input)
    }

    recognize(many0(alt((
        block_comment,
        line_comment,
        quoted_text,
        take_till1(|c| matches!(c, '\n' | '/' | '"')),
        recognize(none_of("\n")),
    ))))
    .parse(input)
}

// Letters cover Vietnamese diacritics through `char::is_alphanumeric`.
fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '\''))(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"')).parse(input)
}

fn name(input: &str) -> IResult<&str, &str> {
    alt((quoted, identifier)).parse(input)
}

fn name_list(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1((sp, char(','), sp), name).parse(input)
}

fn currency_suffix(input: &str) -> IResult<&str, &str> {
    alt((
        tag("₫"),
        tag("đ"),
        tag_no_case("vnd"),
        tag_no_case("usd"),
    ))
    .parse(input)
}

fn amount(input: &str) -> IResult<&str, &str> {
    (
        opt(char('$')),
        recognize((digit1, opt((char('.'), digit1)))),
        opt((sp, currency_suffix)),
    )
        .map(|(_, digits, _)| digits)
        .parse(input)
}

fn paid(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("paid"), tag_no_case("đã trả"), tag_no_case("trả"))).parse(input)
}

fn for_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("for"), tag_no_case("cho"))).parse(input)
}

fn split_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("split"), tag_no_case("chia"))).parse(input)
}

fn participants_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("participants"), tag_no_case("thành viên"))).parse(input)
}

fn remove_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("remove"), tag_no_case("xóa"), tag_no_case("xoá"))).parse(input)
}

fn expense_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("expense"), tag_no_case("khoản chi"))).parse(input)
}

fn share(input: &str) -> IResult<&str, Share<'_>> {
    (name, sp, char(':'), sp, amount)
        .map(|(participant, _, _, _, amount)| Share {
            participant,
            amount,
        })
        .parse(input)
}

// { Alice: 20, Bob: 80 }
fn manual_split(input: &str) -> IResult<&str, Vec<Share<'_>>> {
    (
        char('{'),
        sp,
        separated_list1((sp, char(','), sp), share),
        sp,
        opt(char(',')),
        sp,
        char('}'),
    )
        .map(|(_, _, shares, _, _, _, _)| shares)
        .parse(input)
}

fn split(input: &str) -> IResult<&str, Split<'_>> {
    alt((manual_split.map(Split::Manual), name_list.map(Split::Even))).parse(input)
}

// {payer} paid {amount} for {name} split {participants | shares}
fn expense(input: &str) -> IResult<&str, ExpenseEntry<'_>> {
    (
        name, // payer
        sp, paid, sp, amount, // amount
        sp, for_keyword, sp, name, // expense name
        sp, split_keyword, sp, split,
    )
        .map(
            |(payer, _, _, _, amount, _, _, _, name, _, _, _, split)| ExpenseEntry {
                payer,
                amount,
                name,
                split,
            },
        )
        .parse(input)
}

fn participants(input: &str) -> IResult<&str, Vec<&str>> {
    (participants_keyword, sp, name_list)
        .map(|(_, _, names)| names)
        .parse(input)
}

// remove expense {name}
fn remove_expense(input: &str) -> IResult<&str, &str> {
    (
        remove_keyword,
        multispace1,
        expense_keyword,
        multispace1,
        sp,
        name,
        sp,
        eof,
    )
        .map(|(_, _, _, _, _, name, _, _)| name)
        .parse(input)
}

// remove {participant}
fn remove_participant(input: &str) -> IResult<&str, &str> {
    (remove_keyword, multispace1, sp, name, sp, eof)
        .map(|(_, _, _, name, _, _)| name)
        .parse(input)
}

fn command(input: &str) -> IResult<&str, Command> {
    alt((
        tag_no_case("!balances").map(|_| Command::Balances),
        tag_no_case("!settle").map(|_| Command::Settle),
        tag_no_case("!breakdown").map(|_| Command::Breakdown),
        tag_no_case("!summary").map(|_| Command::Summary),
        tag_no_case("!expenses").map(|_| Command::Expenses),
    ))
    .parse(input)
}

fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((
        command.map(Statement::Command),
        participants.map(Statement::Participants),
        remove_expense.map(Statement::RemoveExpense),
        remove_participant.map(Statement::RemoveParticipant),
        expense.map(Statement::Expense),
    ))
    .parse(input)
}

fn statement_with_sp(input: &str) -> IResult<&str, Statement<'_>> {
    (sp, statement, sp).map(|(_, stmt, _)| stmt).parse(input)
}

/// Parses a session script, one statement per line. A `/* */` comment may
/// span lines; the statement after it is numbered by the line it starts on.
pub fn parse_program(input: &str) -> Result<Program<'_>, ParseError> {
    let mut statements = Vec::new();
    let mut row = 1;
    let mut rest = input;

    while !rest.is_empty() {
        let (after, source) = source_line(rest).map_err(|e| ParseError::SyntaxError {
            line: row,
            detail: i18n::syntax_error_detail(e),
        })?;
        if let Some(stmt) = parse_line(source, row)? {
            statements.push(stmt);
        }

        row += source.matches('\n').count();
        rest = match after.strip_prefix('\n') {
            Some(next) => {
                row += 1;
                next
            }
            None => after,
        };
    }

    Ok(Program { statements })
}

fn parse_line(source: &str, first_row: usize) -> Result<Option<StatementWithLine<'_>>, ParseError> {
    let (rest, skipped) = sp(source).map_err(|e| ParseError::SyntaxError {
        line: first_row,
        detail: i18n::syntax_error_detail(e),
    })?;
    if rest.trim().is_empty() {
        return Ok(None);
    }

    let line = first_row + skipped.matches('\n').count();
    match statement_with_sp(rest) {
        Ok((rest, statement)) => {
            if !rest.trim().is_empty() {
                return Err(ParseError::SyntaxError {
                    line,
                    detail: i18n::syntax_error_unparsed_detail(rest.trim()),
                });
            }
            Ok(Some(StatementWithLine { line, statement }))
        }
        Err(e) => Err(ParseError::SyntaxError {
            line,
            detail: i18n::syntax_error_detail(e),
        }),
    }
}
