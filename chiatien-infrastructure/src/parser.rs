use chiatien_application::{
    Command, ExpenseDraft, Script, ScriptParseError, ScriptParser, ScriptStatement,
    ScriptStatementWithLine,
};
use chiatien_domain::Money;
use chiatien_parser::{
    Command as ParserCommand, ExpenseEntry, ParseError, Split, Statement as ParserStatement,
    parse_program,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct ChiatienScriptParser;

impl ScriptParser for ChiatienScriptParser {
    fn parse(&self, content: &str) -> Result<Script, ScriptParseError> {
        let program = parse_program(content).map_err(|err| match err {
            ParseError::SyntaxError { line, detail } => {
                ScriptParseError::SyntaxError { line, detail }
            }
        })?;

        let mut statements = Vec::with_capacity(program.statements.len());
        for stmt in program.statements {
            let chiatien_parser::StatementWithLine { line, statement } = stmt;
            let statement = match statement {
                ParserStatement::Participants(names) => ScriptStatement::AddParticipants(
                    names.into_iter().map(str::to_owned).collect(),
                ),
                ParserStatement::Expense(entry) => {
                    ScriptStatement::AddExpense(to_expense_draft(entry, line)?)
                }
                ParserStatement::RemoveParticipant(name) => {
                    ScriptStatement::RemoveParticipant(name.to_owned())
                }
                ParserStatement::RemoveExpense(name) => {
                    ScriptStatement::RemoveExpense(name.to_owned())
                }
                ParserStatement::Command(command) => ScriptStatement::Command(match command {
                    ParserCommand::Balances => Command::Balances,
                    ParserCommand::Settle => Command::Settle,
                    ParserCommand::Breakdown => Command::Breakdown,
                    ParserCommand::Summary => Command::Summary,
                    ParserCommand::Expenses => Command::Expenses,
                }),
            };
            statements.push(ScriptStatementWithLine { line, statement });
        }

        Ok(Script::new(statements))
    }
}

fn to_expense_draft(entry: ExpenseEntry<'_>, line: usize) -> Result<ExpenseDraft, ScriptParseError> {
    let amount = parse_money(entry.amount, line)?;
    match entry.split {
        Split::Even(involved) => Ok(ExpenseDraft::even(entry.name, amount, entry.payer, involved)),
        Split::Manual(shares) => {
            let shares = shares
                .into_iter()
                .map(|share| Ok((share.participant, parse_money(share.amount, line)?)))
                .collect::<Result<Vec<_>, ScriptParseError>>()?;
            Ok(ExpenseDraft::manual(entry.name, amount, entry.payer, shares))
        }
    }
}

fn parse_money(literal: &str, line: usize) -> Result<Money, ScriptParseError> {
    literal
        .parse::<Money>()
        .map_err(|_| ScriptParseError::InvalidAmount {
            line,
            amount: literal.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chiatien_domain::{ParticipantId, SplitRule};
    use rstest::rstest;

    fn parse(content: &str) -> Result<Script, ScriptParseError> {
        ChiatienScriptParser.parse(content)
    }

    #[rstest]
    fn converts_every_statement_kind() {
        let script = parse(
            "participants Alice, Bob\n\
             Alice paid 12.50 for lunch split Alice, Bob\n\
             Bob paid 30 for taxi split { Alice: 10, Bob: 20 }\n\
             !settle",
        )
        .expect("script parses");

        let statements = script.statements();
        assert_eq!(statements.len(), 4);
        assert_eq!(
            statements[0].statement,
            ScriptStatement::AddParticipants(vec!["Alice".to_string(), "Bob".to_string()])
        );

        let ScriptStatement::AddExpense(lunch) = &statements[1].statement else {
            panic!("expected an expense");
        };
        assert_eq!(lunch.amount, Money::new(1250, 2));
        assert_eq!(lunch.split, SplitRule::Even);

        let ScriptStatement::AddExpense(taxi) = &statements[2].statement else {
            panic!("expected an expense");
        };
        assert_eq!(taxi.payer, ParticipantId::from("Bob"));
        assert_eq!(
            taxi.involved,
            vec![ParticipantId::from("Alice"), ParticipantId::from("Bob")]
        );
        let contributions = match &taxi.split {
            SplitRule::Manual(contributions) => contributions,
            SplitRule::Even => panic!("expected a manual split"),
        };
        assert_eq!(contributions.get("Alice").copied(), Some(Money::from_i64(10)));

        assert_eq!(statements[3].line, 4);
        assert_eq!(statements[3].statement, ScriptStatement::Command(Command::Settle));
    }

    #[rstest]
    #[case::expense_amount(
        "A paid 99999999999999999999999999999 for x split A",
        "99999999999999999999999999999"
    )]
    #[case::share_amount(
        "A paid 1 for x split { A: 99999999999999999999999999999 }",
        "99999999999999999999999999999"
    )]
    fn rejects_amounts_out_of_range(#[case] content: &str, #[case] expected: &str) {
        assert_eq!(
            parse(content),
            Err(ScriptParseError::InvalidAmount {
                line: 1,
                amount: expected.to_string(),
            })
        );
    }

    #[rstest]
    fn converts_removals() {
        let script = parse("remove Bob\nremove expense \"bữa tối\"").expect("script parses");

        let statements: Vec<_> = script
            .statements()
            .iter()
            .map(|stmt| (stmt.line, stmt.statement.clone()))
            .collect();
        assert_eq!(
            statements,
            vec![
                (1, ScriptStatement::RemoveParticipant("Bob".to_string())),
                (2, ScriptStatement::RemoveExpense("bữa tối".to_string())),
            ]
        );
    }

    #[rstest]
    fn keeps_amounts_at_the_decimal_limit() {
        let script = parse("A paid 79228162514264337593543950335 for x split B")
            .expect("script parses");

        let ScriptStatement::AddExpense(draft) = &script.statements()[0].statement else {
            panic!("expected an expense");
        };
        assert_eq!(draft.amount.to_string(), "79228162514264337593543950335");
    }

    #[rstest]
    fn syntax_errors_keep_line() {
        let err = parse("participants A\nA paid for x split A").expect_err("must fail");
        assert!(matches!(err, ScriptParseError::SyntaxError { line: 2, .. }));
    }
}
