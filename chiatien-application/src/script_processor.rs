use crate::{
    error::{ScriptError, SessionError},
    model::{Command, Script, ScriptStatement, ScriptStatementWithLine, SettlementReport},
    ports::{ExpenseIdGenerator, ScriptParser},
    report::ReportBuilder,
    session::Session,
};

/// State of the session right after a command, or at the end of a script
/// without commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutput {
    /// `None` for the implicit full report of a command-less script.
    pub command: Option<Command>,
    pub line: usize,
    pub session: Session,
    pub report: SettlementReport,
}

#[derive(Clone, Copy)]
pub struct ScriptProcessor<'a> {
    parser: &'a dyn ScriptParser,
    id_generator: &'a dyn ExpenseIdGenerator,
}

impl<'a> ScriptProcessor<'a> {
    pub fn new(parser: &'a dyn ScriptParser, id_generator: &'a dyn ExpenseIdGenerator) -> Self {
        Self {
            parser,
            id_generator,
        }
    }

    pub fn parse_script(&self, content: &str) -> Result<Script, ScriptError> {
        self.parser.parse(content).map_err(|err| {
            tracing::warn!(line = err.line(), error = %err, "Script rejected");
            ScriptError::from(err)
        })
    }

    /// Parses and runs a script, producing one output per command.
    pub fn run(&self, content: &str) -> Result<Vec<ScriptOutput>, ScriptError> {
        let script = self.parse_script(content)?;
        let statements = script.statements();

        let mut session = Session::new();
        let mut outputs = Vec::new();
        for stmt in statements {
            if let ScriptStatement::Command(command) = stmt.statement {
                outputs.push(ScriptOutput {
                    command: Some(command),
                    line: stmt.line,
                    report: ReportBuilder.build(&session)?,
                    session: session.clone(),
                });
                continue;
            }
            self.apply(&mut session, stmt)?;
        }

        if outputs.is_empty() {
            outputs.push(ScriptOutput {
                command: None,
                line: statements.last().map_or(0, |stmt| stmt.line),
                report: ReportBuilder.build(&session)?,
                session,
            });
        }

        Ok(outputs)
    }

    fn apply(&self, session: &mut Session, stmt: &ScriptStatementWithLine) -> Result<(), ScriptError> {
        let result = match &stmt.statement {
            ScriptStatement::AddParticipants(names) => names
                .iter()
                .try_for_each(|name| session.add_participant(name).map(drop)),
            ScriptStatement::AddExpense(draft) => session
                .add_expense(draft.clone(), self.id_generator)
                .map(drop),
            ScriptStatement::RemoveParticipant(name) => {
                session.remove_participant(name).map(drop)
            }
            ScriptStatement::RemoveExpense(name) => session.remove_expense_named(name).map(drop),
            ScriptStatement::Command(_) => Ok(()),
        };
        result.map_err(|source| at_line(stmt.line, source))
    }
}

fn at_line(line: usize, source: SessionError) -> ScriptError {
    ScriptError::Session { line, source }
}
