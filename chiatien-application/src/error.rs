use chiatien_domain::{BalanceError, ExpenseId, Money, ParticipantId, SettlementError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("expense name is empty")]
    EmptyName,
    #[error("expense amount must be positive (found {0})")]
    NonPositiveAmount(Money),
    #[error("payer '{0}' is not a participant")]
    UnknownPayer(ParticipantId),
    #[error("expense involves no participants")]
    NoInvolvedParticipants,
    #[error("'{0}' is not a participant")]
    UnknownParticipant(ParticipantId),
    #[error("'{0}' is listed more than once")]
    DuplicateParticipant(ParticipantId),
    #[error("contribution of '{participant}' is negative ({amount})")]
    NegativeContribution {
        participant: ParticipantId,
        amount: Money,
    },
    #[error("manual contributions total {contributed}, expected {amount}")]
    ContributionMismatch { amount: Money, contributed: Money },
    #[error("manual contributions exceed the representable range")]
    AmountOverflow,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("participant name is empty")]
    EmptyParticipantName,
    #[error("participant '{0}' already exists")]
    DuplicateParticipant(ParticipantId),
    #[error("participant '{0}' does not exist")]
    UnknownParticipant(String),
    #[error("participant '{0}' is referenced by an expense")]
    ParticipantInUse(ParticipantId),
    #[error("expense {0} does not exist")]
    UnknownExpense(ExpenseId),
    #[error("no expense named '{0}'")]
    UnknownExpenseName(String),
    #[error(transparent)]
    InvalidExpense(#[from] ExpenseValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Balance(BalanceError),
    #[error("sum of balances must be zero (found {0})")]
    ImbalancedTotal(Money),
    #[error("settlement amounts exceed the representable range")]
    AmountOverflow,
}

impl From<BalanceError> for ReportError {
    fn from(err: BalanceError) -> Self {
        ReportError::Balance(err)
    }
}

impl From<SettlementError> for ReportError {
    fn from(err: SettlementError) -> Self {
        match err {
            SettlementError::Balance(err) => ReportError::Balance(err),
            SettlementError::ImbalancedTotal(total) => ReportError::ImbalancedTotal(total),
            SettlementError::AmountOverflow => ReportError::AmountOverflow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptParseError {
    #[error("syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
    #[error("invalid amount '{amount}' at line {line}")]
    InvalidAmount { line: usize, amount: String },
}

impl ScriptParseError {
    pub fn line(&self) -> usize {
        match self {
            ScriptParseError::SyntaxError { line, .. } => *line,
            ScriptParseError::InvalidAmount { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error(transparent)]
    Parse(#[from] ScriptParseError),
    #[error("line {line}: {source}")]
    Session { line: usize, source: SessionError },
    #[error(transparent)]
    Report(#[from] ReportError),
}
