use chiatien_domain::{
    Contributions, DebtSummary, ExpenseSettlement, Money, ParticipantId, SplitRule, Transfer,
};

/// Unvalidated expense as entered by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub name: String,
    pub amount: Money,
    pub payer: ParticipantId,
    pub involved: Vec<ParticipantId>,
    pub split: SplitRule,
}

impl ExpenseDraft {
    pub fn even<I>(name: impl Into<String>, amount: Money, payer: &str, involved: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            name: name.into(),
            amount,
            payer: ParticipantId::from(payer),
            involved: involved
                .into_iter()
                .map(|name| ParticipantId::from(name.as_ref()))
                .collect(),
            split: SplitRule::Even,
        }
    }

    /// Manual split where the contributors are exactly the involved participants.
    pub fn manual<I, S>(name: impl Into<String>, amount: Money, payer: &str, shares: I) -> Self
    where
        I: IntoIterator<Item = (S, Money)>,
        S: AsRef<str>,
    {
        let contributions: Contributions = shares
            .into_iter()
            .map(|(name, share)| (ParticipantId::from(name.as_ref()), share))
            .collect();
        Self {
            name: name.into(),
            amount,
            payer: ParticipantId::from(payer),
            involved: contributions.keys().cloned().collect(),
            split: SplitRule::Manual(contributions),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Balances,
    Settle,
    Breakdown,
    Summary,
    Expenses,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStatement {
    AddParticipants(Vec<String>),
    AddExpense(ExpenseDraft),
    RemoveParticipant(String),
    /// Removes the latest expense with this name.
    RemoveExpense(String),
    Command(Command),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStatementWithLine {
    pub line: usize,
    pub statement: ScriptStatement,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    statements: Vec<ScriptStatementWithLine>,
}

impl Script {
    pub fn new(statements: Vec<ScriptStatementWithLine>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[ScriptStatementWithLine] {
        &self.statements
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonBalance {
    pub id: ParticipantId,
    pub balance: Money,
}

/// Everything derived from a session, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReport {
    /// In participant registration order.
    pub balances: Vec<PersonBalance>,
    pub transfers: Vec<Transfer>,
    pub breakdown: Vec<ExpenseSettlement>,
    pub summary: DebtSummary,
}
