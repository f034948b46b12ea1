use crate::{
    error::{ExpenseValidationError, SessionError},
    model::ExpenseDraft,
    ports::ExpenseIdGenerator,
};
use chiatien_domain::{Expense, ExpenseId, Money, ParticipantId, Roster, SplitRule};
use fxhash::FxHashSet;

/// In-memory participants and expenses of one splitting session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    roster: Roster,
    expenses: Vec<Expense>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn participants(&self) -> &Roster {
        &self.roster
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id() == id)
    }

    pub fn add_participant(&mut self, name: &str) -> Result<ParticipantId, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyParticipantName);
        }

        let participant = ParticipantId::from(name);
        if !self.roster.insert(participant.clone()) {
            tracing::warn!(participant = %participant, "Participant already exists");
            return Err(SessionError::DuplicateParticipant(participant));
        }

        tracing::info!(participant = %participant, "Participant added");
        Ok(participant)
    }

    /// Removes a participant that no expense refers to.
    pub fn remove_participant(&mut self, name: &str) -> Result<ParticipantId, SessionError> {
        let Some(participant) = self.roster.get(name).cloned() else {
            return Err(SessionError::UnknownParticipant(name.to_owned()));
        };
        if self.is_participant_in_use(name) {
            tracing::warn!(participant = %participant, "Participant is still referenced");
            return Err(SessionError::ParticipantInUse(participant));
        }

        self.roster.remove(name);
        tracing::info!(participant = %participant, "Participant removed");
        Ok(participant)
    }

    pub fn is_participant_in_use(&self, name: &str) -> bool {
        self.expenses.iter().any(|expense| expense.references(name))
    }

    pub fn add_expense(
        &mut self,
        draft: ExpenseDraft,
        id_generator: &dyn ExpenseIdGenerator,
    ) -> Result<ExpenseId, SessionError> {
        if let Err(err) = validate_draft(&draft, &self.roster) {
            tracing::warn!(expense = %draft.name, error = %err, "Expense rejected");
            return Err(err.into());
        }

        let id = id_generator.next_id();
        let ExpenseDraft {
            name,
            amount,
            payer,
            involved,
            split,
        } = draft;
        tracing::info!(expense_id = %id, expense = %name, amount = %amount, "Expense added");
        self.expenses
            .push(Expense::new(id, name, amount, payer, involved, split));
        Ok(id)
    }

    pub fn remove_expense(&mut self, id: ExpenseId) -> Result<Expense, SessionError> {
        let Some(index) = self.expenses.iter().position(|expense| expense.id() == id) else {
            return Err(SessionError::UnknownExpense(id));
        };

        tracing::info!(expense_id = %id, "Expense removed");
        Ok(self.expenses.remove(index))
    }

    /// Removes the most recently added expense called `name`.
    pub fn remove_expense_named(&mut self, name: &str) -> Result<Expense, SessionError> {
        let Some(id) = self
            .expenses
            .iter()
            .rev()
            .find(|expense| expense.name() == name)
            .map(Expense::id)
        else {
            tracing::warn!(expense = name, "No expense with that name");
            return Err(SessionError::UnknownExpenseName(name.to_owned()));
        };
        self.remove_expense(id)
    }
}

fn validate_draft(draft: &ExpenseDraft, roster: &Roster) -> Result<(), ExpenseValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyName);
    }
    if draft.amount <= Money::ZERO {
        return Err(ExpenseValidationError::NonPositiveAmount(draft.amount));
    }
    if !roster.contains(draft.payer.as_str()) {
        return Err(ExpenseValidationError::UnknownPayer(draft.payer.clone()));
    }
    if draft.involved.is_empty() {
        return Err(ExpenseValidationError::NoInvolvedParticipants);
    }

    let mut seen: FxHashSet<&ParticipantId> = FxHashSet::default();
    for participant in &draft.involved {
        if !roster.contains(participant.as_str()) {
            return Err(ExpenseValidationError::UnknownParticipant(
                participant.clone(),
            ));
        }
        if !seen.insert(participant) {
            return Err(ExpenseValidationError::DuplicateParticipant(
                participant.clone(),
            ));
        }
    }

    if let SplitRule::Manual(contributions) = &draft.split {
        for (participant, amount) in contributions {
            if !roster.contains(participant.as_str()) {
                return Err(ExpenseValidationError::UnknownParticipant(
                    participant.clone(),
                ));
            }
            if amount.is_sign_negative() {
                return Err(ExpenseValidationError::NegativeContribution {
                    participant: participant.clone(),
                    amount: *amount,
                });
            }
        }

        let contributed = Money::checked_sum(contributions.values())
            .ok_or(ExpenseValidationError::AmountOverflow)?;
        if !contributed.approx_eq(draft.amount) {
            return Err(ExpenseValidationError::ContributionMismatch {
                amount: draft.amount,
                contributed,
            });
        }
    }

    Ok(())
}
