use crate::{
    error::BalanceError,
    model::{Expense, Money, ParticipantBalances, ParticipantId, Roster, SplitRule},
};

/// Derives net balances from expenses.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes every registered participant's balance across all expenses.
    ///
    /// Every participant in `roster` gets an entry, including those with no
    /// expenses. An expense naming someone outside the roster fails the whole
    /// computation instead of creating a new entry.
    pub fn calculate(
        &self,
        roster: &Roster,
        expenses: &[Expense],
    ) -> Result<ParticipantBalances, BalanceError> {
        let mut balances: ParticipantBalances = roster
            .iter()
            .cloned()
            .map(|participant| (participant, Money::ZERO))
            .collect();

        for expense in expenses {
            apply_expense(&mut balances, expense)?;
        }

        tracing::debug!(
            participant_count = balances.len(),
            expense_count = expenses.len(),
            "Balances calculated"
        );

        Ok(balances)
    }

    /// Computes the balances produced by a single expense, treated as a closed
    /// ledger of the participants it references.
    pub fn calculate_isolated(
        &self,
        roster: &Roster,
        expense: &Expense,
    ) -> Result<ParticipantBalances, BalanceError> {
        let mut balances = ParticipantBalances::new();
        for participant in expense.referenced_participants() {
            if !roster.contains(participant.as_str()) {
                return Err(unknown_participant(expense, participant));
            }
            balances.entry(participant.clone()).or_insert(Money::ZERO);
        }

        apply_expense(&mut balances, expense)?;
        Ok(balances)
    }
}

fn apply_expense(balances: &mut ParticipantBalances, expense: &Expense) -> Result<(), BalanceError> {
    match expense.split() {
        SplitRule::Even => {
            let share = expense.amount().split_evenly(expense.involved().len()).ok_or(
                BalanceError::NoInvolvedParticipants {
                    expense: expense.id(),
                },
            )?;
            for participant in expense.involved() {
                adjust(balances, expense, participant, |balance| balance.checked_sub(share))?;
            }
        }
        SplitRule::Manual(contributions) => {
            let contributed = Money::checked_sum(contributions.values())
                .ok_or_else(|| amount_overflow(expense))?;
            if !contributed.approx_eq(expense.amount()) {
                return Err(BalanceError::ContributionMismatch {
                    expense: expense.id(),
                    amount: expense.amount(),
                    contributed,
                });
            }
            for (participant, contribution) in contributions {
                adjust(balances, expense, participant, |balance| {
                    balance.checked_sub(*contribution)
                })?;
            }
        }
    }

    adjust(balances, expense, expense.payer(), |balance| {
        balance.checked_add(expense.amount())
    })
}

fn adjust(
    balances: &mut ParticipantBalances,
    expense: &Expense,
    participant: &ParticipantId,
    op: impl FnOnce(Money) -> Option<Money>,
) -> Result<(), BalanceError> {
    let balance = balances
        .get_mut(participant)
        .ok_or_else(|| unknown_participant(expense, participant))?;
    *balance = op(*balance).ok_or_else(|| amount_overflow(expense))?;
    Ok(())
}

fn amount_overflow(expense: &Expense) -> BalanceError {
    tracing::warn!(
        expense_id = %expense.id(),
        amount = %expense.amount(),
        "Expense pushes a balance out of range"
    );
    BalanceError::AmountOverflow {
        expense: expense.id(),
    }
}

fn unknown_participant(expense: &Expense, participant: &ParticipantId) -> BalanceError {
    tracing::warn!(
        expense_id = %expense.id(),
        participant = %participant,
        "Expense references an unregistered participant"
    );
    BalanceError::UnknownParticipant {
        expense: expense.id(),
        participant: participant.clone(),
    }
}
