use crate::{
    error::SettlementError,
    model::{Expense, ExpenseSettlement, Roster},
    services::{BalanceCalculator, SettlementReducer},
};

/// Settles each expense on its own, so every debt can be traced to the expense
/// that caused it.
pub struct ExpenseBreakdown;

impl ExpenseBreakdown {
    pub fn settle(
        &self,
        roster: &Roster,
        expenses: &[Expense],
    ) -> Result<Vec<ExpenseSettlement>, SettlementError> {
        let calculator = BalanceCalculator;
        let reducer = SettlementReducer;

        expenses
            .iter()
            .map(|expense| {
                let balances = calculator.calculate_isolated(roster, expense)?;
                let transfers = reducer.reduce(&balances)?;
                Ok(ExpenseSettlement {
                    expense_id: expense.id(),
                    expense_name: expense.name().to_owned(),
                    transfers,
                })
            })
            .collect()
    }
}
