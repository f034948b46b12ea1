#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::{BalanceError, SettlementError};
pub use model::{
    Contributions, DebtSummary, Expense, ExpenseId, ExpenseSettlement, Money, ParticipantBalances,
    ParticipantId, Roster, SETTLEMENT_TOLERANCE, SplitRule, Transfer,
};
pub use services::{BalanceCalculator, ExpenseBreakdown, SettlementReducer, SummaryConsolidator};
