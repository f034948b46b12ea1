pub mod balance_calculator;
pub mod expense_breakdown;
pub mod settlement_reducer;
pub mod summary_consolidator;

pub use balance_calculator::BalanceCalculator;
pub use expense_breakdown::ExpenseBreakdown;
pub use settlement_reducer::SettlementReducer;
pub use summary_consolidator::SummaryConsolidator;
