use crate::model::{ExpenseId, Money, ParticipantId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BalanceError {
    #[error("expense {expense} references unregistered participant '{participant}'")]
    UnknownParticipant {
        expense: ExpenseId,
        participant: ParticipantId,
    },
    #[error("expense {expense} is split evenly among no participants")]
    NoInvolvedParticipants { expense: ExpenseId },
    #[error("manual contributions of expense {expense} total {contributed}, expected {amount}")]
    ContributionMismatch {
        expense: ExpenseId,
        amount: Money,
        contributed: Money,
    },
    #[error("amounts of expense {expense} exceed the representable range")]
    AmountOverflow { expense: ExpenseId },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettlementError {
    #[error(transparent)]
    Balance(#[from] BalanceError),
    #[error("sum of balances must be zero (found {0})")]
    ImbalancedTotal(Money),
    #[error("settlement amounts exceed the representable range")]
    AmountOverflow,
}
