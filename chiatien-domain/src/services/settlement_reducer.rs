use crate::{
    error::SettlementError,
    model::{Money, ParticipantBalances, ParticipantId, Transfer},
};
use std::{cmp::Ordering, collections::BinaryHeap};

/// Greedy settlement: repeatedly matches the largest creditor with the largest debtor.
pub struct SettlementReducer;

#[derive(Debug, PartialEq, Eq)]
struct Outstanding {
    amount: Money,
    participant: ParticipantId,
}

// Max-heap order: larger amount first, then the lexicographically smaller id.
impl Ord for Outstanding {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| other.participant.cmp(&self.participant))
    }
}

impl PartialOrd for Outstanding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SettlementReducer {
    /// Reduces balances to debtor -> creditor transfers.
    ///
    /// Emits at most `n - 1` transfers for `n` participants with a non-negligible
    /// balance. Each transfer moves the smaller of the two remaining amounts, so
    /// one side is always exhausted.
    pub fn reduce(&self, balances: &ParticipantBalances) -> Result<Vec<Transfer>, SettlementError> {
        let Some(total) = Money::checked_sum(balances.values()) else {
            tracing::error!(
                reject_reason = "amount_overflow",
                participant_count = balances.len(),
                "Settlement rejected because balances cannot be totalled"
            );
            return Err(SettlementError::AmountOverflow);
        };
        if !total.is_negligible() {
            tracing::error!(
                reject_reason = "input_imbalance",
                participant_count = balances.len(),
                total = %total,
                "Settlement rejected due to input imbalance"
            );
            return Err(SettlementError::ImbalancedTotal(total));
        }

        let mut creditors = BinaryHeap::new();
        let mut debtors = BinaryHeap::new();
        for (participant, balance) in balances {
            if balance.is_negligible() {
                continue;
            }
            let participant = participant.clone();
            if balance.is_sign_negative() {
                debtors.push(Outstanding {
                    amount: -*balance,
                    participant,
                });
            } else {
                creditors.push(Outstanding {
                    amount: *balance,
                    participant,
                });
            }
        }

        let open_count = creditors.len() + debtors.len();
        let mut transfers = Vec::with_capacity(open_count.saturating_sub(1));

        loop {
            let (Some(mut creditor), Some(mut debtor)) = (creditors.pop(), debtors.pop()) else {
                break;
            };

            let amount = creditor.amount.min(debtor.amount);
            transfers.push(Transfer {
                from: debtor.participant.clone(),
                to: creditor.participant.clone(),
                amount,
            });

            creditor.amount -= amount;
            debtor.amount -= amount;
            if !creditor.amount.is_negligible() {
                creditors.push(creditor);
            }
            if !debtor.amount.is_negligible() {
                debtors.push(debtor);
            }
        }

        tracing::debug!(
            open_count,
            transfer_count = transfers.len(),
            "Settlement reduced"
        );

        Ok(transfers)
    }
}
