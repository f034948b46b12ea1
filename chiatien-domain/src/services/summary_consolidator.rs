use crate::{
    error::SettlementError,
    model::{DebtSummary, ExpenseSettlement, Money, ParticipantId},
};
use fxhash::FxHashSet;
use std::collections::BTreeMap;

/// Merges per-expense settlements into one netted debt table.
pub struct SummaryConsolidator;

impl SummaryConsolidator {
    /// Sums all per-expense transfers per (debtor, creditor) and nets opposite
    /// directions of each pair into a single entry. Pairs that cancel out are
    /// dropped. Fails when a pair's accumulated debt is out of range.
    pub fn consolidate(
        &self,
        settlements: &[ExpenseSettlement],
    ) -> Result<DebtSummary, SettlementError> {
        let mut owed: BTreeMap<(ParticipantId, ParticipantId), Money> = BTreeMap::new();
        for transfer in settlements.iter().flat_map(|settlement| &settlement.transfers) {
            let debt = owed
                .entry((transfer.from.clone(), transfer.to.clone()))
                .or_insert(Money::ZERO);
            *debt = debt
                .checked_add(transfer.amount)
                .ok_or(SettlementError::AmountOverflow)?;
        }

        let mut summary = DebtSummary::default();
        let mut netted: FxHashSet<(&ParticipantId, &ParticipantId)> = FxHashSet::default();
        for ((debtor, creditor), amount) in &owed {
            if debtor == creditor {
                continue;
            }
            let pair = if debtor < creditor {
                (debtor, creditor)
            } else {
                (creditor, debtor)
            };
            if !netted.insert(pair) {
                continue;
            }

            let reverse = owed
                .get(&(creditor.clone(), debtor.clone()))
                .copied()
                .unwrap_or(Money::ZERO);
            let net = *amount - reverse;
            if net.is_negligible() {
                continue;
            }
            if net.is_sign_negative() {
                summary.insert(creditor.clone(), debtor.clone(), -net);
            } else {
                summary.insert(debtor.clone(), creditor.clone(), net);
            }
        }

        tracing::debug!(
            pair_count = netted.len(),
            debt_count = summary.len(),
            "Settlements consolidated"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExpenseId, Transfer};
    use rstest::{fixture, rstest};

    #[fixture]
    fn consolidator() -> SummaryConsolidator {
        SummaryConsolidator
    }

    fn settlement(seq: u128, triples: &[(&str, &str, i64)]) -> ExpenseSettlement {
        ExpenseSettlement {
            expense_id: ExpenseId::from_u128(seq),
            expense_name: format!("expense-{seq}"),
            transfers: triples
                .iter()
                .map(|(from, to, amount)| Transfer {
                    from: ParticipantId::from(*from),
                    to: ParticipantId::from(*to),
                    amount: Money::from_i64(*amount),
                })
                .collect(),
        }
    }

    fn debts(summary: &DebtSummary) -> Vec<(String, String, Money)> {
        summary
            .iter()
            .map(|(debtor, creditor, amount)| (debtor.to_string(), creditor.to_string(), amount))
            .collect()
    }

    fn expected(triples: &[(&str, &str, i64)]) -> Vec<(String, String, Money)> {
        triples
            .iter()
            .map(|(from, to, amount)| (from.to_string(), to.to_string(), Money::from_i64(*amount)))
            .collect()
    }

    #[rstest]
    #[case::opposite_directions_net(
        vec![settlement(1, &[("B", "A", 20)]), settlement(2, &[("A", "B", 50)])],
        expected(&[("A", "B", 30)])
    )]
    #[case::same_direction_sums(
        vec![settlement(1, &[("B", "A", 20)]), settlement(2, &[("B", "A", 15)])],
        expected(&[("B", "A", 35)])
    )]
    #[case::equal_amounts_cancel(
        vec![settlement(1, &[("B", "A", 40)]), settlement(2, &[("A", "B", 40)])],
        expected(&[])
    )]
    #[case::independent_pairs(
        vec![
            settlement(1, &[("B", "A", 30), ("C", "A", 30)]),
            settlement(2, &[("A", "C", 10)]),
        ],
        expected(&[("B", "A", 30), ("C", "A", 20)])
    )]
    #[case::no_settlements(vec![], expected(&[]))]
    fn consolidates_settlements(
        consolidator: SummaryConsolidator,
        #[case] settlements: Vec<ExpenseSettlement>,
        #[case] expected: Vec<(String, String, Money)>,
    ) {
        let summary = consolidator
            .consolidate(&settlements)
            .expect("amounts in range");
        assert_eq!(debts(&summary), expected);
    }

    #[rstest]
    fn keeps_one_direction_per_pair(consolidator: SummaryConsolidator) {
        let summary = consolidator
            .consolidate(&[
                settlement(1, &[("B", "A", 20), ("C", "B", 5)]),
                settlement(2, &[("A", "B", 50), ("B", "C", 7)]),
                settlement(3, &[("B", "A", 1)]),
            ])
            .expect("amounts in range");

        assert_eq!(summary.owed("A", "B"), Money::from_i64(29));
        assert_eq!(summary.owed("B", "A"), Money::ZERO);
        assert_eq!(summary.owed("B", "C"), Money::from_i64(2));
        assert_eq!(summary.owed("C", "B"), Money::ZERO);
    }

    #[rstest]
    fn rejects_debts_out_of_range(consolidator: SummaryConsolidator) {
        let mut first = settlement(1, &[("B", "A", 0)]);
        let mut second = settlement(2, &[("B", "A", 0)]);
        let max = Money::from_decimal(rust_decimal::Decimal::MAX);
        first.transfers[0].amount = max;
        second.transfers[0].amount = max;

        assert_eq!(
            consolidator.consolidate(&[first, second]),
            Err(SettlementError::AmountOverflow)
        );
    }
}
