#![allow(dead_code)]

use chiatien_domain::{
    Contributions, Expense, ExpenseId, Money, ParticipantId, Roster, SplitRule,
};
use proptest::prelude::*;

pub const NAMES: [&str; 6] = ["An", "Binh", "Chi", "Dung", "Giang", "Hoa"];

#[derive(Debug, Clone)]
pub struct ExpenseShape {
    pub cents: i64,
    pub payer: usize,
    pub involved_mask: u8,
    pub manual_shares: Option<Vec<i64>>,
}

pub fn expense_shape() -> impl Strategy<Value = ExpenseShape> {
    (
        1i64..=100_000,
        0usize..NAMES.len(),
        1u8..=63,
        prop::option::of(prop::collection::vec(0i64..=50_000, NAMES.len())),
    )
        .prop_map(|(cents, payer, involved_mask, manual_shares)| ExpenseShape {
            cents,
            payer,
            involved_mask,
            manual_shares,
        })
}

pub fn roster(member_count: usize) -> Roster {
    NAMES[..member_count].iter().copied().collect()
}

/// Builds expenses restricted to the first `member_count` names. Manual shapes
/// whose shares sum to zero fall back to an even split.
pub fn build_expenses(member_count: usize, shapes: &[ExpenseShape]) -> Vec<Expense> {
    shapes
        .iter()
        .enumerate()
        .map(|(seq, shape)| {
            let mut involved: Vec<usize> = (0..member_count)
                .filter(|idx| shape.involved_mask & (1 << idx) != 0)
                .collect();
            if involved.is_empty() {
                involved.push(0);
            }
            let payer = ParticipantId::from(NAMES[shape.payer % member_count]);
            let involved_ids: Vec<ParticipantId> = involved
                .iter()
                .map(|idx| ParticipantId::from(NAMES[*idx]))
                .collect();

            let manual = shape.manual_shares.as_ref().and_then(|shares| {
                let contributions: Contributions = involved
                    .iter()
                    .map(|idx| (ParticipantId::from(NAMES[*idx]), Money::new(shares[*idx], 2)))
                    .collect();
                let amount: Money = contributions.values().sum();
                (!amount.is_zero()).then_some((amount, contributions))
            });

            let (amount, split) = match manual {
                Some((amount, contributions)) => (amount, SplitRule::Manual(contributions)),
                None => (Money::new(shape.cents, 2), SplitRule::Even),
            };

            Expense::new(
                ExpenseId::from_u128(seq as u128 + 1),
                format!("expense-{seq}"),
                amount,
                payer,
                involved_ids,
                split,
            )
        })
        .collect()
}
