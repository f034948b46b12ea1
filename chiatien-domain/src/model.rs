use arcstr::ArcStr;
use indexmap::{IndexMap, IndexSet};
use rust_decimal::{Decimal, RoundingStrategy};
use std::{
    borrow::Borrow,
    collections::BTreeMap,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use uuid::Uuid;

/// Largest magnitude still treated as zero when comparing balances.
pub const SETTLEMENT_TOLERANCE: Money = Money(Decimal::from_parts(1, 0, 0, false, 6));

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(ArcStr);

impl ParticipantId {
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(name: &str) -> Self {
        Self(ArcStr::from(name))
    }
}

impl From<String> for ParticipantId {
    fn from(name: String) -> Self {
        Self(ArcStr::from(name))
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary amount in a single, unnamed currency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_sign_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns `true` when the amount lies within [`SETTLEMENT_TOLERANCE`] of zero.
    pub fn is_negligible(self) -> bool {
        self.0.abs() <= SETTLEMENT_TOLERANCE.0
    }

    /// `false` when the difference is not representable.
    pub fn approx_eq(self, other: Self) -> bool {
        self.checked_sub(other).is_some_and(Money::is_negligible)
    }

    /// `None` when the result is out of range.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// `None` when the result is out of range.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Sums the amounts, or `None` as soon as a partial sum is out of range.
    pub fn checked_sum<'a>(amounts: impl IntoIterator<Item = &'a Money>) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |total, amount| total.checked_add(*amount))
    }

    /// Divides the amount into `parts` equal shares. `None` when `parts` is zero.
    pub fn split_evenly(self, parts: usize) -> Option<Self> {
        self.0.checked_div(Decimal::from(parts)).map(Self)
    }

    /// Rounds half away from zero to `fraction_digits` decimal places.
    pub fn round_to(self, fraction_digits: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Registered participants of a session, in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    participants: IndexSet<ParticipantId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the participant was already registered.
    pub fn insert(&mut self, participant: ParticipantId) -> bool {
        self.participants.insert(participant)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParticipantId> {
        self.participants.shift_remove_full(name).map(|(_, id)| id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.participants.contains(name)
    }

    pub fn get(&self, name: &str) -> Option<&ParticipantId> {
        self.participants.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticipantId> + '_ {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl FromIterator<ParticipantId> for Roster {
    fn from_iter<I: IntoIterator<Item = ParticipantId>>(iter: I) -> Self {
        Self {
            participants: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Roster {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(ParticipantId::from).collect()
    }
}

/// Manual per-participant shares of an expense, in entry order.
pub type Contributions = IndexMap<ParticipantId, Money>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitRule {
    Even,
    Manual(Contributions),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    id: ExpenseId,
    name: String,
    amount: Money,
    payer: ParticipantId,
    involved: Vec<ParticipantId>,
    split: SplitRule,
}

impl Expense {
    /// Builds an expense without validating it; entry-time validation lives with
    /// whoever accepts user input, and the calculators re-check what they rely on.
    pub fn new(
        id: ExpenseId,
        name: impl Into<String>,
        amount: Money,
        payer: ParticipantId,
        involved: Vec<ParticipantId>,
        split: SplitRule,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            payer,
            involved,
            split,
        }
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn payer(&self) -> &ParticipantId {
        &self.payer
    }

    pub fn involved(&self) -> &[ParticipantId] {
        &self.involved
    }

    pub fn split(&self) -> &SplitRule {
        &self.split
    }

    pub fn splits_evenly(&self) -> bool {
        matches!(self.split, SplitRule::Even)
    }

    pub fn manual_contributions(&self) -> Option<&Contributions> {
        match &self.split {
            SplitRule::Even => None,
            SplitRule::Manual(contributions) => Some(contributions),
        }
    }

    /// Payer, involved participants and contributors, possibly with repeats.
    pub fn referenced_participants(&self) -> impl Iterator<Item = &ParticipantId> + '_ {
        let contributors = self
            .manual_contributions()
            .into_iter()
            .flat_map(|contributions| contributions.keys());
        std::iter::once(&self.payer)
            .chain(self.involved.iter())
            .chain(contributors)
    }

    pub fn references(&self, name: &str) -> bool {
        self.referenced_participants()
            .any(|participant| participant.as_str() == name)
    }
}

/// Net position per participant: positive is owed money, negative owes money.
pub type ParticipantBalances = BTreeMap<ParticipantId, Money>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseSettlement {
    pub expense_id: ExpenseId,
    pub expense_name: String,
    pub transfers: Vec<Transfer>,
}

/// Netted debts: debtor -> creditor -> amount, at most one direction per pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebtSummary {
    debts: BTreeMap<ParticipantId, BTreeMap<ParticipantId, Money>>,
}

impl DebtSummary {
    pub(crate) fn insert(&mut self, debtor: ParticipantId, creditor: ParticipantId, amount: Money) {
        self.debts
            .entry(debtor)
            .or_default()
            .insert(creditor, amount);
    }

    pub fn owed(&self, debtor: &str, creditor: &str) -> Money {
        self.debts
            .get(debtor)
            .and_then(|creditors| creditors.get(creditor))
            .copied()
            .unwrap_or(Money::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, &ParticipantId, Money)> + '_ {
        self.debts.iter().flat_map(|(debtor, creditors)| {
            creditors
                .iter()
                .map(move |(creditor, amount)| (debtor, creditor, *amount))
        })
    }

    pub fn total(&self) -> Money {
        self.iter().map(|(_, _, amount)| amount).sum()
    }

    pub fn len(&self) -> usize {
        self.debts.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact(Money::from_i64(90), 3, Some(Money::from_i64(30)))]
    #[case::fractional(Money::from_i64(10), 4, Some(Money::new(250, 2)))]
    #[case::no_parts(Money::from_i64(10), 0, None)]
    fn split_evenly_divides_amount(
        #[case] amount: Money,
        #[case] parts: usize,
        #[case] expected: Option<Money>,
    ) {
        assert_eq!(amount.split_evenly(parts), expected);
    }

    #[test]
    fn thirds_recombine_within_tolerance() {
        let share = Money::from_i64(100)
            .split_evenly(3)
            .expect("three parts");
        let total = share + share + share;
        assert!(total.approx_eq(Money::from_i64(100)));
        assert!(!Money::new(1, 5).is_negligible());
        assert!(Money::new(1, 6).is_negligible());
    }

    #[rstest]
    #[case::in_range(Money::from_i64(40), Money::from_i64(2), Some(Money::from_i64(42)))]
    #[case::past_max(Money::from_decimal(Decimal::MAX), Money::from_i64(1), None)]
    #[case::past_min(Money::from_decimal(Decimal::MIN), Money::from_i64(-1), None)]
    fn checked_add_reports_overflow(
        #[case] lhs: Money,
        #[case] rhs: Money,
        #[case] expected: Option<Money>,
    ) {
        assert_eq!(lhs.checked_add(rhs), expected);
    }

    #[test]
    fn checked_sub_and_sum_report_overflow() {
        let max = Money::from_decimal(Decimal::MAX);
        assert_eq!(Money::from_decimal(Decimal::MIN).checked_sub(Money::from_i64(1)), None);
        assert_eq!(max.checked_sub(max), Some(Money::ZERO));
        assert_eq!(Money::checked_sum(&[max, max]), None);
        assert_eq!(
            Money::checked_sum(&[Money::from_i64(1), Money::new(25, 1)]),
            Some(Money::new(35, 1))
        );
        assert!(!max.approx_eq(-max));
    }

    #[rstest]
    #[case::half_up(Money::new(12345, 3), 2, Money::new(1235, 2))]
    #[case::half_down_negative(Money::new(-12345, 3), 2, Money::new(-1235, 2))]
    #[case::integral(Money::new(4999, 2), 0, Money::from_i64(50))]
    fn round_to_uses_half_away_from_zero(
        #[case] amount: Money,
        #[case] digits: u32,
        #[case] expected: Money,
    ) {
        assert_eq!(amount.round_to(digits), expected);
    }

    #[test]
    fn roster_keeps_registration_order() {
        let mut roster: Roster = ["Carol", "Alice"].into_iter().collect();
        assert!(roster.insert(ParticipantId::from("Bob")));
        assert!(!roster.insert(ParticipantId::from("Alice")));

        let names: Vec<&str> = roster.iter().map(ParticipantId::as_str).collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);

        assert_eq!(roster.remove("Alice"), Some(ParticipantId::from("Alice")));
        let names: Vec<&str> = roster.iter().map(ParticipantId::as_str).collect();
        assert_eq!(names, vec!["Carol", "Bob"]);
        assert_eq!(roster.remove("Alice"), None);
    }

    #[test]
    fn expense_references_contributors() {
        let expense = Expense::new(
            ExpenseId::from_u128(1),
            "taxi",
            Money::from_i64(100),
            ParticipantId::from("A"),
            vec![ParticipantId::from("B")],
            SplitRule::Manual(Contributions::from_iter([(
                ParticipantId::from("C"),
                Money::from_i64(100),
            )])),
        );

        assert!(expense.references("A"));
        assert!(expense.references("B"));
        assert!(expense.references("C"));
        assert!(!expense.references("D"));
        assert!(!expense.splits_evenly());
    }

    #[test]
    fn debt_summary_reports_missing_pairs_as_zero() {
        let mut summary = DebtSummary::default();
        summary.insert(ParticipantId::from("A"), ParticipantId::from("B"), Money::from_i64(30));

        assert_eq!(summary.owed("A", "B"), Money::from_i64(30));
        assert_eq!(summary.owed("B", "A"), Money::ZERO);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary.total(), Money::from_i64(30));
    }
}
