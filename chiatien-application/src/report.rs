use crate::{
    error::ReportError,
    model::{PersonBalance, SettlementReport},
    session::Session,
};
use chiatien_domain::{
    BalanceCalculator, ExpenseBreakdown, Money, SettlementReducer, SummaryConsolidator,
};

/// Recomputes every derived view of a session from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn build(&self, session: &Session) -> Result<SettlementReport, ReportError> {
        let roster = session.participants();
        let expenses = session.expenses();

        let balances = BalanceCalculator.calculate(roster, expenses)?;
        let transfers = SettlementReducer.reduce(&balances)?;
        let breakdown = ExpenseBreakdown.settle(roster, expenses)?;
        let summary = SummaryConsolidator.consolidate(&breakdown)?;

        let balances = roster
            .iter()
            .map(|id| PersonBalance {
                id: id.clone(),
                balance: balances.get(id).copied().unwrap_or(Money::ZERO),
            })
            .collect();

        tracing::debug!(
            transfer_count = transfers.len(),
            summary_count = summary.len(),
            "Report built"
        );

        Ok(SettlementReport {
            balances,
            transfers,
            breakdown,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::ExpenseDraft, ports::ExpenseIdGenerator};
    use chiatien_domain::{ExpenseId, ParticipantId, Transfer};
    use rstest::{fixture, rstest};
    use std::sync::atomic::{AtomicU64, Ordering};

    struct SequentialIds(AtomicU64);

    impl ExpenseIdGenerator for SequentialIds {
        fn next_id(&self) -> ExpenseId {
            ExpenseId::from_u128(u128::from(self.0.fetch_add(1, Ordering::Relaxed)) + 1)
        }
    }

    fn transfer(from: &str, to: &str, amount: i64) -> Transfer {
        Transfer {
            from: ParticipantId::from(from),
            to: ParticipantId::from(to),
            amount: Money::from_i64(amount),
        }
    }

    #[fixture]
    fn trip() -> Session {
        let ids = SequentialIds(AtomicU64::new(0));
        let mut session = Session::new();
        for name in ["A", "B", "C", "D"] {
            session.add_participant(name).expect("fresh participant");
        }
        session
            .add_expense(
                ExpenseDraft::even("dinner", Money::from_i64(90), "A", ["A", "B", "C"]),
                &ids,
            )
            .expect("valid expense");
        session
            .add_expense(
                ExpenseDraft::even("taxi", Money::from_i64(60), "B", ["A", "B"]),
                &ids,
            )
            .expect("valid expense");
        session
    }

    #[rstest]
    fn balances_follow_roster_order(trip: Session) {
        let report = ReportBuilder.build(&trip).expect("balanced session");

        let balances: Vec<_> = report
            .balances
            .iter()
            .map(|entry| (entry.id.to_string(), entry.balance))
            .collect();
        assert_eq!(
            balances,
            vec![
                ("A".to_string(), Money::from_i64(30)),
                ("B".to_string(), Money::ZERO),
                ("C".to_string(), Money::from_i64(-30)),
                ("D".to_string(), Money::ZERO),
            ]
        );
    }

    #[rstest]
    fn report_contains_all_views(trip: Session) {
        let report = ReportBuilder.build(&trip).expect("balanced session");

        assert_eq!(report.transfers, vec![transfer("C", "A", 30)]);
        assert_eq!(report.breakdown.len(), 2);
        assert_eq!(report.breakdown[0].expense_name, "dinner");
        assert_eq!(
            report.breakdown[0].transfers,
            vec![transfer("B", "A", 30), transfer("C", "A", 30)]
        );
        assert_eq!(report.breakdown[1].transfers, vec![transfer("A", "B", 30)]);

        assert_eq!(report.summary.owed("C", "A"), Money::from_i64(30));
        assert_eq!(report.summary.owed("B", "A"), Money::ZERO);
        assert_eq!(report.summary.owed("A", "B"), Money::ZERO);
    }

    #[rstest]
    fn empty_session_yields_empty_report() {
        let report = ReportBuilder.build(&Session::new()).expect("empty session");

        assert!(report.balances.is_empty());
        assert!(report.transfers.is_empty());
        assert!(report.breakdown.is_empty());
        assert!(report.summary.is_empty());
    }
}
