use crate::{
    currency::CurrencyFormat,
    text_table::{Alignment, TextTableBuilder},
};
use chiatien_application::{PersonBalance, SettlementReport};
use chiatien_domain::{DebtSummary, ExpenseSettlement, Transfer};
use chiatien_i18n as i18n;
use std::{borrow::Cow, fmt::Write};

pub struct SettlementPresenter {
    currency: CurrencyFormat,
}

/// Each report section rendered as text, title included.
pub struct SettlementView {
    pub balances: String,
    pub transactions: String,
    pub breakdown: String,
    pub summary: String,
}

impl SettlementView {
    pub fn into_full_report(self) -> String {
        [self.balances, self.transactions, self.breakdown, self.summary].join("\n")
    }
}

impl SettlementPresenter {
    pub fn new(currency: CurrencyFormat) -> Self {
        Self { currency }
    }

    pub fn render(&self, report: &SettlementReport) -> SettlementView {
        SettlementView {
            balances: self.render_balances(&report.balances),
            transactions: self.render_transactions(&report.transfers),
            breakdown: self.render_breakdown(&report.breakdown),
            summary: self.render_summary(&report.summary),
        }
    }

    pub fn render_balances(&self, balances: &[PersonBalance]) -> String {
        let headers = [
            Cow::Borrowed(i18n::PARTICIPANT),
            Cow::Borrowed(i18n::BALANCE),
        ];
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&headers)
            .rows(balances.iter().map(|person| {
                [
                    Cow::Owned(person.id.to_string()),
                    Cow::Owned(self.currency.format_signed(person.balance)),
                ]
            }))
            .build();
        section(i18n::INDIVIDUAL_SUMMARY, &table)
    }

    pub fn render_transactions(&self, transfers: &[Transfer]) -> String {
        section(i18n::TRANSACTION_BREAKDOWN, &self.owes_lines(transfers, ""))
    }

    pub fn render_breakdown(&self, breakdown: &[ExpenseSettlement]) -> String {
        let mut body = String::new();
        for settlement in breakdown {
            let _ = writeln!(&mut body, "{}", settlement.expense_name);
            body.push_str(&self.owes_lines(&settlement.transfers, "  "));
        }
        if breakdown.is_empty() {
            let _ = writeln!(&mut body, "{}", i18n::NO_EXPENSES);
        }
        section(i18n::EXPENSE_BREAKDOWN, &body)
    }

    pub fn render_summary(&self, summary: &DebtSummary) -> String {
        if summary.is_empty() {
            return section(i18n::CONSOLIDATED_SUMMARY, &format!("{}\n", i18n::ALL_SETTLED));
        }

        let headers = [
            Cow::Borrowed(i18n::FROM),
            Cow::Borrowed(i18n::TO),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers)
            .rows(summary.iter().map(|(debtor, creditor, amount)| {
                [
                    Cow::Owned(debtor.to_string()),
                    Cow::Owned(creditor.to_string()),
                    Cow::Owned(self.currency.format(amount)),
                ]
            }))
            .build();
        section(i18n::CONSOLIDATED_SUMMARY, &table)
    }

    fn owes_lines(&self, transfers: &[Transfer], indent: &str) -> String {
        if transfers.is_empty() {
            return format!("{indent}{}\n", i18n::ALL_SETTLED);
        }

        let mut lines = String::new();
        for transfer in transfers {
            let _ = writeln!(
                &mut lines,
                "{indent}{}",
                i18n::owes(
                    &transfer.from,
                    &transfer.to,
                    self.currency.format(transfer.amount)
                )
            );
        }
        lines
    }
}

/// Title, underline, body.
pub(crate) fn section(title: &str, body: &str) -> String {
    let underline = "=".repeat(title.chars().count());
    format!("{title}\n{underline}\n{body}")
}

#[cfg(all(test, not(feature = "vi")))]
mod tests {
    use super::*;
    use chiatien_domain::{ExpenseId, Money, ParticipantId, SummaryConsolidator};

    fn transfer(from: &str, to: &str, amount: i64) -> Transfer {
        Transfer {
            from: ParticipantId::from(from),
            to: ParticipantId::from(to),
            amount: Money::from_i64(amount),
        }
    }

    fn sample_report() -> SettlementReport {
        let breakdown = vec![
            ExpenseSettlement {
                expense_id: ExpenseId::from_u128(1),
                expense_name: "dinner".to_string(),
                transfers: vec![transfer("B", "A", 30), transfer("C", "A", 30)],
            },
            ExpenseSettlement {
                expense_id: ExpenseId::from_u128(2),
                expense_name: "solo".to_string(),
                transfers: vec![],
            },
        ];
        SettlementReport {
            balances: vec![
                PersonBalance {
                    id: ParticipantId::from("A"),
                    balance: Money::from_i64(60),
                },
                PersonBalance {
                    id: ParticipantId::from("B"),
                    balance: Money::from_i64(-30),
                },
                PersonBalance {
                    id: ParticipantId::from("C"),
                    balance: Money::from_i64(-30),
                },
            ],
            transfers: vec![transfer("B", "A", 30), transfer("C", "A", 30)],
            summary: SummaryConsolidator
                .consolidate(&breakdown)
                .expect("amounts in range"),
            breakdown,
        }
    }

    #[test]
    fn renders_owes_lines() {
        let view = SettlementPresenter::new(CurrencyFormat::usd()).render(&sample_report());

        assert_eq!(
            view.transactions,
            "Transaction Breakdown\n\
             =====================\n\
             B owes A $30.00\n\
             C owes A $30.00\n"
        );
    }

    #[test]
    fn renders_signed_balances() {
        let view = SettlementPresenter::new(CurrencyFormat::usd()).render(&sample_report());

        assert!(view.balances.contains("A           | +$60.00"));
        assert!(view.balances.contains("B           | -$30.00"));
    }

    #[test]
    fn breakdown_lists_each_expense() {
        let view = SettlementPresenter::new(CurrencyFormat::vnd()).render(&sample_report());

        assert_eq!(
            view.breakdown,
            "Breakdown by Expense\n\
             ====================\n\
             dinner\n\
             \x20 B owes A 30 ₫\n\
             \x20 C owes A 30 ₫\n\
             solo\n\
             \x20 Everyone is settled up.\n"
        );
    }

    #[test]
    fn empty_summary_reads_settled() {
        let presenter = SettlementPresenter::new(CurrencyFormat::usd());

        let rendered = presenter.render_summary(&DebtSummary::default());

        assert!(rendered.ends_with("Everyone is settled up.\n"));
    }

    #[test]
    fn full_report_contains_every_section() {
        let report = SettlementPresenter::new(CurrencyFormat::usd())
            .render(&sample_report())
            .into_full_report();

        for title in [
            "Individual Summary",
            "Transaction Breakdown",
            "Breakdown by Expense",
            "Consolidated Summary",
        ] {
            assert!(report.contains(title), "missing {title}");
        }
    }
}
