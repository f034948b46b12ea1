use crate::{
    currency::CurrencyFormat,
    settlement_presenter::section,
    text_table::{Alignment, TextTableBuilder},
};
use chiatien_domain::{Expense, SplitRule};
use chiatien_i18n as i18n;
use std::borrow::Cow;

pub struct ExpensePresenter {
    currency: CurrencyFormat,
}

impl ExpensePresenter {
    pub fn new(currency: CurrencyFormat) -> Self {
        Self { currency }
    }

    pub fn render(&self, expenses: &[Expense]) -> String {
        if expenses.is_empty() {
            return section(i18n::EXPENSES, &format!("{}\n", i18n::NO_EXPENSES));
        }

        let headers = [
            Cow::Borrowed(i18n::EXPENSE),
            Cow::Borrowed(i18n::AMOUNT),
            Cow::Borrowed(i18n::PAYER),
            Cow::Borrowed(i18n::INVOLVED),
            Cow::Borrowed(i18n::SPLIT),
        ];
        let table = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Left,
                Alignment::Left,
                Alignment::Left,
            ])
            .headers(&headers)
            .rows(expenses.iter().map(|expense| {
                [
                    Cow::Borrowed(expense.name()),
                    Cow::Owned(self.currency.format(expense.amount())),
                    Cow::Owned(expense.payer().to_string()),
                    Cow::Owned(join_names(expense)),
                    Cow::Owned(self.split_label(expense.split())),
                ]
            }))
            .build();
        section(i18n::EXPENSES, &table)
    }

    fn split_label(&self, split: &SplitRule) -> String {
        match split {
            SplitRule::Even => i18n::SPLIT_EVEN.to_string(),
            SplitRule::Manual(contributions) => {
                let shares: Vec<String> = contributions
                    .iter()
                    .map(|(participant, amount)| {
                        format!("{participant}: {}", self.currency.format(*amount))
                    })
                    .collect();
                format!("{} ({})", i18n::SPLIT_MANUAL, shares.join(", "))
            }
        }
    }
}

fn join_names(expense: &Expense) -> String {
    expense
        .involved()
        .iter()
        .map(|participant| participant.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
