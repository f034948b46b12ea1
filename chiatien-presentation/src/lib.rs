#![warn(clippy::uninlined_format_args)]

pub mod currency;
pub mod error_presenter;
pub mod expense_presenter;
pub mod settlement_presenter;
pub mod text_table;

pub use currency::{Currency, CurrencyFormat, UnknownCurrency};
pub use error_presenter::{
    format_expense_error, format_report_error, format_script_error, format_session_error,
};
pub use expense_presenter::ExpensePresenter;
pub use settlement_presenter::{SettlementPresenter, SettlementView};
