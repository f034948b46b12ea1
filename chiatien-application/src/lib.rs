#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod report;
pub mod script_processor;
pub mod session;

pub use error::{
    ExpenseValidationError, ReportError, ScriptError, ScriptParseError, SessionError,
};
pub use model::{
    Command, ExpenseDraft, PersonBalance, Script, ScriptStatement, ScriptStatementWithLine,
    SettlementReport,
};
pub use ports::{ExpenseIdGenerator, ScriptParser};
pub use report::ReportBuilder;
pub use script_processor::{ScriptOutput, ScriptProcessor};
pub use session::Session;
