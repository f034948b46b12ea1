use chiatien_application::{
    ExpenseValidationError, ReportError, ScriptError, ScriptParseError, SessionError,
};
use chiatien_domain::BalanceError;
use chiatien_i18n as i18n;

pub fn format_expense_error(error: &ExpenseValidationError) -> String {
    match error {
        ExpenseValidationError::EmptyName => i18n::EMPTY_EXPENSE_NAME.to_string(),
        ExpenseValidationError::NonPositiveAmount(amount) => i18n::non_positive_amount(amount),
        ExpenseValidationError::UnknownPayer(payer) => i18n::unknown_payer(payer),
        ExpenseValidationError::NoInvolvedParticipants => {
            i18n::NO_INVOLVED_PARTICIPANTS.to_string()
        }
        ExpenseValidationError::UnknownParticipant(participant) => {
            i18n::unknown_participant(participant)
        }
        ExpenseValidationError::DuplicateParticipant(participant) => {
            i18n::duplicate_involved(participant)
        }
        ExpenseValidationError::NegativeContribution {
            participant,
            amount,
        } => i18n::negative_contribution(participant, amount),
        ExpenseValidationError::ContributionMismatch {
            amount,
            contributed,
        } => i18n::contribution_mismatch(contributed, amount),
        ExpenseValidationError::AmountOverflow => i18n::AMOUNT_OVERFLOW.to_string(),
    }
}

pub fn format_session_error(error: &SessionError) -> String {
    match error {
        SessionError::EmptyParticipantName => i18n::EMPTY_PARTICIPANT_NAME.to_string(),
        SessionError::DuplicateParticipant(name) => i18n::duplicate_participant(name),
        SessionError::UnknownParticipant(name) => i18n::unknown_participant(name),
        SessionError::ParticipantInUse(name) => i18n::participant_in_use(name),
        SessionError::UnknownExpense(id) => i18n::unknown_expense(id),
        SessionError::UnknownExpenseName(name) => i18n::unknown_expense_name(name),
        SessionError::InvalidExpense(err) => format_expense_error(err),
    }
}

pub fn format_report_error(error: &ReportError) -> String {
    let detail = match error {
        ReportError::Balance(BalanceError::UnknownParticipant { participant, .. }) => {
            i18n::unknown_participant(participant)
        }
        ReportError::Balance(BalanceError::NoInvolvedParticipants { .. }) => {
            i18n::NO_INVOLVED_PARTICIPANTS.to_string()
        }
        ReportError::Balance(BalanceError::ContributionMismatch {
            amount,
            contributed,
            ..
        }) => i18n::contribution_mismatch(contributed, amount),
        ReportError::Balance(BalanceError::AmountOverflow { .. }) | ReportError::AmountOverflow => {
            i18n::AMOUNT_OVERFLOW.to_string()
        }
        ReportError::ImbalancedTotal(total) => i18n::imbalanced_total(total),
    };
    format!("{}: {detail}", i18n::SETTLEMENT_CALCULATION_FAILED)
}

pub fn format_script_error(error: &ScriptError) -> String {
    match error {
        ScriptError::Parse(ScriptParseError::SyntaxError { line, detail }) => {
            i18n::syntax_error(*line, detail.clone()).to_string()
        }
        ScriptError::Parse(ScriptParseError::InvalidAmount { line, amount }) => {
            i18n::at_line(*line, i18n::invalid_amount(amount)).to_string()
        }
        ScriptError::Session { line, source } => {
            i18n::at_line(*line, format_session_error(source)).to_string()
        }
        ScriptError::Report(err) => format_report_error(err),
    }
}
