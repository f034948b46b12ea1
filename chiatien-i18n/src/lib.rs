#[cfg(all(feature = "vi", feature = "en"))]
compile_error!("Cannot enable both 'vi' and 'en' features at the same time");

use std::fmt::{self, Display};

#[cfg(feature = "vi")]
pub mod strings {
    pub const PARTICIPANT: &str = "Thành viên";
    pub const BALANCE: &str = "Số dư";
    pub const FROM: &str = "Người trả";
    pub const TO: &str = "Người nhận";
    pub const AMOUNT: &str = "Số tiền";
    pub const EXPENSE: &str = "Khoản chi";
    pub const PAYER: &str = "Người chi";
    pub const INVOLVED: &str = "Người tham gia";
    pub const SPLIT: &str = "Cách chia";
    pub const SPLIT_EVEN: &str = "Chia đều";
    pub const SPLIT_MANUAL: &str = "Tùy chỉnh";
    pub const INDIVIDUAL_SUMMARY: &str = "Tổng kết từng người";
    pub const TRANSACTION_BREAKDOWN: &str = "Các khoản cần chuyển";
    pub const EXPENSE_BREAKDOWN: &str = "Chi tiết theo khoản chi";
    pub const CONSOLIDATED_SUMMARY: &str = "Tổng hợp công nợ";
    pub const EXPENSES: &str = "Danh sách khoản chi";
    pub const ALL_SETTLED: &str = "Mọi người đã thanh toán xong.";
    pub const NO_EXPENSES: &str = "Chưa có khoản chi nào.";
    pub const EMPTY_PARTICIPANT_NAME: &str = "Tên thành viên không được để trống";
    pub const EMPTY_EXPENSE_NAME: &str = "Tên khoản chi không được để trống";
    pub const NO_INVOLVED_PARTICIPANTS: &str = "Khoản chi phải có ít nhất một người tham gia";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Không thể tính toán thanh toán";
    pub const AMOUNT_OVERFLOW: &str = "Số tiền vượt quá giới hạn cho phép";
}

#[cfg(not(feature = "vi"))]
pub mod strings {
    pub const PARTICIPANT: &str = "Participant";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const EXPENSE: &str = "Expense";
    pub const PAYER: &str = "Paid by";
    pub const INVOLVED: &str = "Involved";
    pub const SPLIT: &str = "Split";
    pub const SPLIT_EVEN: &str = "Even";
    pub const SPLIT_MANUAL: &str = "Manual";
    pub const INDIVIDUAL_SUMMARY: &str = "Individual Summary";
    pub const TRANSACTION_BREAKDOWN: &str = "Transaction Breakdown";
    pub const EXPENSE_BREAKDOWN: &str = "Breakdown by Expense";
    pub const CONSOLIDATED_SUMMARY: &str = "Consolidated Summary";
    pub const EXPENSES: &str = "Expenses";
    pub const ALL_SETTLED: &str = "Everyone is settled up.";
    pub const NO_EXPENSES: &str = "No expenses yet.";
    pub const EMPTY_PARTICIPANT_NAME: &str = "Participant name must not be empty";
    pub const EMPTY_EXPENSE_NAME: &str = "Expense name must not be empty";
    pub const NO_INVOLVED_PARTICIPANTS: &str = "An expense needs at least one involved participant";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Settlement calculation failed";
    pub const AMOUNT_OVERFLOW: &str = "Amounts are too large to add up";
}

pub use strings::*;

#[cfg(feature = "vi")]
pub fn owes(debtor: impl Display, creditor: impl Display, amount: impl Display) -> String {
    format!("{debtor} nợ {creditor} {amount}")
}

#[cfg(feature = "vi")]
pub fn duplicate_participant(name: impl Display) -> String {
    format!("Thành viên '{name}' đã tồn tại")
}

#[cfg(feature = "vi")]
pub fn unknown_participant(name: impl Display) -> String {
    format!("Không có thành viên '{name}'")
}

#[cfg(feature = "vi")]
pub fn unknown_payer(name: impl Display) -> String {
    format!("Người chi '{name}' không phải thành viên")
}

#[cfg(feature = "vi")]
pub fn participant_in_use(name: impl Display) -> String {
    format!("Không thể xóa '{name}' vì vẫn còn khoản chi liên quan")
}

#[cfg(feature = "vi")]
pub fn duplicate_involved(name: impl Display) -> String {
    format!("'{name}' bị liệt kê nhiều lần")
}

#[cfg(feature = "vi")]
pub fn unknown_expense(id: impl Display) -> String {
    format!("Không tìm thấy khoản chi {id}")
}

#[cfg(feature = "vi")]
pub fn unknown_expense_name(name: impl Display) -> String {
    format!("Không có khoản chi nào tên '{name}'")
}

#[cfg(feature = "vi")]
pub fn non_positive_amount(amount: impl Display) -> String {
    format!("Số tiền phải lớn hơn 0 (nhận được {amount})")
}

#[cfg(feature = "vi")]
pub fn negative_contribution(name: impl Display, amount: impl Display) -> String {
    format!("Phần đóng góp của '{name}' bị âm ({amount})")
}

#[cfg(feature = "vi")]
pub fn contribution_mismatch(contributed: impl Display, amount: impl Display) -> String {
    format!("Tổng phần đóng góp là {contributed}, cần bằng {amount}")
}

#[cfg(feature = "vi")]
pub fn imbalanced_total(total: impl Display) -> String {
    format!("Tổng số dư phải bằng 0 (hiện là {total})")
}

#[cfg(feature = "vi")]
pub fn invalid_amount(amount: impl Display) -> String {
    format!("Số tiền không hợp lệ '{amount}'")
}

#[cfg(not(feature = "vi"))]
pub fn owes(debtor: impl Display, creditor: impl Display, amount: impl Display) -> String {
    format!("{debtor} owes {creditor} {amount}")
}

#[cfg(not(feature = "vi"))]
pub fn duplicate_participant(name: impl Display) -> String {
    format!("Participant '{name}' already exists")
}

#[cfg(not(feature = "vi"))]
pub fn unknown_participant(name: impl Display) -> String {
    format!("'{name}' is not a participant")
}

#[cfg(not(feature = "vi"))]
pub fn unknown_payer(name: impl Display) -> String {
    format!("Payer '{name}' is not a participant")
}

#[cfg(not(feature = "vi"))]
pub fn participant_in_use(name: impl Display) -> String {
    format!("Cannot remove '{name}' while an expense still refers to them")
}

#[cfg(not(feature = "vi"))]
pub fn duplicate_involved(name: impl Display) -> String {
    format!("'{name}' is listed more than once")
}

#[cfg(not(feature = "vi"))]
pub fn unknown_expense(id: impl Display) -> String {
    format!("Expense {id} does not exist")
}

#[cfg(not(feature = "vi"))]
pub fn unknown_expense_name(name: impl Display) -> String {
    format!("No expense is named '{name}'")
}

#[cfg(not(feature = "vi"))]
pub fn non_positive_amount(amount: impl Display) -> String {
    format!("Amount must be greater than zero (got {amount})")
}

#[cfg(not(feature = "vi"))]
pub fn negative_contribution(name: impl Display, amount: impl Display) -> String {
    format!("Contribution of '{name}' is negative ({amount})")
}

#[cfg(not(feature = "vi"))]
pub fn contribution_mismatch(contributed: impl Display, amount: impl Display) -> String {
    format!("Contributions add up to {contributed}, expected {amount}")
}

#[cfg(not(feature = "vi"))]
pub fn imbalanced_total(total: impl Display) -> String {
    format!("Balances must add up to zero (found {total})")
}

#[cfg(not(feature = "vi"))]
pub fn invalid_amount(amount: impl Display) -> String {
    format!("Invalid amount '{amount}'")
}

/// A message tied to a script line.
pub struct LineMessage<M> {
    line: usize,
    message: M,
}

pub struct SyntaxErrorMessage {
    line: usize,
    detail: String,
}

pub fn at_line<M: Display>(line: usize, message: M) -> LineMessage<M> {
    LineMessage { line, message }
}

pub fn syntax_error(line: usize, detail: String) -> SyntaxErrorMessage {
    SyntaxErrorMessage { line, detail }
}

#[cfg(feature = "vi")]
impl<M: Display> Display for LineMessage<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dòng {}: {}", self.line, self.message)
    }
}

#[cfg(feature = "vi")]
impl Display for SyntaxErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lỗi cú pháp (dòng {}): {}", self.line, self.detail)
    }
}

#[cfg(not(feature = "vi"))]
impl<M: Display> Display for LineMessage<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

#[cfg(not(feature = "vi"))]
impl Display for SyntaxErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Syntax error at line {}: {}", self.line, self.detail)
    }
}
