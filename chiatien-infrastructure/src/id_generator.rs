use chiatien_application::ExpenseIdGenerator;
use chiatien_domain::ExpenseId;
use uuid::Uuid;

/// Assigns random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidExpenseIdGenerator;

impl ExpenseIdGenerator for UuidExpenseIdGenerator {
    fn next_id(&self) -> ExpenseId {
        ExpenseId::from_uuid(Uuid::new_v4())
    }
}
