use crate::{Script, error::ScriptParseError};
use chiatien_domain::ExpenseId;

pub trait ScriptParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<Script, ScriptParseError>;
}

pub trait ExpenseIdGenerator: Send + Sync {
    fn next_id(&self) -> ExpenseId;
}
