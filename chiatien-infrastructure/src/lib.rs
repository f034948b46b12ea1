#![warn(clippy::uninlined_format_args)]

pub mod id_generator;
pub mod parser;

pub use id_generator::UuidExpenseIdGenerator;
pub use parser::ChiatienScriptParser;
