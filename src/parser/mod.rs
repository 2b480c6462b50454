//! Parsing: the entry grammar and the restricted query grammar.

pub mod entry;
pub mod query;
pub mod tokens;

pub use entry::{classify_line, parse_entry, Line};
pub use query::parse_query_components;
