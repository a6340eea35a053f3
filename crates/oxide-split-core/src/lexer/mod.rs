//! SQL Lexer/Splitter
//!
//! This module splits SQL text on a table of delimiters, then re-groups the
//! pieces with a fixed series of merge passes: escape sequences, quotes,
//! column references, parentheses, comments and session variables.

mod merge;
mod span;
mod splitters;
mod stream;
mod tokenizer;

pub use splitters::SplitterTable;
pub use tokenizer::{sql_from_bytes, Lexer};
