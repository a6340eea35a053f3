//! # oxide-split-core
//!
//! Splits SQL text into tokens a grammar parser can consume, without knowing
//! any statement grammar.
//!
//! Splitting happens in two steps:
//! - A greedy scan cuts the input on a table of delimiters (operators,
//!   whitespace, quotes, comment markers, punctuation), longest match first.
//! - Merge passes re-join the pieces that belong together: escape sequences,
//!   quoted strings, dotted column references, parenthesized groups,
//!   comments and session variables.
//!
//! Tokens are slices of the input, and concatenating them gives the input
//! back. Malformed SQL is never rejected: an unterminated quote, group or
//! comment simply runs to the end of the input.
//!
//! ```rust
//! use oxide_split_core::Lexer;
//!
//! let tokens = Lexer::new().split("SELECT t.id FROM t WHERE (a <=> b) -- x");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         "SELECT", " ", "t.id", " ", "FROM", " ", "t", " ", "WHERE", " ", "(a <=> b)", " ",
//!         "-- x"
//!     ]
//! );
//! ```
//!
//! ## Untyped input
//!
//! Callers holding bytes or JSON go through the boundary entry points, which
//! reject non-textual input:
//!
//! ```rust
//! use oxide_split_core::{LexError, Lexer};
//!
//! let err = Lexer::new().split_json(&serde_json::json!(null)).unwrap_err();
//! assert_eq!(err.code(), LexError::INVALID_INPUT_CODE);
//! ```

pub mod dialect;
pub mod error;
pub mod lexer;
pub mod statement;

pub use dialect::{Dialect, GenericDialect};
pub use error::{LexError, Result};
pub use lexer::{sql_from_bytes, Lexer, SplitterTable};
pub use statement::{DqlStatement, StatementKind};
