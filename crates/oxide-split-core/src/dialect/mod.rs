//! SQL Dialect support.
//!
//! Dialects differ in which operators and punctuation they treat as token
//! boundaries. A [`Dialect`] supplies that list; the lexer builds a
//! [`SplitterTable`](crate::lexer::SplitterTable) from it.

mod generic;

pub use generic::GenericDialect;

/// Trait for SQL dialect-specific splitting behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the delimiter strings recognized as standalone tokens.
    ///
    /// Order is kept for display only; at each scan position the longest
    /// matching entry wins regardless of where it appears in the list.
    fn splitters(&self) -> &'static [&'static str];
}
