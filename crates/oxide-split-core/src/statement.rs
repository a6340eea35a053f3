//! Statement classification on top of the lexer.

use serde::{Deserialize, Serialize};

use crate::lexer::Lexer;

/// Kinds of SQL statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum StatementKind {
    /// Data query language (`SELECT` and friends).
    DataQuery,
}

impl StatementKind {
    /// Returns true if statements of this kind read data.
    #[must_use]
    pub const fn is_query(self) -> bool {
        matches!(self, Self::DataQuery)
    }
}

/// A data query language statement.
///
/// Wraps the raw query together with the lexer used to split it.
#[derive(Debug, Clone)]
pub struct DqlStatement<'t> {
    query: String,
    lexer: Lexer<'t>,
}

impl DqlStatement<'static> {
    /// Creates a statement split with the generic dialect.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self::with_lexer(query, Lexer::new())
    }
}

impl<'t> DqlStatement<'t> {
    /// Creates a statement split with the given lexer.
    #[must_use]
    pub fn with_lexer(query: impl Into<String>, lexer: Lexer<'t>) -> Self {
        Self {
            query: query.into(),
            lexer,
        }
    }

    /// Returns the raw query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the kind of the statement.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        StatementKind::DataQuery
    }

    /// Returns the lexer used for splitting.
    #[must_use]
    pub const fn lexer(&self) -> &Lexer<'t> {
        &self.lexer
    }

    /// Splits the query into tokens.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        self.lexer.split(&self.query)
    }

    /// Returns true if the statement is a `SELECT`.
    ///
    /// Not detected yet: always false.
    #[must_use]
    pub const fn is_select(&self) -> bool {
        false
    }

    /// Returns true if the statement reads data.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        self.kind().is_query()
    }
}
