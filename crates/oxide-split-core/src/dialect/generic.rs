//! Generic SQL dialect.

use super::Dialect;

/// Delimiters of the generic dialect.
///
/// `.` is not a delimiter, so `schema.table` stays one literal.
const GENERIC_SPLITTERS: &[&str] = &[
    "<=>", "\r\n", "!=", ">=", "<=", "<>", "<<", ">>", ":=", "\\", "&&", "||", "/*", "*/", "--",
    ">", "<", "|", "=", "^", "(", ")", "\t", "\n", "'", "\"", "`", ",", "@", " ", "+", "-", "*",
    "/", ";",
];

/// A generic SQL dialect covering the common operators of MySQL-like SQL.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn splitters(&self) -> &'static [&'static str] {
        GENERIC_SPLITTERS
    }
}
