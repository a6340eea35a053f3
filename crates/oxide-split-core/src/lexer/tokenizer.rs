//! SQL splitter implementation.

use tracing::{debug, trace};

use super::merge::PASSES;
use super::span::Span;
use super::splitters::SplitterTable;
use super::stream::TokenSequence;
use crate::error::{LexError, Result};

/// Reads SQL text out of raw bytes.
///
/// # Errors
///
/// Returns [`LexError::InvalidInput`] if the bytes are not valid UTF-8.
pub fn sql_from_bytes(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input).map_err(|_| LexError::invalid_input(String::from_utf8_lossy(input)))
}

/// A lexer that splits SQL text into tokens.
///
/// The lexer holds no state besides a reference to its splitter table, so a
/// single instance can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'t> {
    table: &'t SplitterTable,
}

impl Lexer<'static> {
    /// Creates a lexer for the generic dialect.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: SplitterTable::generic(),
        }
    }
}

impl Default for Lexer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Lexer<'t> {
    /// Creates a lexer that splits on the given table.
    #[must_use]
    pub const fn with_table(table: &'t SplitterTable) -> Self {
        Self { table }
    }

    /// Returns the splitter table in use.
    #[must_use]
    pub const fn table(&self) -> &'t SplitterTable {
        self.table
    }

    /// Returns the number of bytes probed at each scan position.
    #[must_use]
    pub const fn max_token_length(&self) -> usize {
        self.table.max_token_length()
    }

    /// Returns true if `token` is one of the delimiters.
    #[must_use]
    pub fn is_delimiter(&self, token: &str) -> bool {
        self.table.is_delimiter(token)
    }

    /// Splits the input on delimiters only, longest match first.
    ///
    /// Every byte of the input ends up in exactly one span.
    fn scan(self, input: &str) -> Vec<Span> {
        let max_len = self.max_token_length();
        let mut spans = Vec::new();
        let mut literal_start = 0;
        let mut pos = 0;

        'scan: while pos < input.len() {
            let widest = max_len.min(input.len() - pos);
            for width in (1..=widest).rev() {
                // Widths that cut a multi-byte character cannot match.
                let Some(candidate) = input.get(pos..pos + width) else {
                    continue;
                };
                if self.is_delimiter(candidate) {
                    if literal_start < pos {
                        spans.push(Span::new(literal_start, pos));
                    }
                    spans.push(Span::new(pos, pos + width));
                    pos += width;
                    literal_start = pos;
                    continue 'scan;
                }
            }
            pos += 1;
        }

        if literal_start < input.len() {
            spans.push(Span::new(literal_start, input.len()));
        }
        spans
    }

    /// Returns the raw split of the input, before any tokens are merged.
    #[must_use]
    pub fn split_raw<'a>(&self, input: &'a str) -> Vec<&'a str> {
        TokenSequence::new(input, self.scan(input)).into_tokens()
    }

    /// Splits SQL text into tokens.
    ///
    /// Quoted strings, parenthesized groups, comments, dotted names and
    /// session variables each come back as one token. Unbalanced quotes,
    /// parentheses and comments run to the end of the input. Concatenating
    /// the tokens gives back the input.
    #[must_use]
    pub fn split<'a>(&self, input: &'a str) -> Vec<&'a str> {
        let mut seq = TokenSequence::new(input, self.scan(input));
        let raw = seq.len();

        for (name, pass) in PASSES {
            pass(&mut seq);
            seq.compact();
            trace!(pass = name, tokens = seq.len(), "merge pass done");
        }

        debug!(bytes = input.len(), raw, tokens = seq.live(), "split SQL");
        seq.into_tokens()
    }

    /// Splits raw bytes, which must hold UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::InvalidInput`] if the bytes are not valid UTF-8.
    pub fn split_bytes<'a>(&self, input: &'a [u8]) -> Result<Vec<&'a str>> {
        Ok(self.split(sql_from_bytes(input)?))
    }

    /// Splits a JSON value, which must be a string.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::InvalidInput`] for any value other than a string.
    pub fn split_json(&self, value: &serde_json::Value) -> Result<Vec<String>> {
        match value {
            serde_json::Value::String(sql) => {
                Ok(self.split(sql).into_iter().map(String::from).collect())
            }
            other => Err(LexError::invalid_input(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;

    fn split(input: &str) -> Vec<&str> {
        Lexer::new().split(input)
    }

    fn split_raw(input: &str) -> Vec<&str> {
        Lexer::new().split_raw(input)
    }

    #[test]
    fn test_empty_input() {
        assert!(split("").is_empty());
        assert!(split_raw("").is_empty());
    }

    #[test]
    fn test_raw_split_simple_select() {
        assert_eq!(
            split_raw("SELECT id FROM t"),
            vec!["SELECT", " ", "id", " ", "FROM", " ", "t"]
        );
    }

    #[test]
    fn test_raw_split_longest_match() {
        assert_eq!(split_raw("a<=>b"), vec!["a", "<=>", "b"]);
        assert_eq!(split_raw("a<=b"), vec!["a", "<=", "b"]);
        assert_eq!(split_raw("a<b"), vec!["a", "<", "b"]);
        assert_eq!(split_raw("<<="), vec!["<<", "="]);
    }

    #[test]
    fn test_raw_split_crlf() {
        assert_eq!(split_raw("a\r\nb"), vec!["a", "\r\n", "b"]);
        assert_eq!(split_raw("a\rb"), vec!["a\rb"]);
    }

    #[test]
    fn test_raw_split_delimiter_at_end() {
        assert_eq!(split_raw("a;"), vec!["a", ";"]);
        assert_eq!(split_raw(";"), vec![";"]);
    }

    #[test]
    fn test_raw_split_multibyte() {
        assert_eq!(split_raw("é<=ü"), vec!["é", "<=", "ü"]);
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(
            split("SELECT a, b FROM t WHERE x >= 1;"),
            vec![
                "SELECT", " ", "a", ",", " ", "b", " ", "FROM", " ", "t", " ", "WHERE", " ", "x",
                " ", ">=", " ", "1", ";"
            ]
        );
    }

    #[test]
    fn test_split_all_passes() {
        assert_eq!(
            split("SELECT `t`.`c`, 'a\\'b', (1 + 2) -- done\n/* x */ @@v"),
            vec![
                "SELECT",
                " ",
                "`t`.`c`",
                ",",
                " ",
                "'a\\'b'",
                ",",
                " ",
                "(1 + 2)",
                " ",
                "-- done",
                "\n",
                "/* x */",
                " ",
                "@@v",
            ]
        );
    }

    #[test]
    fn test_max_token_length() {
        assert_eq!(Lexer::new().max_token_length(), 3);
    }

    #[test]
    fn test_table_is_generic() {
        let lexer = Lexer::new();
        assert!(std::ptr::eq(lexer.table(), SplitterTable::generic()));
        assert_eq!(lexer.table().entries().first(), Some(&"<=>"));
    }

    #[test]
    fn test_is_delimiter() {
        let lexer = Lexer::new();
        assert!(lexer.is_delimiter("!="));
        assert!(!lexer.is_delimiter("!"));
    }

    #[test]
    fn test_custom_table() {
        struct WordDialect;

        impl Dialect for WordDialect {
            fn name(&self) -> &'static str {
                "word"
            }

            fn splitters(&self) -> &'static [&'static str] {
                &[" ", "AND"]
            }
        }

        let table = SplitterTable::from_dialect(&WordDialect);
        let lexer = Lexer::with_table(&table);
        assert!(std::ptr::eq(lexer.table(), &table));
        assert_eq!(lexer.table().entries(), &[" ", "AND"]);
        assert_eq!(lexer.max_token_length(), 3);
        assert_eq!(lexer.split("aANDb c"), vec!["a", "AND", "b", " ", "c"]);
    }

    #[test]
    fn test_split_bytes() {
        let tokens = Lexer::new().split_bytes(b"a=1").unwrap();
        assert_eq!(tokens, vec!["a", "=", "1"]);
    }

    #[test]
    fn test_split_bytes_invalid_utf8() {
        let err = Lexer::new().split_bytes(&[b'a', 0xff]).unwrap_err();
        assert_eq!(err.code(), LexError::INVALID_INPUT_CODE);
    }

    #[test]
    fn test_sql_from_bytes() {
        assert_eq!(sql_from_bytes(b"SELECT 1"), Ok("SELECT 1"));
        assert_eq!(
            sql_from_bytes(&[0xc3, 0x28]),
            Err(LexError::invalid_input("\u{fffd}("))
        );
    }

    #[test]
    fn test_split_json_string() {
        let tokens = Lexer::new()
            .split_json(&serde_json::json!("a<>b"))
            .unwrap();
        assert_eq!(tokens, vec!["a", "<>", "b"]);
    }

    #[test]
    fn test_split_json_non_string() {
        let err = Lexer::new()
            .split_json(&serde_json::json!(42))
            .unwrap_err();
        assert_eq!(err, LexError::invalid_input("42"));
    }
}
