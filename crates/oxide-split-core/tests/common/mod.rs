#![allow(dead_code)]

use oxide_split_core::Lexer;

pub fn split(sql: &str) -> Vec<&str> {
    let tokens = Lexer::new().split(sql);
    assert_lossless(sql, &tokens);
    tokens
}

pub fn split_raw(sql: &str) -> Vec<&str> {
    let tokens = Lexer::new().split_raw(sql);
    assert_lossless(sql, &tokens);
    tokens
}

/// Asserts that the tokens concatenate back to the input.
pub fn assert_lossless(sql: &str, tokens: &[&str]) {
    let joined = tokens.concat();
    assert_eq!(
        joined, sql,
        "Tokens do not rebuild the input.\n  Input:  {sql:?}\n  Tokens: {tokens:?}"
    );
}

/// Returns the tokens that are not pure whitespace.
pub fn significant(sql: &str) -> Vec<&str> {
    split(sql)
        .into_iter()
        .filter(|token| !token.trim().is_empty())
        .collect()
}
