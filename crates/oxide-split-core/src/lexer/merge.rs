//! Token-merging passes run after the raw split.
//!
//! Each pass walks the sequence once, re-grouping adjacent tokens under one
//! local rule. Passes only tombstone slots; the pipeline compacts the
//! sequence between passes.

use super::stream::TokenSequence;

/// A single merge pass.
pub type Pass = fn(&mut TokenSequence<'_>);

/// The merge passes, in the order they run.
pub const PASSES: [(&str, Pass); 6] = [
    ("escape_sequences", merge_escape_sequences),
    ("quotes", balance_quotes),
    ("column_references", merge_column_references),
    ("parentheses", balance_parentheses),
    ("comments", merge_comments),
    ("session_variables", merge_session_variables),
];

/// Joins every token ending in a backslash with the token after it.
///
/// The joined token is not looked at again, so `\` `\` `x` gives `\\` `x`.
pub fn merge_escape_sequences(seq: &mut TokenSequence<'_>) {
    let mut i = 0;
    while i < seq.len() {
        if seq.text(i).is_some_and(|token| token.ends_with('\\')) {
            if let Some(next) = seq.next_live(i) {
                seq.absorb(i, next);
                i = next;
            }
        }
        i += 1;
    }
}

fn is_quote(token: &str) -> bool {
    matches!(token, "'" | "\"" | "`")
}

/// Grows every standalone quote character until the same character closes
/// it. Unterminated quotes run to the end of the input.
pub fn balance_quotes(seq: &mut TokenSequence<'_>) {
    let mut i = 0;
    while i < seq.len() {
        if let Some(quote) = seq.text(i).filter(|token| is_quote(token)) {
            while let Some(next) = seq.next_live(i) {
                let closes = seq.text(next) == Some(quote);
                seq.absorb(i, next);
                if closes {
                    break;
                }
            }
        }
        i += 1;
    }
}

/// Returns true for numeric strings such as `12`, `-1.5`, `1.`, `.5` or
/// ` 3e-2 `.
fn is_numeric(token: &str) -> bool {
    const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\u{0b}', '\u{0c}'];

    fn digits(s: &str) -> bool {
        s.bytes().all(|b| b.is_ascii_digit())
    }

    let trimmed = token
        .trim_start_matches(WHITESPACE)
        .trim_end_matches(WHITESPACE);
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let (mantissa, exponent) = unsigned.find(['e', 'E']).map_or((unsigned, None), |pos| {
        (&unsigned[..pos], Some(&unsigned[pos + 1..]))
    });
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if (int.is_empty() && frac.is_empty()) || !digits(int) || !digits(frac) {
        return false;
    }

    exponent.map_or(true, |exp| {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        !exp.is_empty() && digits(exp)
    })
}

/// Joins dotted name parts.
///
/// A token starting with `.` takes in the token before it; a non-numeric
/// token ending with `.` takes in the token after it. Each side takes
/// exactly one token.
pub fn merge_column_references(seq: &mut TokenSequence<'_>) {
    for i in 0..seq.len() {
        let Some(token) = seq.text(i) else {
            continue;
        };

        if token.starts_with('.') {
            if let Some(prev) = seq.prev_live(i) {
                seq.absorb(i, prev);
            }
        }

        let Some(token) = seq.text(i) else {
            continue;
        };
        if token.ends_with('.') && !is_numeric(token) {
            if let Some(next) = seq.next_live(i) {
                seq.absorb(i, next);
            }
        }
    }
}

/// Grows every `(` until its matching `)`, counting nested groups.
/// Unterminated groups run to the end of the input.
pub fn balance_parentheses(seq: &mut TokenSequence<'_>) {
    let mut i = 0;
    while i < seq.len() {
        if seq.text(i) != Some("(") {
            i += 1;
            continue;
        }

        let mut depth = 1usize;
        while let Some(next) = seq.next_live(i) {
            match seq.text(next) {
                Some("(") => depth += 1,
                Some(")") => depth -= 1,
                _ => {}
            }
            seq.absorb(i, next);
            if depth == 0 {
                break;
            }
        }
        i += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comment {
    /// `--` up to, not including, the line break.
    Line,
    /// `/*` up to and including `*/`.
    Block,
}

fn is_line_terminator(token: &str) -> bool {
    matches!(token, "\n" | "\r\n")
}

/// Folds comments into one token each.
pub fn merge_comments(seq: &mut TokenSequence<'_>) {
    let mut open: Option<(usize, Comment)> = None;

    for i in 0..seq.len() {
        let Some(token) = seq.text(i) else {
            continue;
        };

        match open {
            Some((_, Comment::Line)) if is_line_terminator(token) => open = None,
            Some((start, Comment::Line)) => seq.absorb(start, i),
            Some((start, Comment::Block)) => {
                seq.absorb(start, i);
                if token == "*/" {
                    open = None;
                }
            }
            None => {
                open = match token {
                    "--" => Some((i, Comment::Line)),
                    "/*" => Some((i, Comment::Block)),
                    _ => None,
                };
            }
        }
    }
}

/// Joins `@` markers with the name that follows them.
///
/// A run of `@` tokens absorbs exactly one further token, whatever it is:
/// `@@version` stays whole, but so does `@ ` in `@ name`.
pub fn merge_session_variables(seq: &mut TokenSequence<'_>) {
    let mut marker: Option<usize> = None;

    for i in 0..seq.len() {
        let Some(token) = seq.text(i) else {
            continue;
        };

        if let Some(start) = marker {
            seq.absorb(start, i);
            if token != "@" {
                marker = None;
            }
        } else if token == "@" {
            marker = Some(i);
        }
    }
}
