//! Property tests over arbitrary input.

use oxide_split_core::Lexer;
use proptest::prelude::*;

/// Strings built mostly from characters the splitter cares about.
fn sql_like() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        proptest::sample::select(vec![
            "<=>", "<=", "<", "=", "!=", "\r\n", "\n", " ", "'", "\"", "`", "(", ")", "--",
            "/*", "*/", "@", "\\", ".", "1.", "a", "tbl", "é",
        ]),
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn split_is_lossless(input in any::<String>()) {
        let tokens = Lexer::new().split(&input);
        prop_assert_eq!(tokens.concat(), input);
    }

    #[test]
    fn split_is_lossless_on_sql_like_input(input in sql_like()) {
        let tokens = Lexer::new().split(&input);
        prop_assert_eq!(tokens.concat(), input);
    }

    #[test]
    fn raw_split_is_lossless(input in sql_like()) {
        let tokens = Lexer::new().split_raw(&input);
        prop_assert_eq!(tokens.concat(), input);
    }

    #[test]
    fn split_is_deterministic(input in sql_like()) {
        let lexer = Lexer::new();
        prop_assert_eq!(lexer.split(&input), lexer.split(&input));
    }

    #[test]
    fn tokens_are_never_empty(input in sql_like()) {
        prop_assert!(Lexer::new().split(&input).iter().all(|token| !token.is_empty()));
    }

    #[test]
    fn raw_tokens_never_hide_a_delimiter_prefix(input in sql_like()) {
        let lexer = Lexer::new();
        for token in lexer.split_raw(&input) {
            if !lexer.is_delimiter(token) {
                prop_assert!(
                    !token.char_indices().any(|(i, _)| {
                        (1..=lexer.max_token_length())
                            .filter_map(|w| token.get(i..i + w))
                            .any(|candidate| lexer.is_delimiter(candidate))
                    }),
                    "literal {:?} contains a delimiter",
                    token
                );
            }
        }
    }
}
