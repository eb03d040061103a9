// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for lexer invariants.

use crate::lexer::Lexer;
use proptest::prelude::*;

/// Strategy for plain words (no quotes, escapes or blanks).
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./=:-]{1,12}".prop_map(String::from)
}

/// Strategy for arbitrary argument text, including blanks and quotes.
fn arg_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \t'\"$`\\\\]{0,16}".prop_map(String::from)
}

/// Quote an argument the way a careful user would: single quotes, with
/// embedded single quotes written as `'\''`.
fn single_quote(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', r"'\''"))
}

proptest! {
    /// Invariant: blank-separated plain words split back into the same words.
    #[test]
    fn plain_words_split_on_blanks(words in prop::collection::vec(word_strategy(), 0..8)) {
        let input = words.join(" ");
        let tokens = Lexer::tokenize(&input).unwrap();
        let actual: Vec<String> = tokens.into_iter().map(|t| t.text).collect();
        prop_assert_eq!(actual, words);
    }

    /// Invariant: a single-quoted argument is recovered verbatim.
    #[test]
    fn single_quoted_argument_is_verbatim(arg in arg_strategy()) {
        let input = format!("printf %s {}", single_quote(&arg));
        let tokens = Lexer::tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(&tokens[2].text, &arg);
    }

    /// Invariant: token spans are ordered and within the input.
    #[test]
    fn spans_are_ordered(words in prop::collection::vec(word_strategy(), 1..8)) {
        let input = words.join("  ");
        let tokens = Lexer::tokenize(&input).unwrap();
        let mut last_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end <= input.len());
            last_end = token.span.end;
        }
    }
}
