// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error cases.

use crate::lexer::{Lexer, LexerError};
use crate::span::Span;

lex_error_tests! {
    unterminated_single_quote: "echo 'abc" => LexerError::UnterminatedSingleQuote { .. },
    lone_single_quote: "'" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_double_quote: "echo \"abc" => LexerError::UnterminatedDoubleQuote { .. },
    escaped_closing_double_quote: r#"echo "abc\""# => LexerError::UnterminatedDoubleQuote { .. },
    trailing_backslash: "echo \\" => LexerError::TrailingBackslash { .. },
}

#[test]
fn unterminated_quote_span_runs_to_end_of_input() {
    let err = Lexer::tokenize("echo 'abc").unwrap_err();
    assert_eq!(err.span(), Span::new(5, 9));
}

#[test]
fn trailing_backslash_span_covers_backslash() {
    let err = Lexer::tokenize("ls \\").unwrap_err();
    assert_eq!(err.span(), Span::new(3, 4));
}

#[test]
fn apostrophe_in_natural_language_is_an_error() {
    // Typical natural-language input; callers fall back to whitespace splitting.
    let result = Lexer::tokenize("whats the time in tokyo, don't know");
    assert!(matches!(result, Err(LexerError::UnterminatedSingleQuote { .. })));
}
