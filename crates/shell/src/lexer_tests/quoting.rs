// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote lexer tests: single quotes, double quotes, concatenation.

use crate::lexer::Lexer;

// =============================================================================
// Single Quote Tests
// =============================================================================

lex_tests! {
    single_quote_basic: "'hello'" => ["hello"],
    single_quote_with_spaces: "echo 'hello world'" => ["echo", "hello world"],
    single_quote_empty: "''" => [""],
    single_quote_empty_argument: "grep '' file" => ["grep", "", "file"],
    single_quote_preserves_dollar: "'$VAR'" => ["$VAR"],
    single_quote_preserves_backslash: r"'back\\slash'" => [r"back\\slash"],
    single_quote_preserves_double_quote: r#"'has "double" quotes'"# => [r#"has "double" quotes"#],
    single_quote_preserves_operators: "'a && b | c'" => ["a && b | c"],
    single_quote_escape_idiom: r"echo 'it'\''s'" => ["echo", "it's"],
}

// =============================================================================
// Double Quote Tests
// =============================================================================

lex_tests! {
    double_quote_basic: "\"hello\"" => ["hello"],
    double_quote_with_spaces: "git commit -m \"fix the bug\"" => ["git", "commit", "-m", "fix the bug"],
    double_quote_empty: "\"\"" => [""],
    double_quote_escaped_quote: r#""say \"hi\"""# => [r#"say "hi""#],
    double_quote_escaped_backslash: r#""a\\b""# => [r"a\b"],
    double_quote_escaped_dollar: r#""\$HOME""# => ["$HOME"],
    double_quote_keeps_other_backslashes: r#""a\nb""# => [r"a\nb"],
    double_quote_preserves_single_quote: r#""it's""# => ["it's"],
    double_quote_line_continuation: "\"a\\\nb\"" => ["ab"],
}

// =============================================================================
// Concatenation
// =============================================================================

lex_tests! {
    mixed_segments_join: r#"a'b'"c"d"# => ["abcd"],
    quoted_flag_value: "--name='John Doe'" => ["--name=John Doe"],
    quote_then_word: "'pre'fix" => ["prefix"],
}
