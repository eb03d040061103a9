// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Basic lexer tests: words, whitespace, escapes, spans.

use crate::lexer::Lexer;

lex_tests! {
    empty_input: "" => [],
    whitespace_only: "   \t  " => [],
    newlines_only: "\n\r\n" => [],
}

lex_tests! {
    single_word: "echo" => ["echo"],
    simple_words: "echo hello world" => ["echo", "hello", "world"],
    multiple_spaces: "ls   -la" => ["ls", "-la"],
    tabs_and_spaces: "cmd1\t  cmd2" => ["cmd1", "cmd2"],
    leading_and_trailing_space: "  git status  " => ["git", "status"],
    command_with_flags: "ls -la --color=auto" => ["ls", "-la", "--color=auto"],
    path_argument: "cat ./path/to/file.txt" => ["cat", "./path/to/file.txt"],
    operators_stay_in_words: "make && make install" => ["make", "&&", "make", "install"],
    dollar_is_literal: "echo $HOME" => ["echo", "$HOME"],
    hash_is_not_a_comment: "echo a#b #c" => ["echo", "a#b", "#c"],
    unicode_words: "echo héllo wörld" => ["echo", "héllo", "wörld"],
}

lex_tests! {
    escaped_space: r"touch my\ file" => ["touch", "my file"],
    escaped_quote: r"echo \'x\'" => ["echo", "'x'"],
    escaped_backslash: r"echo a\\b" => ["echo", r"a\b"],
    line_continuation_between_words: "echo a \\\nb" => ["echo", "a", "b"],
    line_continuation_inside_word: "ec\\\nho hi" => ["echo", "hi"],
    crlf_line_continuation: "echo a\\\r\nb" => ["echo", "ab"],
}

span_tests! {
    span_single_word: "echo" => [(0, 4)],
    span_two_words: "echo hello" => [(0, 4), (5, 10)],
    span_with_padding: "  ls  -l " => [(2, 4), (6, 8)],
    span_quoted_word: "echo 'a b'" => [(0, 4), (5, 10)],
}
