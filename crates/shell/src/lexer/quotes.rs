// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote handling (single and double quoted segments).

use super::{Lexer, LexerError};
use crate::span::Span;

impl Lexer<'_> {
    /// Single quotes: everything up to the next `'` is literal.
    pub(super) fn lex_single_quote(
        &mut self,
        start: usize,
        word: &mut String,
    ) -> Result<(), LexerError> {
        self.chars.next();
        for (_, ch) in self.chars.by_ref() {
            if ch == '\'' {
                return Ok(());
            }
            word.push(ch);
        }
        Err(LexerError::UnterminatedSingleQuote { span: Span::new(start, self.input.len()) })
    }

    /// Double quotes: content is literal except that a backslash escapes
    /// `\`, `"`, `$`, `` ` `` and newline. Before any other character the
    /// backslash is kept.
    pub(super) fn lex_double_quote(
        &mut self,
        start: usize,
        word: &mut String,
    ) -> Result<(), LexerError> {
        self.chars.next();
        while let Some((_, ch)) = self.chars.next() {
            match ch {
                '"' => return Ok(()),
                '\\' => match self.peek_char() {
                    Some('\n') => {
                        self.chars.next();
                    }
                    Some(next @ ('\\' | '"' | '$' | '`')) => {
                        word.push(next);
                        self.chars.next();
                    }
                    _ => word.push('\\'),
                },
                _ => word.push(ch),
            }
        }
        Err(LexerError::UnterminatedDoubleQuote { span: Span::new(start, self.input.len()) })
    }
}
