// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line lexer: POSIX word splitting with quote removal.
//!
//! Only the rules needed to find the program name and its arguments are
//! implemented. Operators, expansions and redirections are left for the
//! capture shell to interpret from the raw text.

mod quotes;

use crate::span::Span;
use crate::token::Token;

pub use crate::error::LexerError;

/// Lexer that splits a command line into words.
pub struct Lexer<'a> {
    /// The input string being lexed.
    input: &'a str,
    /// Peekable iterator over character indices.
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable() }
    }

    /// Tokenize the entire input and return its words.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer::new(input);
        // Pre-allocate based on heuristic: ~1 token per 4 characters
        let mut tokens = Vec::with_capacity(input.len() / 4 + 1);
        while let Some(token) = lexer.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Peek at the next character without consuming it.
    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Get the current position in the input.
    fn current_position(&mut self) -> usize {
        self.chars.peek().map(|(pos, _)| *pos).unwrap_or(self.input.len())
    }

    /// Try to consume a line continuation (backslash followed by newline).
    ///
    /// Returns true if a line continuation was consumed.
    fn consume_line_continuation(&mut self) -> bool {
        let Some('\\') = self.peek_char() else {
            return false;
        };

        let mut lookahead = self.chars.clone();
        lookahead.next(); // skip backslash

        match lookahead.peek().map(|(_, c)| *c) {
            Some('\n') => {
                self.chars.next();
                self.chars.next();
                true
            }
            Some('\r') => {
                lookahead.next();
                if lookahead.peek().map(|(_, c)| *c) == Some('\n') {
                    self.chars.next();
                    self.chars.next();
                    self.chars.next();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Get the next word, or None if at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        self.skip_whitespace();
        let Some(&(pos, _)) = self.chars.peek() else {
            return Ok(None);
        };
        self.lex_word(pos).map(Some)
    }

    /// Skip blanks, newlines and line continuations between words.
    fn skip_whitespace(&mut self) {
        loop {
            match self.peek_char() {
                Some(ch) if Self::is_blank(ch) => {
                    self.chars.next();
                }
                Some('\\') if self.consume_line_continuation() => {}
                _ => break,
            }
        }
    }

    /// Lex one word, concatenating adjacent unquoted and quoted segments.
    ///
    /// `a'b'"c"` is the single word `abc`; `''` is an empty word.
    fn lex_word(&mut self, start: usize) -> Result<Token, LexerError> {
        let mut word = String::new();

        while let Some(&(pos, ch)) = self.chars.peek() {
            if self.consume_line_continuation() {
                continue;
            }
            match ch {
                _ if Self::is_blank(ch) => break,
                '\'' => self.lex_single_quote(pos, &mut word)?,
                '"' => self.lex_double_quote(pos, &mut word)?,
                '\\' => {
                    self.chars.next();
                    let Some((_, escaped)) = self.chars.next() else {
                        return Err(LexerError::TrailingBackslash {
                            span: Span::new(pos, pos + 1),
                        });
                    };
                    word.push(escaped);
                }
                _ => {
                    word.push(ch);
                    self.chars.next();
                }
            }
        }

        let end = self.current_position();
        Ok(Token::new(word, Span::new(start, end)))
    }

    #[inline]
    fn is_blank(ch: char) -> bool {
        matches!(ch, ' ' | '\t' | '\n' | '\r')
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
