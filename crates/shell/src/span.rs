// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for command lines.

/// A byte-offset range in the submitted line.
///
/// Uses byte offsets for efficient slicing with UTF-8 source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the spanned text from source.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Render a one-line diagnostic with a caret under the offending span.
///
/// ```text
/// unterminated single quote at position 5
///   echo 'abc
///        ^^^^
/// ```
pub fn diagnostic(source: &str, span: Span, message: &str) -> String {
    let start = span.start.min(source.len());
    let column = source.get(..start).map(|s| s.chars().count()).unwrap_or(0);
    let width = span.slice(source).chars().count().max(1);
    format!("{}\n  {}\n  {}{}", message, source, " ".repeat(column), "^".repeat(width))
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
