// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for the shell lexer.

/// A byte-offset range in the source text.
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

    /// Returns true if `next` begins exactly where this span ends, with no
    /// whitespace in between.
    #[inline]
    pub fn touches(&self, next: Span) -> bool {
        self.end == next.start
    }
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
