// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell lexer for tokenizing script lines.
//!
//! The lexer recognizes the full surface of a shell command line so that
//! non-literal constructs can be identified and discarded later. It never
//! fails: an unterminated quote or substitution runs to the end of input and
//! a trailing backslash is kept as a literal character.

mod expansions;
mod operators;
mod quotes;

use crate::token::{Span, Token, TokenKind};

/// Which quote, if any, encloses the current character.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Quote tracking for `$(...)`, `<(...)` and `${...}` bodies, where brackets
/// inside quotes or after a backslash must not count toward balance.
struct QuoteState {
    quote: Quote,
    after_backslash: bool,
}

impl QuoteState {
    fn new() -> Self {
        Self { quote: Quote::None, after_backslash: false }
    }

    /// Feed one character; true means it is quoted or escaped and so cannot
    /// open or close a bracket.
    fn process(&mut self, ch: char) -> bool {
        if std::mem::take(&mut self.after_backslash) {
            return true;
        }
        match (self.quote, ch) {
            (Quote::Single, '\'') => self.quote = Quote::None,
            (Quote::Single, _) => return true,
            (_, '\\') => self.after_backslash = true,
            (Quote::None, '\'') => self.quote = Quote::Single,
            (Quote::None, '"') => self.quote = Quote::Double,
            (Quote::Double, '"') => self.quote = Quote::None,
            (Quote::Double, _) => return true,
            (Quote::None, _) => {}
        }
        false
    }
}

/// Shell lexer that tokenizes input into word fragments and operators.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// End offset of the last word fragment, used to tell whether `#` starts
    /// a comment or continues a word.
    last_fragment_end: Option<usize>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable(), last_fragment_end: None }
    }

    /// Lex all of `input`. Never fails.
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token() {
            lexer.last_fragment_end = token.kind.is_fragment().then_some(token.span.end);
            tokens.push(token);
        }
        tokens
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Byte offset of the next unread character.
    fn current_position(&self) -> usize {
        self.chars.clone().next().map(|(pos, _)| pos).unwrap_or(self.input.len())
    }

    /// Span from `start` to the current position.
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.current_position())
    }

    /// Skip a backslash-newline pair (LF or CRLF), if one is next.
    fn consume_line_continuation(&mut self) -> bool {
        let Some('\\') = self.peek_char() else {
            return false;
        };

        let mut lookahead = self.chars.clone();
        lookahead.next();

        match lookahead.next().map(|(_, c)| c) {
            Some('\n') => {
                self.chars.next();
                self.chars.next();
                true
            }
            Some('\r') if lookahead.peek().map(|(_, c)| *c) == Some('\n') => {
                self.chars.next();
                self.chars.next();
                self.chars.next();
                true
            }
            _ => false,
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let &(pos, ch) = self.chars.peek()?;

        let token = match ch {
            '#' if self.last_fragment_end != Some(pos) => self.lex_comment(pos),
            '&' => self.lex_ampersand(pos),
            '|' => self.lex_pipe(pos),
            ';' => self.lex_semi(pos),
            '(' => self.lex_single(pos, TokenKind::LParen),
            ')' => self.lex_single(pos, TokenKind::RParen),
            '>' => self.lex_redirect_out(pos, None),
            '<' => self.lex_redirect_in(pos, None),
            '$' => self.lex_dollar(pos),
            '`' => self.lex_backtick_substitution(pos),
            '\'' => self.lex_single_quote(pos),
            '"' => self.lex_double_quote(pos),
            _ => self.lex_word(pos, String::new()),
        };
        Some(token)
    }

    /// Skip whitespace characters (space, tab, newlines and line continuations).
    fn skip_whitespace(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\n' | '\r') => {
                    self.chars.next();
                }
                Some('\\') if self.consume_line_continuation() => {}
                _ => break,
            }
        }
    }

    /// Lex a comment through the end of the line.
    fn lex_comment(&mut self, start: usize) -> Token {
        self.chars.next(); // consume #
        let mut text = String::new();
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            text.push(ch);
            self.chars.next();
        }
        Token::new(TokenKind::Comment(text), self.span_from(start))
    }

    /// Lex an unquoted word, seeded with `word` (a literal `$` when called
    /// from the dollar lexer).
    ///
    /// Also handles file descriptor prefixes (e.g., `2>` becomes RedirectOut
    /// with fd=2). Words with an unescaped `*` or `?` become globs.
    fn lex_word(&mut self, start: usize, mut word: String) -> Token {
        let mut glob = false;

        while let Some(ch) = self.peek_char() {
            if self.consume_line_continuation() {
                continue;
            }
            if ch == '\\' {
                self.chars.next();
                match self.peek_char() {
                    // The escaped character is literal regardless of its
                    // special meaning, including glob metacharacters.
                    Some(next_ch) => {
                        word.push(next_ch);
                        self.chars.next();
                    }
                    None => word.push('\\'),
                }
                continue;
            }
            if Self::is_word_boundary(ch) {
                break;
            }
            if matches!(ch, '*' | '?') {
                glob = true;
            }
            word.push(ch);
            self.chars.next();
        }

        // Check if this word is a file descriptor followed by redirection
        if let Some(next_ch @ ('<' | '>')) = self.peek_char() {
            if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(fd) = word.parse::<u32>() {
                    return match next_ch {
                        '>' => self.lex_redirect_out(start, Some(fd)),
                        _ => self.lex_redirect_in(start, Some(fd)),
                    };
                }
            }
        }

        let span = self.span_from(start);
        if glob {
            Token::new(TokenKind::Glob(word), span)
        } else {
            Token::new(TokenKind::Word(word), span)
        }
    }

    /// Check if a character is a word boundary.
    #[inline]
    fn is_word_boundary(ch: char) -> bool {
        matches!(
            ch,
            ' ' | '\t'
                | '\n'
                | '\r'
                | '&'
                | '|'
                | ';'
                | '$'
                | '`'
                | '<'
                | '>'
                | '('
                | ')'
                | '\''
                | '"'
        )
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
