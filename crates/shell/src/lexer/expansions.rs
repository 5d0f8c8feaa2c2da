// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable references and command substitutions ($VAR, ${VAR}, $(...), backticks).

use super::{Lexer, QuoteState};
use crate::token::{self, QuotedPart, Token, TokenKind};

/// What follows a `$`.
enum Dollar {
    Variable(String),
    Substitution(String),
    /// A `$` with nothing expandable after it is plain text.
    Literal,
}

impl Lexer<'_> {
    /// Lex an unquoted `$` construct.
    pub(super) fn lex_dollar(&mut self, start: usize) -> Token {
        match self.read_dollar() {
            Dollar::Variable(name) => {
                Token::new(TokenKind::Variable { name }, self.span_from(start))
            }
            Dollar::Substitution(content) => Token::new(
                TokenKind::CommandSubstitution { content, backtick: false },
                self.span_from(start),
            ),
            Dollar::Literal => self.lex_word(start, String::from("$")),
        }
    }

    /// Lex a `$` construct inside double quotes.
    pub(super) fn lex_quoted_dollar(&mut self) -> QuotedPart {
        match self.read_dollar() {
            Dollar::Variable(name) => QuotedPart::Variable { name },
            Dollar::Substitution(content) => QuotedPart::CommandSubstitution { content },
            Dollar::Literal => QuotedPart::literal("$"),
        }
    }

    /// Consume a `$` and whatever expansion follows it.
    fn read_dollar(&mut self) -> Dollar {
        self.chars.next(); // consume $

        match self.peek_char() {
            Some('(') => {
                self.chars.next();
                Dollar::Substitution(self.read_balanced_content())
            }
            Some('{') => {
                self.chars.next();
                Dollar::Variable(self.read_braced_variable())
            }
            Some(ch) if token::is_special_variable(ch) => {
                self.chars.next();
                Dollar::Variable(ch.to_string())
            }
            Some(ch) if token::is_valid_variable_start(ch) => {
                Dollar::Variable(self.scan_variable_name())
            }
            _ => Dollar::Literal,
        }
    }

    fn scan_variable_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(ch) = self.peek_char() {
            if !token::is_valid_variable_char(ch) {
                break;
            }
            name.push(ch);
            self.chars.next();
        }
        name
    }

    /// Read `${...}` through its closing brace and return the variable name.
    ///
    /// Modifiers such as `:-default` are consumed with the reference; an
    /// unterminated reference runs to end of input.
    fn read_braced_variable(&mut self) -> String {
        let name = self.scan_variable_name();
        let mut depth = 1;
        let mut quotes = QuoteState::new();
        for (_, ch) in self.chars.by_ref() {
            if quotes.process(ch) {
                continue;
            }
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
        name
    }

    /// Read content after an opening `(` up to the matching `)`.
    ///
    /// Tracks all parentheses for balance and ignores those inside quotes, so
    /// `$(echo ")")` and `$(a (b))` are read whole. The closing paren is
    /// consumed but not included.
    pub(super) fn read_balanced_content(&mut self) -> String {
        let mut content = String::new();
        let mut depth = 1;
        let mut quotes = QuoteState::new();
        for (_, ch) in self.chars.by_ref() {
            if !quotes.process(ch) {
                match ch {
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
            }
            content.push(ch);
        }
        content
    }

    /// Lex a backtick command substitution (`` `cmd` ``).
    pub(super) fn lex_backtick_substitution(&mut self, start: usize) -> Token {
        self.chars.next(); // consume opening `

        let content = self.read_backtick_content();
        Token::new(
            TokenKind::CommandSubstitution { content, backtick: true },
            self.span_from(start),
        )
    }

    /// Read content until the closing backtick; `` \` `` does not close.
    fn read_backtick_content(&mut self) -> String {
        let mut content = String::new();
        while let Some((_, ch)) = self.chars.next() {
            match ch {
                '`' => break,
                '\\' => {
                    if let Some((_, escaped)) = self.chars.next() {
                        content.push(escaped);
                    }
                }
                _ => content.push(ch),
            }
        }
        content
    }
}
