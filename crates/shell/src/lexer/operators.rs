// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control operators and redirections (&, |, ;, (, ), <, >).

use super::Lexer;
use crate::token::{Token, TokenKind};

impl Lexer<'_> {
    /// Consume the next character if it equals `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    pub(super) fn lex_single(&mut self, start: usize, kind: TokenKind) -> Token {
        self.chars.next();
        Token::new(kind, self.span_from(start))
    }

    pub(super) fn lex_ampersand(&mut self, start: usize) -> Token {
        self.chars.next();

        let kind = if self.eat('&') {
            TokenKind::And
        } else if self.eat('>') {
            TokenKind::RedirectBoth { append: self.eat('>') }
        } else {
            TokenKind::Ampersand
        };
        Token::new(kind, self.span_from(start))
    }

    pub(super) fn lex_pipe(&mut self, start: usize) -> Token {
        self.chars.next();

        let kind = if self.eat('|') {
            TokenKind::Or
        } else if self.eat('&') {
            TokenKind::PipeBoth
        } else {
            TokenKind::Pipe
        };
        Token::new(kind, self.span_from(start))
    }

    pub(super) fn lex_semi(&mut self, start: usize) -> Token {
        self.chars.next();

        let kind = if self.eat(';') { TokenKind::DoubleSemi } else { TokenKind::Semi };
        Token::new(kind, self.span_from(start))
    }

    /// Lex `>`, `>>` or `>&`, with an optional fd prefix already consumed.
    pub(super) fn lex_redirect_out(&mut self, start: usize, fd: Option<u32>) -> Token {
        self.chars.next(); // consume >

        let kind = if self.eat('>') {
            TokenKind::RedirectAppend { fd }
        } else if self.eat('&') {
            TokenKind::DuplicateFd { fd, output: true }
        } else {
            // `>|` (noclobber override) is the same redirection
            self.eat('|');
            TokenKind::RedirectOut { fd }
        };
        Token::new(kind, self.span_from(start))
    }

    /// Lex `<`, `<<`, `<<<`, `<&` or `<(`, with an optional fd prefix already consumed.
    pub(super) fn lex_redirect_in(&mut self, start: usize, fd: Option<u32>) -> Token {
        self.chars.next(); // consume <

        let kind = if self.eat('<') {
            if self.eat('<') {
                TokenKind::HereString { fd }
            } else {
                // `<<-` strips tabs from the body; bodies are never read here
                self.eat('-');
                TokenKind::HereDoc { fd }
            }
        } else if self.eat('&') {
            TokenKind::DuplicateFd { fd, output: false }
        } else if fd.is_none() && self.eat('(') {
            TokenKind::ProcessSubstitution { content: self.read_balanced_content() }
        } else {
            TokenKind::RedirectIn { fd }
        };
        Token::new(kind, self.span_from(start))
    }
}
