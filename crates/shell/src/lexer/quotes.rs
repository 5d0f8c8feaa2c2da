// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote handling (single and double quoted strings).

use super::Lexer;
use crate::token::{QuotedPart, Token, TokenKind};

impl Lexer<'_> {
    /// Single quotes keep everything literally up to the closing quote, or to
    /// end of input when unterminated.
    pub(super) fn lex_single_quote(&mut self, start: usize) -> Token {
        self.chars.next();
        let mut content = String::new();
        for (_, ch) in self.chars.by_ref() {
            if ch == '\'' {
                break;
            }
            content.push(ch);
        }
        Token::new(TokenKind::SingleQuoted(content), self.span_from(start))
    }

    /// Inside double quotes a backslash only escapes `"`, `\` and `$`; any
    /// other backslash is kept. `$` expansions become separate parts.
    pub(super) fn lex_double_quote(&mut self, start: usize) -> Token {
        self.chars.next();
        let mut parts: Vec<QuotedPart> = Vec::new();
        let mut current_literal = String::new();

        while let Some(ch) = self.peek_char() {
            match ch {
                '"' => {
                    self.chars.next();
                    break;
                }
                '\\' => {
                    self.chars.next();
                    match self.peek_char() {
                        Some(esc_ch @ ('"' | '\\' | '$')) => {
                            current_literal.push(esc_ch);
                            self.chars.next();
                        }
                        _ => current_literal.push('\\'),
                    }
                }
                '$' => {
                    let part = self.lex_quoted_dollar();
                    match part {
                        QuotedPart::Literal(text) => current_literal.push_str(&text),
                        expansion => {
                            if !current_literal.is_empty() {
                                parts.push(QuotedPart::Literal(std::mem::take(
                                    &mut current_literal,
                                )));
                            }
                            parts.push(expansion);
                        }
                    }
                }
                _ => {
                    current_literal.push(ch);
                    self.chars.next();
                }
            }
        }

        if !current_literal.is_empty() || parts.is_empty() {
            parts.push(QuotedPart::Literal(current_literal));
        }
        Token::new(TokenKind::DoubleQuoted(parts), self.span_from(start))
    }
}
