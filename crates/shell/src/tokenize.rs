// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument extraction: joins adjacent literal fragments into arguments and
//! discards everything a shell would interpret.

use crate::lexer::Lexer;
use crate::token::{QuotedPart, Span, Token, TokenKind};

/// An argument being assembled from adjacent fragments.
#[derive(Default)]
struct Pending {
    text: String,
    /// At least one fragment was literal text (quoted strings count even
    /// when empty, so `""` yields an empty argument).
    literal: bool,
    /// A glob fragment taints the whole argument.
    glob: bool,
    /// Span of the most recent fragment.
    last: Span,
}

impl Pending {
    fn push_fragment(&mut self, kind: &TokenKind) {
        match kind {
            TokenKind::Word(text) | TokenKind::SingleQuoted(text) => {
                self.text.push_str(text);
                self.literal = true;
            }
            TokenKind::DoubleQuoted(parts) => {
                for part in parts {
                    if let QuotedPart::Literal(text) = part {
                        self.text.push_str(text);
                    }
                }
                self.literal = true;
            }
            TokenKind::Glob(text) => {
                self.text.push_str(text);
                self.glob = true;
            }
            // Expansions contribute nothing.
            _ => {}
        }
    }

    fn finish(self, args: &mut Vec<String>) {
        if self.literal && !self.glob {
            args.push(self.text);
        }
    }
}

/// Split one command line into literal arguments using shell quoting rules.
///
/// Whitespace separates arguments, quotes group text (`--tag "foo: bar"`
/// yields `foo: bar` as a single argument) and backslashes escape the next
/// character. Operators, redirections, comments, globs, variable references
/// and command substitutions are dropped without error; nothing is ever
/// expanded or executed. Use [`dropped`] to see what was removed.
pub fn tokenize(command_line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut pending: Option<Pending> = None;

    for Token { kind, span } in Lexer::tokenize(command_line) {
        if !kind.is_fragment() {
            if let Some(arg) = pending.take() {
                arg.finish(&mut args);
            }
            continue;
        }

        let mut arg = match pending.take() {
            Some(arg) if arg.last.touches(span) => arg,
            Some(arg) => {
                arg.finish(&mut args);
                Pending::default()
            }
            None => Pending::default(),
        };
        arg.push_fragment(&kind);
        arg.last = span;
        pending = Some(arg);
    }

    if let Some(arg) = pending {
        arg.finish(&mut args);
    }
    args
}

/// Every construct [`tokenize`] discards from `command_line`, in its
/// canonical shell form (see the `Display` impl of [`TokenKind`]).
///
/// Expansions inside double quotes are reported on their own; the quoted
/// literal text around them is kept by `tokenize` and not listed.
pub fn dropped(command_line: &str) -> Vec<String> {
    let mut out = Vec::new();
    for Token { kind, .. } in Lexer::tokenize(command_line) {
        match &kind {
            TokenKind::Word(_) | TokenKind::SingleQuoted(_) => {}
            TokenKind::DoubleQuoted(parts) => out.extend(
                parts
                    .iter()
                    .filter(|part| !matches!(part, QuotedPart::Literal(_)))
                    .map(QuotedPart::to_string),
            ),
            _ => out.push(kind.to_string()),
        }
    }
    out
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
