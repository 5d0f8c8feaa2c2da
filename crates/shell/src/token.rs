// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types for the shell lexer.

use std::fmt;

pub use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Unquoted literal text with backslash escapes already removed.
    Word(String),
    /// Single-quoted: literal content, no escape processing.
    SingleQuoted(String),
    /// Double-quoted: `\"`, `\\` and `\$` are unescaped; `$` expansions are
    /// kept as separate parts so they can be discarded.
    DoubleQuoted(Vec<QuotedPart>),
    /// Unquoted word containing an unescaped `*` or `?`.
    Glob(String),
    /// `$NAME`, `${NAME}` or `${NAME:-default}`.
    Variable {
        name: String,
    },
    /// `$(cmd)` or `` `cmd` ``.
    CommandSubstitution {
        content: String,
        backtick: bool,
    },
    /// `# ...` through end of line.
    Comment(String),
    /// `&&`
    And,
    /// `||`
    Or,
    /// `|`
    Pipe,
    /// `|&`
    PipeBoth,
    /// `;`
    Semi,
    /// `;;`
    DoubleSemi,
    /// `&`
    Ampersand,
    /// `(`
    LParen,
    /// `)`
    RParen,

    /// `>` or `n>`
    RedirectOut {
        fd: Option<u32>,
    },

    /// `>>` or `n>>`
    RedirectAppend {
        fd: Option<u32>,
    },

    /// `<` or `n<`
    RedirectIn {
        fd: Option<u32>,
    },

    /// `<<`
    HereDoc {
        fd: Option<u32>,
    },

    /// `<<<`
    HereString {
        fd: Option<u32>,
    },

    /// `&>` or `&>>`
    RedirectBoth {
        append: bool,
    },

    /// `n>&` or `n<&`
    DuplicateFd {
        fd: Option<u32>,
        /// True for output (`>&`), false for input (`<&`).
        output: bool,
    },

    /// `<(cmd)`
    ProcessSubstitution {
        content: String,
    },
}

/// A piece of a double-quoted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotedPart {
    Literal(String),
    Variable { name: String },
    CommandSubstitution { content: String },
}

impl QuotedPart {
    pub fn literal(s: impl Into<String>) -> Self {
        QuotedPart::Literal(s.into())
    }
}

impl fmt::Display for QuotedPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuotedPart::Literal(text) => f.write_str(text),
            QuotedPart::Variable { name } => write!(f, "${name}"),
            QuotedPart::CommandSubstitution { content } => write!(f, "$({content})"),
        }
    }
}

/// Renders a token in its canonical shell form, e.g. `2>>`, `` `date` ``,
/// `<(ls)`. Escapes and `${...}` modifiers are not reproduced.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = |fd: &Option<u32>| fd.map(|n| n.to_string()).unwrap_or_default();
        match self {
            TokenKind::Word(s) | TokenKind::Glob(s) => f.write_str(s),
            TokenKind::SingleQuoted(s) => write!(f, "'{s}'"),
            TokenKind::DoubleQuoted(parts) => {
                f.write_str("\"")?;
                for part in parts {
                    write!(f, "{part}")?;
                }
                f.write_str("\"")
            }
            TokenKind::Variable { name } => write!(f, "${name}"),
            TokenKind::CommandSubstitution { content, backtick: true } => write!(f, "`{content}`"),
            TokenKind::CommandSubstitution { content, backtick: false } => {
                write!(f, "$({content})")
            }
            TokenKind::Comment(text) => write!(f, "#{text}"),
            TokenKind::And => f.write_str("&&"),
            TokenKind::Or => f.write_str("||"),
            TokenKind::Pipe => f.write_str("|"),
            TokenKind::PipeBoth => f.write_str("|&"),
            TokenKind::Semi => f.write_str(";"),
            TokenKind::DoubleSemi => f.write_str(";;"),
            TokenKind::Ampersand => f.write_str("&"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::RedirectOut { fd: n } => write!(f, "{}>", prefix(n)),
            TokenKind::RedirectAppend { fd: n } => write!(f, "{}>>", prefix(n)),
            TokenKind::RedirectIn { fd: n } => write!(f, "{}<", prefix(n)),
            TokenKind::HereDoc { fd: n } => write!(f, "{}<<", prefix(n)),
            TokenKind::HereString { fd: n } => write!(f, "{}<<<", prefix(n)),
            TokenKind::RedirectBoth { append: true } => f.write_str("&>>"),
            TokenKind::RedirectBoth { append: false } => f.write_str("&>"),
            TokenKind::DuplicateFd { fd: n, output: true } => write!(f, "{}>&", prefix(n)),
            TokenKind::DuplicateFd { fd: n, output: false } => write!(f, "{}<&", prefix(n)),
            TokenKind::ProcessSubstitution { content } => write!(f, "<({content})"),
        }
    }
}

impl TokenKind {
    /// Word fragments join with neighbouring fragments when no whitespace
    /// separates them; everything else ends the current argument.
    pub fn is_fragment(&self) -> bool {
        matches!(
            self,
            TokenKind::Word(_)
                | TokenKind::SingleQuoted(_)
                | TokenKind::DoubleQuoted(_)
                | TokenKind::Glob(_)
                | TokenKind::Variable { .. }
                | TokenKind::CommandSubstitution { .. }
        )
    }
}

pub(crate) fn is_special_variable(ch: char) -> bool {
    matches!(ch, '?' | '$' | '#' | '!' | '@' | '*' | '-') || ch.is_ascii_digit()
}

pub(crate) fn is_valid_variable_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub(crate) fn is_valid_variable_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
