// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-style tokenizer for git-metrics scripts.
//!
//! Scripts are split into command lines with [`split_script`], and each line
//! is turned into an argument vector with [`tokenize`]. Only literal words
//! survive tokenization: operators, redirections, globs, comments, variable
//! references and command substitutions are recognized by the [`Lexer`] and
//! then discarded, so nothing in a script line can reach a sub-shell.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod lexer;
mod script;
mod span;
pub mod token;
mod tokenize;

pub use lexer::Lexer;
pub use script::split_script;
pub use span::Span;
pub use token::{QuotedPart, Token, TokenKind};
pub use tokenize::{dropped, tokenize};
