// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote lexer tests: single quotes, double quotes, escapes inside quotes
//! and unterminated quotes.

use crate::lexer::Lexer;
use crate::token::{QuotedPart, TokenKind};

/// Helper to create a DoubleQuoted token with a single literal part.
fn dq(s: &str) -> TokenKind {
    TokenKind::DoubleQuoted(vec![QuotedPart::literal(s)])
}

fn sq(s: &str) -> TokenKind {
    TokenKind::SingleQuoted(s.into())
}

lex_tests! {
    single_quote_basic: "'hello world'" => [sq("hello world")],
    single_quote_empty: "''" => [sq("")],
    single_quote_preserves_dollar: "'$VAR'" => [sq("$VAR")],
    single_quote_preserves_backslash: r"'back\slash'" => [sq(r"back\slash")],
    single_quote_preserves_operators: "'a && b | c'" => [sq("a && b | c")],
    single_quote_after_word: "cmd'arg'" => [TokenKind::Word("cmd".into()), sq("arg")],
    single_quote_unterminated: "'open ended" => [sq("open ended")],
}

lex_tests! {
    double_quote_basic: "\"foo: bar\"" => [dq("foo: bar")],
    double_quote_empty: "\"\"" => [dq("")],
    double_quote_escapes: r#""a \"b\" \\ \$""# => [dq(r#"a "b" \ $"#)],
    double_quote_keeps_other_backslashes: r#""a\nb""# => [dq(r"a\nb")],
    double_quote_lone_dollar: "\"cost $ 5\"" => [dq("cost $ 5")],
    double_quote_trailing_dollar: "\"5$\"" => [dq("5$")],
    double_quote_backtick_is_literal: "\"`date`\"" => [dq("`date`")],
    double_quote_single_quote_inside: "\"it's\"" => [dq("it's")],
    double_quote_operators: "\"a && b\"" => [dq("a && b")],
    double_quote_unterminated: "\"open ended" => [dq("open ended")],
}

lex_tests! {
    double_quote_variable: "\"a $HOME b\"" => [TokenKind::DoubleQuoted(vec![
        QuotedPart::literal("a "),
        QuotedPart::Variable { name: "HOME".into() },
        QuotedPart::literal(" b"),
    ])],
    double_quote_only_variable: "\"$HOME\"" => [TokenKind::DoubleQuoted(vec![
        QuotedPart::Variable { name: "HOME".into() },
    ])],
    double_quote_braced_variable: "\"${HOME}x\"" => [TokenKind::DoubleQuoted(vec![
        QuotedPart::Variable { name: "HOME".into() },
        QuotedPart::literal("x"),
    ])],
    double_quote_substitution: "\"$(date)\"" => [TokenKind::DoubleQuoted(vec![
        QuotedPart::CommandSubstitution { content: "date".into() },
    ])],
}
