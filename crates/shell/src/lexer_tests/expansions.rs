// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable references and command substitutions.

use crate::lexer::Lexer;
use crate::token::TokenKind;

fn var(name: &str) -> TokenKind {
    TokenKind::Variable { name: name.into() }
}

fn subst(content: &str, backtick: bool) -> TokenKind {
    TokenKind::CommandSubstitution { content: content.into(), backtick }
}

lex_tests! {
    simple_variable: "$HOME" => [var("HOME")],
    braced_variable: "${HOME}" => [var("HOME")],
    variable_with_default: "${HOME:-/tmp}" => [var("HOME")],
    variable_with_nested_braces: "${A:-${B}}x" => [var("A"), TokenKind::Word("x".into())],
    special_status: "$?" => [var("?")],
    positional: "$1" => [var("1")],
    variable_after_word: "a$HOME" => [TokenKind::Word("a".into()), var("HOME")],
    word_after_variable: "$HOME/bin" => [var("HOME"), TokenKind::Word("/bin".into())],
    unterminated_braced: "${open" => [var("open")],
    lone_dollar: "$" => [TokenKind::Word("$".into())],
    dollar_before_space: "$ 5" => [TokenKind::Word("$".into()), TokenKind::Word("5".into())],
    dollar_before_punctuation: "$%" => [TokenKind::Word("$%".into())],
}

lex_tests! {
    dollar_substitution: "$(date)" => [subst("date", false)],
    substitution_with_args: "$(rm -rf /)" => [subst("rm -rf /", false)],
    substitution_nested_parens: "$(a (b))" => [subst("a (b)", false)],
    substitution_quoted_paren: "$(echo \")\")" => [subst("echo \")\"", false)],
    substitution_unterminated: "$(open" => [subst("open", false)],
    backtick_substitution: "`date`" => [subst("date", true)],
    backtick_escaped_backtick: r"`a\`b`" => [subst("a`b", true)],
    backtick_unterminated: "`open" => [subst("open", true)],
}

#[yare::parameterized(
    simple    = { "$(date)", "`date`" },
    with_args = { "$(echo hello world)", "`echo hello world`" },
)]
fn backtick_dollar_equivalence(dollar_input: &str, backtick_input: &str) {
    let dollar = Lexer::tokenize(dollar_input);
    let backtick = Lexer::tokenize(backtick_input);
    assert_eq!(dollar.len(), 1);
    assert_eq!(backtick.len(), 1);
    match (&dollar[0].kind, &backtick[0].kind) {
        (
            TokenKind::CommandSubstitution { content: c1, backtick: false },
            TokenKind::CommandSubstitution { content: c2, backtick: true },
        ) => assert_eq!(c1, c2),
        other => panic!("expected substitutions, got {other:?}"),
    }
}
