// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control operators and redirections.

use crate::lexer::Lexer;
use crate::token::TokenKind;

fn word(s: &str) -> TokenKind {
    TokenKind::Word(s.into())
}

lex_tests! {
    and: "a && b" => [word("a"), TokenKind::And, word("b")],
    and_without_spaces: "a&&b" => [word("a"), TokenKind::And, word("b")],
    or: "a||b" => [word("a"), TokenKind::Or, word("b")],
    pipe: "a | b" => [word("a"), TokenKind::Pipe, word("b")],
    pipe_both: "a |& b" => [word("a"), TokenKind::PipeBoth, word("b")],
    semi: "a; b" => [word("a"), TokenKind::Semi, word("b")],
    double_semi: "a;; b" => [word("a"), TokenKind::DoubleSemi, word("b")],
    background: "a &" => [word("a"), TokenKind::Ampersand],
    subshell: "(a)" => [TokenKind::LParen, word("a"), TokenKind::RParen],
    only_operators: "&& ; |" => [TokenKind::And, TokenKind::Semi, TokenKind::Pipe],
}

lex_tests! {
    redirect_out: "a > f" => [word("a"), TokenKind::RedirectOut { fd: None }, word("f")],
    redirect_clobber: "a >| f" => [word("a"), TokenKind::RedirectOut { fd: None }, word("f")],
    redirect_append: "a >> f" => [word("a"), TokenKind::RedirectAppend { fd: None }, word("f")],
    redirect_fd: "a 2> f" => [word("a"), TokenKind::RedirectOut { fd: Some(2) }, word("f")],
    redirect_fd_append: "a 2>>f" => [word("a"), TokenKind::RedirectAppend { fd: Some(2) }, word("f")],
    duplicate_fd: "a 2>&1" => [
        word("a"),
        TokenKind::DuplicateFd { fd: Some(2), output: true },
        word("1"),
    ],
    duplicate_input: "a <&3" => [
        word("a"),
        TokenKind::DuplicateFd { fd: None, output: false },
        word("3"),
    ],
    redirect_both: "a &> f" => [word("a"), TokenKind::RedirectBoth { append: false }, word("f")],
    redirect_both_append: "a &>> f" => [word("a"), TokenKind::RedirectBoth { append: true }, word("f")],
    redirect_in: "a < f" => [word("a"), TokenKind::RedirectIn { fd: None }, word("f")],
    heredoc: "a << EOF" => [word("a"), TokenKind::HereDoc { fd: None }, word("EOF")],
    heredoc_strip_tabs: "a <<-EOF" => [word("a"), TokenKind::HereDoc { fd: None }, word("EOF")],
    here_string: "a <<< s" => [word("a"), TokenKind::HereString { fd: None }, word("s")],
    process_substitution: "a <(b c) d" => [
        word("a"),
        TokenKind::ProcessSubstitution { content: "b c".into() },
        word("d"),
    ],
    digits_without_redirect: "add 42" => [word("add"), word("42")],
}
