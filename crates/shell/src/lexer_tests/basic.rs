// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Words, escapes, globs and comments.

use crate::lexer::Lexer;
use crate::token::{QuotedPart, TokenKind};

fn word(s: &str) -> TokenKind {
    TokenKind::Word(s.into())
}

lex_tests! {
    empty_input: "" => [],
    whitespace_only: "  \t " => [],
    single_word: "show" => [word("show")],
    three_words: "add foo 12.3" => [word("add"), word("foo"), word("12.3")],
    tab_separated: "add\tfoo" => [word("add"), word("foo")],
    repeated_spaces: "add    foo" => [word("add"), word("foo")],
    newline_separates: "add\nfoo" => [word("add"), word("foo")],
    flag_with_value: "--tag=v1" => [word("--tag=v1")],
    braces_are_literal: "{a,b}" => [word("{a,b}")],
    unicode_word: "名前 🦀" => [word("名前"), word("🦀")],
}

// =============================================================================
// Backslash escapes
// =============================================================================

lex_tests! {
    escaped_space: r"a\ b" => [word("a b")],
    escaped_operators: r"a\&\&b" => [word("a&&b")],
    escaped_semicolon: r"show\;" => [word("show;")],
    escaped_quote: r#"\"quoted\""# => [word("\"quoted\"")],
    escaped_backslash: r"a\\b" => [word(r"a\b")],
    escaped_dollar: r"\$HOME" => [word("$HOME")],
    trailing_backslash: "a\\" => [word("a\\")],
    line_continuation: "add \\\nfoo" => [word("add"), word("foo")],
    line_continuation_crlf: "add \\\r\nfoo" => [word("add"), word("foo")],
    continuation_inside_word: "ab\\\ncd" => [word("abcd")],
}

// =============================================================================
// Globs
// =============================================================================

lex_tests! {
    star_glob: "*.txt" => [TokenKind::Glob("*.txt".into())],
    question_glob: "file?" => [TokenKind::Glob("file?".into())],
    glob_after_word: "show *" => [word("show"), TokenKind::Glob("*".into())],
    escaped_star_is_literal: r"\*" => [word("*")],
    escaped_question_is_literal: r"why\?" => [word("why?")],
    bracket_is_literal: "[a]" => [word("[a]")],
}

// =============================================================================
// Comments
// =============================================================================

lex_tests! {
    whole_line_comment: "# all of it" => [TokenKind::Comment(" all of it".into())],
    trailing_comment: "show # note" => [word("show"), TokenKind::Comment(" note".into())],
    comment_swallows_operators: "a #b && c" => [word("a"), TokenKind::Comment("b && c".into())],
    hash_inside_word: "a#b" => [word("a#b")],
    hash_after_quote: "\"a\"#b" => [
        TokenKind::DoubleQuoted(vec![QuotedPart::literal("a")]),
        word("#b"),
    ],
    comment_ends_at_newline: "a # c\nb" => [
        word("a"),
        TokenKind::Comment(" c".into()),
        word("b"),
    ],
}

span_tests! {
    span_two_words: "add foo" => [(0, 3), (4, 7)],
    span_operator: "a && b" => [(0, 1), (2, 4), (5, 6)],
    span_adjacent_quote: "'x'y" => [(0, 3), (3, 4)],
    span_fd_redirect: "a 2> f" => [(0, 1), (2, 4), (5, 6)],
    span_comment: "a # c" => [(0, 1), (2, 5)],
    span_variable: "a$HOME" => [(0, 1), (1, 6)],
    span_unicode: "名 x" => [(0, 3), (4, 5)],
}
