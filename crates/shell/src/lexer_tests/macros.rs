// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for shell lexer tests.
//!
//! These macros reduce boilerplate in lexer tests by providing
//! declarative test generation.

/// Generate tokenization tests.
///
/// # Usage
///
/// ```ignore
/// lex_tests! {
///     name: "input" => [token1, token2, ...],
/// }
/// ```
macro_rules! lex_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let tokens = Lexer::tokenize($input);
                let expected: Vec<TokenKind> = vec![$($token),*];
                let actual: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
                similar_asserts::assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate span accuracy tests.
///
/// # Usage
///
/// ```ignore
/// span_tests! {
///     name: "input" => [(start, end), ...],
/// }
/// ```
macro_rules! span_tests {
    ($($name:ident: $input:expr => [$(($start:expr, $end:expr)),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let tokens = Lexer::tokenize($input);
                let expected: Vec<(usize, usize)> = vec![$(($start, $end)),*];
                let actual: Vec<_> = tokens.iter().map(|t| (t.span.start, t.span.end)).collect();
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}

// Macros are exported via #[macro_use] in mod.rs
