//! Shared test utilities for integration tests.
//!
//! These helpers assert over evaluation results and token dumps. They mirror
//! a subset of the `decicalc::test_util` module without requiring the
//! `test-support` feature, enabling integration tests to compile against the
//! published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use decicalc::{Diagnostic, ErrorKind, SyntaxKind, Token, parse, scan};

/// Evaluate `src`, panicking with the rendered diagnostics on failure.
#[track_caller]
pub fn eval_ok(src: &str) -> String {
    parse(src).unwrap_or_else(|errors| {
        let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
        panic!("evaluating {src:?} failed: {}", rendered.join("; "))
    })
}

/// Evaluate `src`, panicking if it succeeds.
#[track_caller]
pub fn eval_err(src: &str) -> Vec<Diagnostic> {
    match parse(src) {
        Ok(value) => panic!("expected {src:?} to fail, got {value}"),
        Err(errors) => errors,
    }
}

/// `(kind, column, length)` triples for every diagnostic of `src`.
#[track_caller]
pub fn diagnostic_triples(src: &str) -> Vec<(ErrorKind, usize, usize)> {
    eval_err(src)
        .iter()
        .map(|d| (d.kind, d.column, d.length))
        .collect()
}

/// Kinds of the scanned tokens, `T_EOF` included.
pub fn kinds(src: &str) -> Vec<SyntaxKind> {
    scan(src).iter().map(|t| t.kind).collect()
}

/// Scanned tokens without the trailing `T_EOF`.
pub fn tokens(src: &str) -> Vec<Token> {
    let mut tokens = scan(src);
    tokens.pop();
    tokens
}
