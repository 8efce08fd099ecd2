//! Assertion helpers for evaluation results in tests.
//!
//! These functions reduce boilerplate when checking that an expression
//! evaluates to a given string or fails with diagnostics at precise columns.

use crate::{Diagnostic, ErrorKind, SyntaxKind, parse, scan};

/// Kinds of the tokens scanned from `src`, `T_EOF` included.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use decicalc::SyntaxKind;
/// use decicalc::test_util::token_kinds;
/// assert_eq!(token_kinds("1").last(), Some(&SyntaxKind::T_EOF));
/// # }
/// ```
#[must_use]
pub fn token_kinds(src: &str) -> Vec<SyntaxKind> {
    scan(src).iter().map(|t| t.kind).collect()
}

/// Assert that `src` evaluates to `expected` with the default configuration.
///
/// # Panics
/// Panics if evaluation fails or yields a different string.
#[track_caller]
pub fn assert_evaluates(src: &str, expected: &str) {
    match parse(src) {
        Ok(value) => assert_eq!(value, expected, "evaluating {src:?}"),
        Err(errors) => panic!("evaluating {src:?} failed: {}", render(&errors)),
    }
}

/// Assert that evaluating `src` fails and return the diagnostics.
///
/// # Panics
/// Panics if evaluation succeeds.
#[track_caller]
#[must_use]
pub fn evaluation_errors(src: &str) -> Vec<Diagnostic> {
    match parse(src) {
        Ok(value) => panic!("expected {src:?} to fail, got {value}"),
        Err(errors) => errors,
    }
}

/// Assert that `src` fails with exactly one diagnostic of `kind` at
/// `column`.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use decicalc::ArithmeticError;
/// use decicalc::test_util::assert_diagnostic;
/// assert_diagnostic("1/0", ArithmeticError::DivideByZero, 1);
/// # }
/// ```
///
/// # Panics
/// Panics if evaluation succeeds or the diagnostics differ.
#[track_caller]
pub fn assert_diagnostic(src: &str, kind: impl Into<ErrorKind>, column: usize) {
    let kind = kind.into();
    let errors = evaluation_errors(src);
    assert_eq!(
        errors.len(),
        1,
        "expected one diagnostic for {src:?}, got {}",
        render(&errors)
    );
    let Some(error) = errors.first() else {
        unreachable!("length checked above");
    };
    assert_eq!(error.kind, kind, "diagnostic kind for {src:?}");
    assert_eq!(error.column, column, "diagnostic column for {src:?}");
}

/// Assert the `(kind, column)` pairs of every diagnostic for `src`, in order.
///
/// # Panics
/// Panics if evaluation succeeds or the diagnostics differ.
#[track_caller]
pub fn assert_diagnostics(src: &str, expected: &[(ErrorKind, usize)]) {
    let errors = evaluation_errors(src);
    let actual: Vec<(ErrorKind, usize)> = errors.iter().map(|e| (e.kind, e.column)).collect();
    assert_eq!(actual, expected, "diagnostics for {src:?}");
}

fn render(errors: &[Diagnostic]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
