//! Unit tests for the evaluator driver and its handlers.

use super::*;
use crate::error::{ArithmeticError, ErrorKind, LexError, ParseError};
use crate::test_util::{assert_diagnostic, assert_diagnostics, assert_evaluates};
use rstest::{fixture, rstest};

#[fixture]
fn fine_division() -> Evaluator {
    Evaluator::new(EvalConfig {
        division_precision: -8,
        ..EvalConfig::default()
    })
}

#[rstest]
#[case("1 + 2 * 3", "7")]
#[case("(1 + 2) * 3", "9")]
#[case("8 - 4 - 2", "2")]
#[case("16 / 4 / 2", "2")]
#[case("2 ^ 3 ^ 2", "512")]
#[case("(2 ^ 3) ^ 2", "64")]
#[case("2 * 3 ^ 2", "18")]
#[case("-2 ^ 2", "4")]
#[case("-(2 ^ 2)", "-4")]
#[case("--3", "3")]
#[case("+-3", "-3")]
#[case("1 - -1", "2")]
fn precedence_and_associativity(#[case] src: &str, #[case] expected: &str) {
    assert_evaluates(src, expected);
}

#[rstest]
#[case("2(3+4)", "14")]
#[case("(1+1)(2+2)", "8")]
#[case("(2)3", "6")]
#[case("2 (3)", "6")]
#[case("6 / 2(3)", "1")]
#[case("2 ^ 2(3)", "12")]
fn implied_multiplication(#[case] src: &str, #[case] expected: &str) {
    assert_evaluates(src, expected);
}

#[rstest]
#[case("0.1 + 0.2", "0.3")]
#[case("1 / 3", "0.3333")]
#[case("2 / 3", "0.6667")]
#[case("-2 / 3", "-0.6667")]
#[case("1.5e3", "1500")]
#[case("1.5E-3 * 2", "0.003")]
#[case("2 ^ -2", "0.25")]
#[case("0 ^ 0", "1")]
fn decimal_results(#[case] src: &str, #[case] expected: &str) {
    assert_evaluates(src, expected);
}

#[rstest]
#[case("10 ^ 21", "1e21")]
#[case("10 ^ 20", "100000000000000000000")]
#[case("1.5 * 10 ^ 30", "1.5e30")]
#[case("-2 * 10 ^ 25", "-2e25")]
#[case("1e30000000", "1e30000000")]
#[case("1e3000000 * 2", "2e3000000")]
#[case("-1.5e3000000", "-1.5e3000000")]
fn large_results_switch_to_scientific(#[case] src: &str, #[case] expected: &str) {
    assert_evaluates(src, expected);
}

#[rstest]
fn configured_precision_applies_to_division(fine_division: Evaluator) {
    assert_eq!(fine_division.evaluate("1 / 3").as_deref(), Ok("0.33333333"));
    assert_eq!(fine_division.evaluate("3 ^ -1").as_deref(), Ok("0.33333333"));
}

#[rstest]
fn configured_threshold_applies_to_rendering() {
    let evaluator = Evaluator::new(EvalConfig {
        scientific_threshold: 3,
        ..EvalConfig::default()
    });
    assert_eq!(evaluator.evaluate("999").as_deref(), Ok("999"));
    assert_eq!(evaluator.evaluate("1000").as_deref(), Ok("1e3"));
}

#[rstest]
fn evaluate_decimal_returns_exact_value() {
    let value = Evaluator::default()
        .evaluate_decimal("10 ^ 30")
        .unwrap_or_else(|e| panic!("unexpected errors: {e:?}"));
    assert_eq!(value, Decimal::new(1.into(), 30));
}

#[rstest]
fn default_config_matches_constants() {
    let config = *Evaluator::default().config();
    assert_eq!(config.division_precision, -4);
    assert_eq!(config.scientific_threshold, 21);
}

#[rstest]
#[case("1/0", ArithmeticError::DivideByZero.into(), 1)]
#[case("1 + 2 / (1 - 1)", ArithmeticError::DivideByZero.into(), 6)]
#[case("5 ^ 2.5", ArithmeticError::NonIntegerExponent.into(), 2)]
#[case("07", LexError::LeadingZero.into(), 0)]
#[case("()", LexError::EmptyParens.into(), 0)]
#[case("(1+2", ParseError::MismatchedParen.into(), 0)]
#[case("1+2)", ParseError::MismatchedParen.into(), 3)]
#[case(")", ParseError::MismatchedParen.into(), 0)]
#[case("", ParseError::EmptyExpression.into(), 0)]
#[case("   ", ParseError::EmptyExpression.into(), 3)]
#[case("1 +", ParseError::IncompleteExpression.into(), 3)]
#[case("1 2", ParseError::MisplacedNumber.into(), 2)]
#[case("* 2", ParseError::UndefinedPrefix.into(), 0)]
#[case("1 + ^ 2", ParseError::UndefinedPrefix.into(), 4)]
#[case("NaN", LexError::NotANumber.into(), 0)]
#[case("1 + x", LexError::UnknownIdentifier.into(), 4)]
#[case("1 $", LexError::UnknownCharacter.into(), 2)]
#[case("1 e 2", LexError::MisplacedExponentSuffix.into(), 2)]
#[case(".5", LexError::MisplacedDecimal.into(), 0)]
#[case("1e99999999999999999999", LexError::ExponentOutOfRange.into(), 0)]
#[case("1e-99999999999999999999", LexError::ExponentOutOfRange.into(), 0)]
#[case("5 + 1e99999999999999999999", LexError::ExponentOutOfRange.into(), 4)]
#[case("1e9223372036854775807 * 1e1", ArithmeticError::ExponentOverflow.into(), 22)]
#[case("1e9223372036854775807 + 1e-9223372036854775808", ArithmeticError::ExponentOverflow.into(), 22)]
fn single_diagnostics(#[case] src: &str, #[case] kind: ErrorKind, #[case] column: usize) {
    assert_diagnostic(src, kind, column);
}

#[rstest]
fn errors_after_the_first_are_collected() {
    assert_diagnostics(
        "1 / 0 + $ + 07",
        &[
            (ErrorKind::from(ArithmeticError::DivideByZero), 2),
            (ErrorKind::from(LexError::UnknownCharacter), 8),
            (ErrorKind::from(LexError::LeadingZero), 12),
        ],
    );
}

#[rstest]
fn consumed_errors_are_not_repeated() {
    assert_diagnostics(
        "$ @",
        &[
            (ErrorKind::from(LexError::UnknownCharacter), 0),
            (ErrorKind::from(LexError::UnknownCharacter), 2),
        ],
    );
}

#[rstest]
fn every_leading_zero_is_reported() {
    assert_diagnostics(
        "007",
        &[
            (ErrorKind::from(LexError::LeadingZero), 0),
            (ErrorKind::from(LexError::LeadingZero), 1),
        ],
    );
}

#[rstest]
fn diagnostics_carry_span_length() {
    let errors = parse("1 + abc").err().unwrap_or_default();
    let first = errors.first().unwrap_or_else(|| panic!("no diagnostics"));
    assert_eq!((first.column, first.length), (4, 3));
    assert_eq!(first.message(), "unknown identifier");
}

#[rstest]
#[case("2 × 3", "6")]
#[case("7 ÷ 2", "3.5")]
#[case("7 \u{2212} 2", "5")]
fn unicode_operators(#[case] src: &str, #[case] expected: &str) {
    assert_evaluates(src, expected);
}

#[rstest]
fn columns_count_code_points() {
    assert_diagnostic("2 × 3 ÷ 0", ArithmeticError::DivideByZero, 6);
}
