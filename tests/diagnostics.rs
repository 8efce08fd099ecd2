//! Diagnostics reported for malformed expressions and failed arithmetic.

mod test_util;

use decicalc::{ArithmeticError, ErrorKind, LexError, ParseError};
use rstest::rstest;
use test_util::{diagnostic_triples, eval_err};

fn lex(error: LexError) -> ErrorKind {
    error.into()
}

fn syntax(error: ParseError) -> ErrorKind {
    error.into()
}

fn arith(error: ArithmeticError) -> ErrorKind {
    error.into()
}

#[rstest]
#[case("1/0", vec![(arith(ArithmeticError::DivideByZero), 1, 1)])]
#[case("2 ^ 0.5", vec![(arith(ArithmeticError::NonIntegerExponent), 2, 1)])]
#[case("07", vec![(lex(LexError::LeadingZero), 0, 1)])]
#[case("()", vec![(lex(LexError::EmptyParens), 0, 2)])]
#[case("( )", vec![(lex(LexError::EmptyParens), 0, 3)])]
#[case("(1+2", vec![(syntax(ParseError::MismatchedParen), 0, 1)])]
#[case("1+2)", vec![(syntax(ParseError::MismatchedParen), 3, 1)])]
#[case("", vec![(syntax(ParseError::EmptyExpression), 0, 0)])]
#[case("2 *", vec![(syntax(ParseError::IncompleteExpression), 3, 0)])]
#[case("(3) 4 5", vec![(syntax(ParseError::MisplacedNumber), 6, 1)])]
#[case("Infinity", vec![(lex(LexError::NotANumber), 0, 8)])]
#[case("1 + 1.", vec![(lex(LexError::MisplacedDecimal), 5, 1)])]
#[case("4 # 2", vec![(lex(LexError::UnknownCharacter), 2, 1)])]
#[case("1e", vec![(lex(LexError::MisplacedExponentSuffix), 1, 1)])]
#[case("1e99999999999999999999", vec![(lex(LexError::ExponentOutOfRange), 0, 22)])]
#[case("5 + 1e99999999999999999999", vec![(lex(LexError::ExponentOutOfRange), 4, 22)])]
#[case("2(1e-99999999999999999999)", vec![(lex(LexError::ExponentOutOfRange), 2, 23)])]
#[case("1e9223372036854775807 * 1e1", vec![(arith(ArithmeticError::ExponentOverflow), 22, 1)])]
fn reported_diagnostics(#[case] src: &str, #[case] expected: Vec<(ErrorKind, usize, usize)>) {
    assert_eq!(diagnostic_triples(src), expected);
}

#[rstest]
fn batches_every_lexical_error() {
    assert_eq!(
        diagnostic_triples("01 + x + 1/0 + 2 $"),
        vec![
            (lex(LexError::LeadingZero), 0, 1),
            (lex(LexError::UnknownIdentifier), 5, 1),
            (lex(LexError::UnknownCharacter), 17, 1),
        ]
    );
}

#[rstest]
fn arithmetic_error_leads_the_batch() {
    assert_eq!(
        diagnostic_triples("1/0 + NaN"),
        vec![
            (arith(ArithmeticError::DivideByZero), 1, 1),
            (lex(LexError::NotANumber), 6, 3),
        ]
    );
}

#[rstest]
fn messages_are_user_facing() {
    let messages: Vec<String> = eval_err("() + 1/0")
        .iter()
        .map(decicalc::Diagnostic::message)
        .collect();
    assert_eq!(messages, vec!["empty parentheses".to_owned()]);
}

#[rstest]
fn unclosed_group_after_error_free_prefix() {
    let errors = eval_err("2 * (3 + 4");
    let first = errors.first().unwrap_or_else(|| panic!("no diagnostics"));
    assert_eq!(first.kind, syntax(ParseError::MismatchedParen));
    assert_eq!(first.column, 4);
}

#[rstest]
fn diagnostic_display_names_column() {
    let errors = eval_err("1 + 07");
    let first = errors.first().unwrap_or_else(|| panic!("no diagnostics"));
    assert_eq!(first.to_string(), "leading zero at column 4");
}
