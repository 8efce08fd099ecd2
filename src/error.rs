//! Diagnostic taxonomy shared by the lexer, parser and decimal arithmetic.
//!
//! Each failure family is a small `Copy` enum whose `Display` output is the
//! message shown to users. [`Diagnostic`] pins one of them to a column span
//! in the source text.

use std::fmt;

use thiserror::Error;

/// Malformed input detected while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unknown character")]
    UnknownCharacter,
    /// A run of letters that is not a recognised word.
    #[error("unknown identifier")]
    UnknownIdentifier,
    /// A zero directly followed by another digit, such as `07`.
    #[error("leading zero")]
    LeadingZero,
    /// A decimal point that does not sit between two digit runs.
    #[error("misplaced decimal point")]
    MisplacedDecimal,
    /// An `e` or `E` standing on its own.
    #[error("misplaced exponent suffix")]
    MisplacedExponentSuffix,
    /// `NaN`, `undefined` or `Infinity`.
    #[error("not a number")]
    NotANumber,
    /// `()` with nothing but whitespace inside.
    #[error("empty parentheses")]
    EmptyParens,
    /// A number whose exponent suffix does not fit a 64-bit exponent.
    #[error("exponent out of range")]
    ExponentOutOfRange,
}

/// Structural problems found while evaluating the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    #[error("undefined prefix operation")]
    UndefinedPrefix,
    #[error("undefined infix operation")]
    UndefinedInfix,
    #[error("empty expression")]
    EmptyExpression,
    #[error("incomplete expression")]
    IncompleteExpression,
    #[error("mismatched parenthesis")]
    MismatchedParen,
    #[error("misplaced number")]
    MisplacedNumber,
}

/// Expected numeric failures reported by [`crate::Decimal`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    #[error("divide by zero")]
    DivideByZero,
    #[error("non-integer exponent")]
    NonIntegerExponent,
    /// The result's exponent does not fit in 64 bits.
    #[error("exponent overflow")]
    ExponentOverflow,
}

/// Any diagnostic the evaluator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// A positioned error: `length` code points starting at `column`.
///
/// Columns count Unicode scalar values from the start of the input, so a
/// caret line built from them lines up under multi-byte characters too.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub column: usize,
    pub length: usize,
    pub kind: ErrorKind,
}

impl Diagnostic {
    #[must_use]
    pub fn new(column: usize, length: usize, kind: impl Into<ErrorKind>) -> Self {
        Self {
            column,
            length,
            kind: kind.into(),
        }
    }

    /// Human-readable message for this diagnostic.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at column {}", self.kind, self.column)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LexError::LeadingZero.into(), "leading zero")]
    #[case(LexError::EmptyParens.into(), "empty parentheses")]
    #[case(ParseError::MismatchedParen.into(), "mismatched parenthesis")]
    #[case(ArithmeticError::DivideByZero.into(), "divide by zero")]
    #[case(ArithmeticError::NonIntegerExponent.into(), "non-integer exponent")]
    #[case(ArithmeticError::ExponentOverflow.into(), "exponent overflow")]
    #[case(LexError::ExponentOutOfRange.into(), "exponent out of range")]
    fn kinds_render_their_message(#[case] kind: ErrorKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[rstest]
    fn diagnostic_carries_position() {
        let diag = Diagnostic::new(3, 1, ArithmeticError::DivideByZero);
        assert_eq!(diag.message(), "divide by zero");
        assert_eq!(diag.to_string(), "divide by zero at column 3");
    }
}
