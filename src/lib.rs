//! Library crate for decicalc.
//!
//! Evaluates arithmetic expressions over arbitrary-precision decimals and
//! reports malformed input as positioned diagnostics.

#![forbid(unsafe_code)]

pub mod decimal;
pub mod error;
pub mod language;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use decimal::{ArithResult, DecodeError, Decimal};
pub use error::{ArithmeticError, Diagnostic, ErrorKind, LexError, ParseError};
pub use language::SyntaxKind;
pub use lexer::{Token, scan};
pub use parser::{EvalConfig, Evaluator, parse};
pub use report::format_report;
pub use tokenizer::{RawKind, RawToken, Span, tokenize_with_trivia, tokenize_without_trivia};
