//! Expression evaluation entry points.
//!
//! Source text is scanned with [`crate::scan`] and handed to a Pratt parser
//! that evaluates each production as soon as it is recognised; no syntax tree
//! is built. Failures are reported as a batch of [`Diagnostic`]s: the error
//! that stopped evaluation first, followed by every lexical error still
//! waiting in the unconsumed part of the token stream.

pub mod expression;

use crate::decimal::{DIVISION_PRECISION, SCIENTIFIC_THRESHOLD};
use crate::{Decimal, Diagnostic};

/// Tunable numeric behaviour of an [`Evaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Exponent floor for quotients and negative powers. `-4` keeps four
    /// fractional digits.
    pub division_precision: i64,
    /// Results at or beyond `10^threshold` (or below `10^-threshold`) are
    /// rendered in scientific notation.
    pub scientific_threshold: u32,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            division_precision: DIVISION_PRECISION,
            scientific_threshold: SCIENTIFIC_THRESHOLD,
        }
    }
}

/// Evaluates arithmetic expressions under a fixed [`EvalConfig`].
///
/// An evaluator holds no per-call state and may be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    #[must_use]
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate `text` to an exact [`Decimal`].
    ///
    /// # Errors
    /// Returns every diagnostic found when the expression cannot be
    /// evaluated.
    pub fn evaluate_decimal(&self, text: &str) -> Result<Decimal, Vec<Diagnostic>> {
        expression::evaluate(text, self.config)
    }

    /// Evaluate `text` and render the result as decimal text.
    ///
    /// # Errors
    /// Returns every diagnostic found when the expression cannot be
    /// evaluated.
    pub fn evaluate(&self, text: &str) -> Result<String, Vec<Diagnostic>> {
        self.evaluate_decimal(text)
            .map(|value| value.to_display_string(self.config.scientific_threshold))
    }
}

/// Evaluate `text` with the default configuration.
///
/// # Examples
///
/// ```rust
/// use decicalc::parse;
///
/// assert_eq!(parse("1 + 2 * 3").as_deref(), Ok("7"));
/// assert_eq!(parse("0.1 + 0.2").as_deref(), Ok("0.3"));
/// assert!(parse("1 / 0").is_err());
/// ```
///
/// # Errors
/// Returns the diagnostics collected for malformed input or failed
/// arithmetic.
pub fn parse(text: &str) -> Result<String, Vec<Diagnostic>> {
    Evaluator::default().evaluate(text)
}

#[cfg(test)]
mod tests;
