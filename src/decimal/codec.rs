//! Text conversions for [`Decimal`].
//!
//! Accepted input is an optional sign, integer digits, an optional fraction
//! and an optional `e`/`E` exponent: `-12.5e3`. Output is always plain
//! positional notation unless [`Decimal::encode_scientific`] is requested.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use thiserror::Error;

use super::Decimal;

/// Text that is not a decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal literal: {text:?}")]
pub struct DecodeError {
    text: String,
}

impl DecodeError {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }
}

impl Decimal {
    /// Decode `text`, treating anything unparsable as zero.
    ///
    /// Use [`str::parse`] to reject malformed text instead, as the evaluator
    /// does for number literals.
    #[must_use]
    pub fn decode(text: &str) -> Self {
        Self::decode_with_exponent(text, 0)
    }

    /// Decode `text` using `default_exponent` when it carries no exponent
    /// suffix of its own.
    #[must_use]
    pub fn decode_with_exponent(text: &str, default_exponent: i64) -> Self {
        decode_parts(text, default_exponent).unwrap_or_default()
    }

    /// Render in plain positional notation, e.g. `-0.0025` or `1200`.
    #[must_use]
    pub fn encode(&self) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }
        let x = self.normalize();
        let mut text = x.coefficient.magnitude().to_string();
        if x.exponent < 0 {
            let shift = usize::try_from(x.exponent.unsigned_abs()).unwrap_or(usize::MAX);
            if shift >= text.len() {
                let padding = "0".repeat(shift + 1 - text.len());
                text.insert_str(0, &padding);
            }
            text.insert(text.len() - shift, '.');
        }
        if x.is_negative() {
            text.insert(0, '-');
        }
        text
    }

    /// Render as `d.ddde N` with trailing fractional zeros removed, e.g.
    /// `1.5e30` or `-2e-25`.
    #[must_use]
    pub fn encode_scientific(&self) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }
        let digits = self.coefficient.magnitude().to_string();
        let mut chars = digits.chars();
        let Some(lead) = chars.next() else {
            return "0".to_owned();
        };
        let fraction = chars.as_str().trim_end_matches('0');
        let shift = i128::try_from(digits.len() - 1).unwrap_or(i128::MAX);
        let exponent = i128::from(self.exponent) + shift;

        let mut out = String::with_capacity(digits.len() + 8);
        if self.is_negative() {
            out.push('-');
        }
        out.push(lead);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out.push('e');
        out.push_str(&exponent.to_string());
        out
    }

    /// Plain notation, switching to scientific once the value reaches the
    /// display `threshold` (see [`Decimal::exceeds_display_threshold`]).
    #[must_use]
    pub fn to_display_string(&self, threshold: u32) -> String {
        if self.exceeds_display_threshold(threshold) {
            self.encode_scientific()
        } else {
            self.encode()
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn decode_parts(text: &str, default_exponent: i64) -> Result<Decimal, DecodeError> {
    let invalid = || DecodeError::new(text);

    let (mantissa, suffix) = match text.split_once(|c: char| matches!(c, 'e' | 'E')) {
        Some((m, s)) => (m, Some(s)),
        None => (text, None),
    };
    let (negative, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if !is_digits(integer) || !(fraction.is_empty() || is_digits(fraction)) {
        return Err(invalid());
    }

    let exponent = match suffix {
        Some(s) => {
            let digits = s.strip_prefix(|c: char| matches!(c, '+' | '-')).unwrap_or(s);
            if !is_digits(digits) {
                return Err(invalid());
            }
            s.strip_prefix('+')
                .unwrap_or(s)
                .parse::<i64>()
                .map_err(|_| invalid())?
        }
        None => default_exponent,
    };
    let fraction_len = i64::try_from(fraction.len()).map_err(|_| invalid())?;
    let exponent = exponent.checked_sub(fraction_len).ok_or_else(invalid)?;

    let mut coefficient: BigInt = format!("{integer}{fraction}")
        .parse()
        .map_err(|_| invalid())?;
    if negative {
        coefficient = -coefficient;
    }
    Ok(Decimal::new(coefficient, exponent))
}

impl FromStr for Decimal {
    type Err = DecodeError;

    /// Strict counterpart of [`Decimal::decode`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_parts(s, 0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
