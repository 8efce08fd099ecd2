//! Arbitrary-precision decimal numbers.
//!
//! A [`Decimal`] is the exact value `coefficient × 10^exponent` where the
//! coefficient is an unbounded [`BigInt`]. Addition, subtraction and
//! multiplication never lose precision. Division and exponentiation by a
//! negative power work at a fixed number of fractional digits, see
//! [`DIVISION_PRECISION`].
//!
//! The submodules split the type by concern: [`codec`] converts to and from
//! text, [`arith`] implements the operators and comparisons.

mod arith;
mod codec;

pub use arith::ArithResult;
pub use codec::DecodeError;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Exponent floor used when a quotient cannot be represented exactly.
pub const DIVISION_PRECISION: i64 = -4;

/// Results whose normalised exponent or coefficient reach `10^21` are shown in
/// scientific notation.
pub const SCIENTIFIC_THRESHOLD: u32 = 21;

const TEN_MILLION: u32 = 10_000_000;

/// Immutable decimal value `coefficient × 10^exponent`.
///
/// Zero is always stored as `{0, 0}`. Equality and ordering are numeric, so
/// `1.50` and `1.5` compare equal even though their representations differ.
#[derive(Debug, Clone, Default)]
pub struct Decimal {
    coefficient: BigInt,
    exponent: i64,
}

impl Decimal {
    /// Build a decimal from its parts, canonicalising zero.
    #[must_use]
    pub fn new(coefficient: BigInt, exponent: i64) -> Self {
        if coefficient.is_zero() {
            return Self::zero();
        }
        Self {
            coefficient,
            exponent,
        }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn one() -> Self {
        Self {
            coefficient: BigInt::one(),
            exponent: 0,
        }
    }

    #[must_use]
    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    #[must_use]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// True when the value has no fractional part.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.exponent >= 0 || self.strip_fraction_zeros().exponent >= 0
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.coefficient.abs(), self.exponent)
    }

    /// `-1`, `0` or `1` according to the sign of the value.
    #[must_use]
    pub fn signum(&self) -> Self {
        Self::new(self.coefficient.signum(), 0)
    }

    /// Remove representational redundancy.
    ///
    /// Positive exponents are multiplied into the coefficient. Negative
    /// exponents shed trailing zero digits, seven at a time while possible and
    /// then one at a time.
    #[must_use]
    pub fn normalize(&self) -> Self {
        if self.exponent > 0 {
            return Self::new(
                &self.coefficient * ten_pow(self.exponent.unsigned_abs()),
                0,
            );
        }
        self.strip_fraction_zeros()
    }

    /// Drop trailing zeros that sit right of the decimal point. Values with a
    /// non-negative exponent come back unchanged.
    fn strip_fraction_zeros(&self) -> Self {
        let mut coefficient = self.coefficient.clone();
        let mut exponent = self.exponent;
        if coefficient.is_zero() {
            return Self::zero();
        }
        let ten_million = BigInt::from(TEN_MILLION);
        while exponent <= -7 {
            if !(&coefficient % &ten_million).is_zero() {
                break;
            }
            coefficient /= &ten_million;
            exponent += 7;
        }
        let ten = BigInt::from(10u8);
        while exponent < 0 {
            if !(&coefficient % &ten).is_zero() {
                break;
            }
            coefficient /= &ten;
            exponent += 1;
        }
        Self {
            coefficient,
            exponent,
        }
    }

    /// Whether the value is large or fine enough to need scientific notation
    /// under `threshold`: its normalised exponent magnitude or its leading
    /// digit position reaches `threshold`.
    ///
    /// Positive exponents are never expanded, so `1e3000000` is cheap.
    #[must_use]
    pub fn exceeds_display_threshold(&self, threshold: u32) -> bool {
        let x = self.strip_fraction_zeros();
        let threshold = i128::from(threshold);
        let leading = i128::from(digit_count(&x.coefficient)) - 1;
        if x.exponent >= 0 {
            leading + i128::from(x.exponent) >= threshold
        } else {
            i128::from(x.exponent.unsigned_abs()) >= threshold || leading >= threshold
        }
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

/// Number of decimal digits in the magnitude of `n`.
pub(crate) fn digit_count(n: &BigInt) -> u64 {
    u64::try_from(n.magnitude().to_string().len()).unwrap_or(u64::MAX)
}

/// `10^n` as a big integer.
pub(crate) fn ten_pow(n: u64) -> BigInt {
    let n = usize::try_from(n).unwrap_or(usize::MAX);
    num_traits::pow(BigInt::from(10u8), n)
}
