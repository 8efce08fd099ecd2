//! Operators and comparisons for [`Decimal`].

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use super::{DIVISION_PRECISION, Decimal, digit_count, ten_pow};
use crate::error::ArithmeticError;

/// Outcome of a decimal operation that can fail.
pub type ArithResult = Result<Decimal, ArithmeticError>;

/// Bring both coefficients to the smaller of the two exponents.
fn conform(x: &Decimal, y: &Decimal) -> Result<(BigInt, BigInt, i64), ArithmeticError> {
    let differential = x
        .exponent
        .checked_sub(y.exponent)
        .ok_or(ArithmeticError::ExponentOverflow)?;
    Ok(match differential.cmp(&0) {
        Ordering::Equal => (x.coefficient.clone(), y.coefficient.clone(), x.exponent),
        Ordering::Greater => (
            &x.coefficient * ten_pow(differential.unsigned_abs()),
            y.coefficient.clone(),
            y.exponent,
        ),
        Ordering::Less => (
            x.coefficient.clone(),
            &y.coefficient * ten_pow(differential.unsigned_abs()),
            x.exponent,
        ),
    })
}

/// Compare magnitudes of two non-zero values without aligning their
/// exponents.
fn cmp_magnitude(x: &Decimal, y: &Decimal) -> Ordering {
    let (dx, dy) = (digit_count(&x.coefficient), digit_count(&y.coefficient));
    let leading = |exponent: i64, digits: u64| i128::from(exponent) + i128::from(digits);
    match leading(x.exponent, dx).cmp(&leading(y.exponent, dy)) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    // Same leading digit position: only the digit counts differ.
    let (a, b) = (x.coefficient.abs(), y.coefficient.abs());
    match dx.cmp(&dy) {
        Ordering::Less => (a * ten_pow(dy - dx)).cmp(&b),
        Ordering::Greater => a.cmp(&(b * ten_pow(dx - dy))),
        Ordering::Equal => a.cmp(&b),
    }
}

impl Decimal {
    /// `self / divisor` rounded half away from zero at
    /// [`DIVISION_PRECISION`].
    ///
    /// # Errors
    /// See [`Decimal::div_with_precision`].
    pub fn div(&self, divisor: &Self) -> ArithResult {
        self.div_with_precision(divisor, DIVISION_PRECISION)
    }

    /// Divide, keeping the quotient's exponent at or below `precision`.
    ///
    /// The dividend's coefficient is scaled up until the working exponent
    /// reaches `precision`; the truncated integer quotient is then bumped one
    /// unit away from zero when twice the remainder reaches the divisor.
    /// Away from zero follows the quotient's sign, not the dividend's, so a
    /// negative divisor gives `1 / -32 = -0.0313` rather than `-0.0312`.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::DivideByZero`] when `divisor` is zero and
    /// [`ArithmeticError::ExponentOverflow`] when the exponent difference
    /// does not fit in 64 bits.
    pub fn div_with_precision(&self, divisor: &Self, precision: i64) -> ArithResult {
        if self.is_zero() {
            return Ok(Self::zero());
        }
        if divisor.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        let mut coefficient = self.coefficient.clone();
        let mut exponent = self
            .exponent
            .checked_sub(divisor.exponent)
            .ok_or(ArithmeticError::ExponentOverflow)?;
        if exponent > precision {
            coefficient *= ten_pow(exponent.abs_diff(precision));
            exponent = precision;
        }
        let remainder = &coefficient % &divisor.coefficient;
        let mut quotient = coefficient / &divisor.coefficient;
        if (&remainder + &remainder).abs() >= divisor.coefficient.abs() {
            quotient += self.coefficient.signum() * divisor.coefficient.signum();
        }
        Ok(Self::new(quotient, exponent))
    }

    /// Raise to an integer power.
    ///
    /// # Errors
    /// See [`Decimal::pow_with_precision`].
    pub fn pow(&self, power: &Self) -> ArithResult {
        self.pow_with_precision(power, DIVISION_PRECISION)
    }

    /// Raise to an integer power; negative powers invert through
    /// [`Decimal::div_with_precision`] at `precision` first.
    ///
    /// `0^0` is `1`.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::NonIntegerExponent`] when `power` has a
    /// fractional part and [`ArithmeticError::ExponentOverflow`] when the
    /// result's exponent leaves the 64-bit range.
    pub fn pow_with_precision(&self, power: &Self, precision: i64) -> ArithResult {
        let power = power.normalize();
        if power.exponent < 0 {
            return Err(ArithmeticError::NonIntegerExponent);
        }
        if power.is_zero() {
            return Ok(Self::one());
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let mut base = self.clone();
        let mut remaining = power.coefficient;
        if remaining.is_negative() {
            base = Self::one().div_with_precision(&base, precision)?;
            remaining = -remaining;
        }

        let two = BigInt::from(2u8);
        let mut acc = Self::one();
        while remaining > BigInt::one() {
            if !(&remaining % &two).is_zero() {
                acc = (&acc * &base)?;
            }
            base = (&base * &base)?;
            remaining /= &two;
        }
        &acc * &base
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.coefficient, self.exponent)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::new(-&self.coefficient, self.exponent)
    }
}

impl Add for &Decimal {
    type Output = ArithResult;

    fn add(self, rhs: Self) -> ArithResult {
        let (x, y, exponent) = conform(self, rhs)?;
        Ok(Decimal::new(x + y, exponent))
    }
}

impl Sub for &Decimal {
    type Output = ArithResult;

    fn sub(self, rhs: Self) -> ArithResult {
        let (x, y, exponent) = conform(self, rhs)?;
        Ok(Decimal::new(x - y, exponent))
    }
}

impl Mul for &Decimal {
    type Output = ArithResult;

    fn mul(self, rhs: Self) -> ArithResult {
        let exponent = self
            .exponent
            .checked_add(rhs.exponent)
            .ok_or(ArithmeticError::ExponentOverflow)?;
        Ok(Decimal::new(&self.coefficient * &rhs.coefficient, exponent))
    }
}

/// Forward the by-value operator to the by-reference implementation.
macro_rules! forward_owned_binop {
    ($($imp:ident, $method:ident);* $(;)?) => {$(
        impl $imp for Decimal {
            type Output = ArithResult;

            fn $method(self, rhs: Self) -> ArithResult {
                $imp::$method(&self, &rhs)
            }
        }
    )*};
}

forward_owned_binop! {
    Add, add;
    Sub, sub;
    Mul, mul;
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_sign = self.coefficient.sign().cmp(&other.coefficient.sign());
        if by_sign != Ordering::Equal || self.is_zero() {
            return by_sign;
        }
        let magnitude = cmp_magnitude(self, other);
        if self.is_negative() {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}
