use crate::errors::{Error, Result};
use crate::lexer::token::is_number_literal;
use crate::utils::digit_count;
use rug::ops::Pow;
use rug::{Complete, Integer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// Significant digits added to the integer part of a rough quotient when a
/// division does not terminate
const EXTRA_QUOTIENT_DIGITS: i64 = 11;

/// The largest scale a value may have after multiplication or
/// exponentiation
const MAX_SCALE: u64 = i32::MAX as u64;

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
/// How to round away discarded digits
pub enum Rounding {
    /// Ties round away from zero
    HalfUp,
    /// Ties round to the neighbour with an even last digit
    HalfEven,
}

/// An arbitrary-precision decimal number, held as an unscaled integer and a
/// count of digits to the right of the decimal point, so that the value is
/// unscaled × 10^-scale. Values with the same numeric value but different
/// scales, such as 2.5 and 2.50, compare equal.
#[derive(Clone)]
pub struct Decimal {
    unscaled: Integer,
    scale: u32,
}

/// Returns 10 raised to the power n
fn pow10(n: u32) -> Integer {
    Integer::u_pow_u(10, n).complete()
}

/// Divides num by den, rounding the quotient to an integer using the given
/// rounding mode. den must not be zero.
fn divide_rounded(num: &Integer, den: &Integer, mode: Rounding) -> Integer {
    let (mut quotient, remainder) = num.div_rem_ref(den).complete();
    if remainder.is_zero() {
        return quotient;
    }

    let twice_remainder = remainder.abs() * 2u32;
    let round_away = match twice_remainder.cmp_abs(den) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => mode == Rounding::HalfUp || quotient.is_odd(),
    };

    if round_away {
        if num.is_negative() != den.is_negative() {
            quotient -= 1u32;
        } else {
            quotient += 1u32;
        }
    }

    quotient
}

/// Returns true if |a| / |b| is at least 10^exp
fn ratio_at_least_pow10(a: &Integer, b: &Integer, exp: i64) -> bool {
    let shift = pow10(exp.unsigned_abs() as u32);
    if exp >= 0 {
        a.cmp_abs(&(b.clone() * shift)) != Ordering::Less
    } else {
        (a.clone() * shift).cmp_abs(b) != Ordering::Less
    }
}

impl Decimal {
    /// Creates a new value from a decimal string representation, which
    /// must be a run of digits optionally followed by a decimal point and
    /// further digits
    pub fn new(value: &str) -> Result<Decimal> {
        if !is_number_literal(value) {
            return Err(Error::InvalidNumber(value.to_string()));
        }

        let (digits, scale) = match value.split_once('.') {
            Some((int, frac)) => (format!("{}{}", int, frac), frac.len()),
            None => (value.to_string(), 0),
        };

        let Ok(scale) = u32::try_from(scale) else {
            return Err(Error::InvalidNumber(value.to_string()));
        };

        match Integer::from_str_radix(&digits, 10) {
            Err(_) => Err(Error::InvalidNumber(value.to_string())),
            Ok(unscaled) => Ok(Decimal { unscaled, scale }),
        }
    }

    /// Creates a value from an unscaled integer and a scale
    pub fn from_parts(unscaled: Integer, scale: u32) -> Decimal {
        Decimal { unscaled, scale }
    }

    /// Returns the value zero
    pub fn zero() -> Decimal {
        Decimal::from_parts(Integer::new(), 0)
    }

    /// Returns the unscaled integer
    pub fn unscaled(&self) -> &Integer {
        &self.unscaled
    }

    /// Returns the number of digits to the right of the decimal point
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns the number of digits in the unscaled integer. Zero has a
    /// precision of one.
    pub fn precision(&self) -> u32 {
        digit_count(&self.unscaled.to_string()) as u32
    }

    /// Returns precision minus scale, which for values of one or more is the
    /// number of digits before the decimal point
    pub fn integer_digits(&self) -> i64 {
        i64::from(self.precision()) - i64::from(self.scale)
    }

    /// Returns true if a value is negative
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Returns true if a value is zero
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Returns the unscaled integer for this value expressed at a scale no
    /// smaller than its own
    fn rescaled(&self, scale: u32) -> Integer {
        debug_assert!(scale >= self.scale);
        self.unscaled.clone() * pow10(scale - self.scale)
    }

    /// Returns the integer part of the value, truncated toward zero
    pub fn trunc(&self) -> Integer {
        self.unscaled.clone() / pow10(self.scale)
    }

    /// Returns the value rounded to the given number of decimal places. A
    /// value that already has no more places is returned unchanged.
    pub fn round(&self, scale: u32, mode: Rounding) -> Decimal {
        if scale >= self.scale {
            return self.clone();
        }

        let unscaled = divide_rounded(&self.unscaled, &pow10(self.scale - scale), mode);
        Decimal::from_parts(unscaled, scale)
    }

    /// Removes trailing zeros after the decimal point, keeping at least
    /// min_scale decimal places
    pub fn strip_trailing_zeros(mut self, min_scale: u32) -> Decimal {
        if self.unscaled.is_zero() {
            self.scale = self.scale.min(min_scale);
            return self;
        }

        while self.scale > min_scale && self.unscaled.is_divisible_u(10) {
            self.unscaled /= 10u32;
            self.scale -= 1;
        }

        self
    }

    /// Multiplies by other. The result is exact. Fails with
    /// Error::ValueTooLarge if it would have too many decimal places.
    pub fn checked_mul(&self, other: &Decimal) -> Result<Decimal> {
        let scale = u64::from(self.scale) + u64::from(other.scale);
        if scale > MAX_SCALE {
            return Err(Error::ValueTooLarge);
        }

        Ok(Decimal::from_parts(
            (&self.unscaled * &other.unscaled).complete(),
            scale as u32,
        ))
    }

    /// Divides by divisor. The exact quotient is returned if it can be
    /// expressed with no more decimal places than the dividend. Otherwise,
    /// the quotient is rounded half-up to eleven significant digits more
    /// than the integer digits of the quotient rounded at the dividend's
    /// scale.
    pub fn checked_div(&self, divisor: &Decimal) -> Result<Decimal> {
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }

        // Quotient expressed at the dividend's scale
        let num = self.unscaled.clone() * pow10(divisor.scale);
        let (quotient, remainder) = num.div_rem_ref(&divisor.unscaled).complete();
        if remainder.is_zero() {
            return Ok(Decimal::from_parts(quotient, self.scale));
        }

        let rough = Decimal::from_parts(
            divide_rounded(&num, &divisor.unscaled, Rounding::HalfUp),
            self.scale,
        );
        let digits = (rough.integer_digits() + EXTRA_QUOTIENT_DIGITS).max(1);
        let preferred_scale = self.scale.saturating_sub(divisor.scale);

        Ok(self
            .divide_to_precision(divisor, digits)?
            .strip_trailing_zeros(preferred_scale))
    }

    /// Divides by a non-zero divisor, rounding the quotient half-up to the
    /// given number of significant digits
    fn divide_to_precision(&self, divisor: &Decimal, digits: i64) -> Result<Decimal> {
        // self / divisor == num / den
        let num = self.unscaled.clone() * pow10(divisor.scale);
        let den = divisor.unscaled.clone() * pow10(self.scale);

        // Decimal exponent of the leading digit of the quotient
        let estimate = digit_count(&num.to_string()) as i64 - digit_count(&den.to_string()) as i64;
        let exponent = if ratio_at_least_pow10(&num, &den, estimate) {
            estimate
        } else {
            estimate - 1
        };

        let scale = digits - 1 - exponent;
        if scale >= 0 {
            let Ok(scale) = u32::try_from(scale) else {
                return Err(Error::ValueTooLarge);
            };
            let unscaled = divide_rounded(&(num * pow10(scale)), &den, Rounding::HalfUp);
            Ok(Decimal::from_parts(unscaled, scale))
        } else {
            let Ok(shift) = u32::try_from(-scale) else {
                return Err(Error::ValueTooLarge);
            };
            let unscaled = divide_rounded(&num, &(den * pow10(shift)), Rounding::HalfUp);
            Ok(Decimal::from_parts(unscaled * pow10(shift), 0))
        }
    }

    /// Returns the remainder of dividing by divisor. The remainder has the
    /// same sign as the dividend.
    pub fn checked_rem(&self, divisor: &Decimal) -> Result<Decimal> {
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }

        let scale = self.scale.max(divisor.scale);
        let remainder = self.rescaled(scale) % divisor.rescaled(scale);

        Ok(Decimal::from_parts(remainder, scale))
    }

    /// Raises the value to the power of exponent, truncated toward zero to
    /// an integer. The result is exact. Fails with Error::ValueTooLarge if
    /// the truncated exponent is negative or greater than max_exponent, or
    /// if the result would have too many decimal places.
    pub fn pow(&self, exponent: &Decimal, max_exponent: u32) -> Result<Decimal> {
        let Some(n) = exponent.trunc().to_u32().filter(|n| *n <= max_exponent) else {
            return Err(Error::ValueTooLarge);
        };

        let scale = u64::from(self.scale) * u64::from(n);
        if scale > MAX_SCALE {
            return Err(Error::ValueTooLarge);
        }

        Ok(Decimal::from_parts(
            self.unscaled.clone().pow(n),
            scale as u32,
        ))
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Decimal {
        Decimal::from_parts(Integer::from(n), 0)
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Decimal> {
        Decimal::new(s)
    }
}

impl fmt::Debug for Decimal {
    /// Formats a value for debugging
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(Decimal) {} [scale {}]", self, self.scale)
    }
}

impl fmt::Display for Decimal {
    /// Formats a value as a plain decimal string with exactly `scale`
    /// decimal places
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.unscaled.clone().abs().to_string();
        let sign = if self.is_negative() { "-" } else { "" };
        let scale = self.scale as usize;

        if scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        let digits = format!("{:0>width$}", digits, width = scale + 1);
        let (int, frac) = digits.split_at(digits.len() - scale);
        write!(f, "{}{}.{}", sign, int, frac)
    }
}

impl PartialEq for Decimal {
    /// Tests two values for numeric equality, regardless of scale
    fn eq(&self, other: &Decimal) -> bool {
        let scale = self.scale.max(other.scale);
        self.rescaled(scale) == other.rescaled(scale)
    }
}

/// Implements '+' operator
impl Add for Decimal {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let scale = self.scale.max(other.scale);
        Decimal::from_parts(self.rescaled(scale) + other.rescaled(scale), scale)
    }
}

/// Implements binary '-' operator
impl Sub for Decimal {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let scale = self.scale.max(other.scale);
        Decimal::from_parts(self.rescaled(scale) - other.rescaled(scale), scale)
    }
}

/// Implements unary '-' operator
impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self {
        Decimal::from_parts(-self.unscaled, self.scale)
    }
}
