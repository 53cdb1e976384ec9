//! Arithmetic on money values.
//!
//! The set of trait impls below is the operand table: an operation that is
//! not implemented for a type does not compile. Addition and subtraction
//! combine whole minor-unit amounts (`Money` or bare `i64`) and never accept
//! floats; multiplication and division take scalar [`Factor`]s, where floats
//! are allowed. Division by another money value yields a bare number through
//! `/` but a money value through [`FloorDiv`].
//!
//! Operators panic on zero divisors and overflow the way built-in integer
//! arithmetic does; the `checked_*` methods are the non-panicking forms.
//!
//! Forbidden operands are rejected by the compiler, not at runtime:
//!
//! ```compile_fail
//! use centime::Money;
//!
//! let _ = Money::new(1000) + 10.0; // no Add<f64> impl exists
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::Money;
use crate::error::{MoneyError, MoneyResult};

/// A scalar multiplier or divisor: a plain integer or a float.
///
/// Scaling money by a fraction is meaningful where adding a fraction of a
/// cent is not, so multiply/divide accept both variants while add/subtract
/// take none of them. The `From` impls let call sites pass bare numbers.
#[derive(Debug, Clone, Copy)]
pub enum Factor {
    /// An integer scalar, applied exactly.
    Int(i64),
    /// A float scalar, converted to an exact decimal before use.
    Float(f64),
}

impl From<i64> for Factor {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Factor {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl Factor {
    /// Converts to the exact decimal the arithmetic runs on.
    fn to_decimal(self) -> MoneyResult<Decimal> {
        match self {
            Self::Int(value) => Ok(Decimal::from(value)),
            Self::Float(value) if !value.is_finite() => Err(MoneyError::InvalidOperand(
                format!("not a finite number: {value}"),
            )),
            Self::Float(value) => Decimal::from_f64(value).ok_or_else(|| {
                MoneyError::InvalidOperand(format!("not representable as a decimal: {value}"))
            }),
        }
    }
}

/// Integer floor division, which `std::ops` has no operator for.
///
/// Quotients truncate toward negative infinity, so `-10.00` floor-divided
/// by 3 is `-3.34` where true division rounds to `-3.33`.
pub trait FloorDiv<Rhs = Self> {
    /// The resulting type after flooring division.
    type Output;

    /// Divides and floors, panicking on a zero divisor like `/` does.
    fn floor_div(self, rhs: Rhs) -> Self::Output;
}

impl Money {
    /// Adds an amount, either another money value or bare minor units.
    ///
    /// # Errors
    ///
    /// [`MoneyError::Overflow`] when the sum leaves the `i64` range.
    pub fn checked_add(self, other: impl Into<Self>) -> MoneyResult<Self> {
        let other = other.into();
        self.amount
            .checked_add(other.amount)
            .map(|total| self.with_amount(total))
            .ok_or(MoneyError::Overflow)
    }

    /// Subtracts an amount, either another money value or bare minor units.
    ///
    /// # Errors
    ///
    /// [`MoneyError::Overflow`] when the difference leaves the `i64` range.
    pub fn checked_sub(self, other: impl Into<Self>) -> MoneyResult<Self> {
        let other = other.into();
        self.amount
            .checked_sub(other.amount)
            .map(|total| self.with_amount(total))
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplies by a scalar factor, rounding half-to-even to whole minor
    /// units.
    ///
    /// # Errors
    ///
    /// [`MoneyError::InvalidOperand`] for a non-finite float factor,
    /// [`MoneyError::Overflow`] when the product leaves the `i64` range.
    ///
    /// # Examples
    ///
    /// ```
    /// use centime::Money;
    ///
    /// let m = Money::new(1000);
    /// assert_eq!(m.checked_mul(3).unwrap(), Money::new(3000));
    /// assert_eq!(m.checked_mul(1.0009).unwrap(), Money::new(1001));
    /// assert!(m.checked_mul(f64::NAN).is_err());
    /// ```
    pub fn checked_mul(self, factor: impl Into<Factor>) -> MoneyResult<Self> {
        let factor = factor.into().to_decimal()?;
        let product = Decimal::from(self.amount)
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        Self::round_to_amount(product).map(|amount| self.with_amount(amount))
    }

    /// Divides by a scalar, rounding half-to-even to whole minor units.
    ///
    /// # Errors
    ///
    /// [`MoneyError::DivisionByZero`] for a zero divisor,
    /// [`MoneyError::InvalidOperand`] for a non-finite float divisor,
    /// [`MoneyError::Overflow`] when the quotient leaves the `i64` range.
    ///
    /// # Examples
    ///
    /// ```
    /// use centime::{Money, MoneyError};
    ///
    /// assert_eq!(Money::new(1000).checked_div(3).unwrap(), Money::new(333));
    /// assert_eq!(Money::new(1000).checked_div(0), Err(MoneyError::DivisionByZero));
    /// ```
    pub fn checked_div(self, divisor: impl Into<Factor>) -> MoneyResult<Self> {
        let divisor = divisor.into().to_decimal()?;
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = Decimal::from(self.amount)
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?;
        Self::round_to_amount(quotient).map(|amount| self.with_amount(amount))
    }

    /// Divides by a scalar and floors toward negative infinity.
    ///
    /// # Errors
    ///
    /// Same as [`Self::checked_div`].
    pub fn checked_floor_div(self, divisor: impl Into<Factor>) -> MoneyResult<Self> {
        match divisor.into() {
            Factor::Int(0) => Err(MoneyError::DivisionByZero),
            Factor::Int(-1) if self.amount == i64::MIN => Err(MoneyError::Overflow),
            Factor::Int(divisor) => Ok(self.with_amount(floor_div_amounts(self.amount, divisor))),
            factor @ Factor::Float(_) => {
                let divisor = factor.to_decimal()?;
                if divisor.is_zero() {
                    return Err(MoneyError::DivisionByZero);
                }
                let quotient = Decimal::from(self.amount)
                    .checked_div(divisor)
                    .ok_or(MoneyError::Overflow)?;
                quotient
                    .floor()
                    .to_i64()
                    .map(|amount| self.with_amount(amount))
                    .ok_or(MoneyError::Overflow)
            }
        }
    }

    /// Divides by another money value, yielding a bare number.
    ///
    /// The quotient of two amounts is dimensionless (how many times the
    /// divisor fits), so it comes back as a plain half-even-rounded integer
    /// rather than a `Money`. [`Self::checked_floor_ratio`] disagrees and
    /// wraps its result; the mismatch is deliberate.
    ///
    /// # Errors
    ///
    /// [`MoneyError::DivisionByZero`] for a zero-amount divisor,
    /// [`MoneyError::Overflow`] for `i64::MIN / -1`.
    pub fn checked_ratio(self, other: Self) -> MoneyResult<i64> {
        if other.amount == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = Decimal::from(self.amount)
            .checked_div(Decimal::from(other.amount))
            .ok_or(MoneyError::Overflow)?;
        Self::round_to_amount(quotient)
    }

    /// Divides by another money value, flooring, and wraps the quotient
    /// back into `Money`.
    ///
    /// Counterpart of [`Self::checked_ratio`] with the opposite result
    /// shape; see the note there.
    ///
    /// # Errors
    ///
    /// Same as [`Self::checked_ratio`].
    pub fn checked_floor_ratio(self, other: Self) -> MoneyResult<Self> {
        if other.amount == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        if self.amount == i64::MIN && other.amount == -1 {
            return Err(MoneyError::Overflow);
        }
        Ok(self.with_amount(floor_div_amounts(self.amount, other.amount)))
    }

    /// Negates the amount.
    ///
    /// # Errors
    ///
    /// [`MoneyError::Overflow`] for `i64::MIN`, which has no positive twin.
    pub fn checked_neg(self) -> MoneyResult<Self> {
        self.amount
            .checked_neg()
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    /// Absolute value of the amount.
    ///
    /// # Errors
    ///
    /// [`MoneyError::Overflow`] for `i64::MIN`.
    pub fn checked_abs(self) -> MoneyResult<Self> {
        self.amount
            .checked_abs()
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::Overflow)
    }

    /// Absolute value of the amount.
    ///
    /// # Panics
    ///
    /// Panics for `i64::MIN`, like integer `abs`.
    #[must_use]
    pub fn abs(self) -> Self {
        self.checked_abs().expect("attempt to negate with overflow")
    }

    /// Half-even rounds a decimal to a whole number of minor units.
    fn round_to_amount(value: Decimal) -> MoneyResult<i64> {
        value
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_i64()
            .ok_or(MoneyError::Overflow)
    }
}

/// Floor division on raw amounts, truncating toward negative infinity.
///
/// Callers guard the zero divisor and the `i64::MIN / -1` overflow.
const fn floor_div_amounts(dividend: i64, divisor: i64) -> i64 {
    let quotient = dividend / divisor;
    let remainder = dividend % divisor;
    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        quotient - 1
    } else {
        quotient
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(other).expect("attempt to add with overflow")
    }
}

impl Add<i64> for Money {
    type Output = Self;

    fn add(self, other: i64) -> Self {
        self.checked_add(other).expect("attempt to add with overflow")
    }
}

impl Add<Money> for i64 {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        other.checked_add(self).expect("attempt to add with overflow")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(other)
            .expect("attempt to subtract with overflow")
    }
}

impl Sub<i64> for Money {
    type Output = Self;

    fn sub(self, other: i64) -> Self {
        self.checked_sub(other)
            .expect("attempt to subtract with overflow")
    }
}

impl Sub<Money> for i64 {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        other
            .checked_neg()
            .and_then(|negated| negated.checked_add(self))
            .expect("attempt to subtract with overflow")
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, factor: i64) -> Self {
        self.checked_mul(factor)
            .expect("attempt to multiply with overflow or an invalid factor")
    }
}

impl Mul<f64> for Money {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        self.checked_mul(factor)
            .expect("attempt to multiply with overflow or an invalid factor")
    }
}

impl Mul<Money> for i64 {
    type Output = Money;

    fn mul(self, money: Money) -> Money {
        money
            .checked_mul(self)
            .expect("attempt to multiply with overflow or an invalid factor")
    }
}

impl Mul<Money> for f64 {
    type Output = Money;

    fn mul(self, money: Money) -> Money {
        money
            .checked_mul(self)
            .expect("attempt to multiply with overflow or an invalid factor")
    }
}

impl Div<i64> for Money {
    type Output = Self;

    fn div(self, divisor: i64) -> Self {
        self.checked_div(divisor)
            .expect("attempt to divide by zero or overflow")
    }
}

impl Div<f64> for Money {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        self.checked_div(divisor)
            .expect("attempt to divide by zero or overflow")
    }
}

/// `money / money` yields the bare rounded quotient of the two amounts,
/// not a `Money`. Floor division wraps its result instead; see
/// [`Money::checked_ratio`].
impl Div for Money {
    type Output = i64;

    fn div(self, other: Self) -> i64 {
        self.checked_ratio(other)
            .expect("attempt to divide by zero or overflow")
    }
}

impl FloorDiv<i64> for Money {
    type Output = Self;

    fn floor_div(self, divisor: i64) -> Self {
        self.checked_floor_div(divisor)
            .expect("attempt to divide by zero or overflow")
    }
}

impl FloorDiv<f64> for Money {
    type Output = Self;

    fn floor_div(self, divisor: f64) -> Self {
        self.checked_floor_div(divisor)
            .expect("attempt to divide by zero or overflow")
    }
}

/// `money.floor_div(money)` comes back as `Money`, unlike `/` on two money
/// values; see [`Money::checked_floor_ratio`].
impl FloorDiv for Money {
    type Output = Self;

    fn floor_div(self, other: Self) -> Self {
        self.checked_floor_ratio(other)
            .expect("attempt to divide by zero or overflow")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        self.checked_neg().expect("attempt to negate with overflow")
    }
}
