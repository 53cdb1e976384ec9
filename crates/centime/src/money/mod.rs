//! The money value type: integer minor units, exact arithmetic.
//!
//! Amounts are whole cents in an `i64`, so ten dollars is exactly 1000
//! rather than a nearby double. Floats only appear at two explicit
//! boundaries, the [`Money::from_float`] constructor and the scalar
//! multiply/divide factors, and both go through exact decimal arithmetic
//! before touching the stored amount.

mod cmp;
pub mod ops;

#[cfg(test)]
mod props;

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::error::{MoneyError, MoneyResult};
use crate::format::{self, Locale};

/// An immutable monetary amount stored as integer minor units.
///
/// Every operation returns a new value; the fields never change after
/// construction. Equality and ordering compare the amount only (see the
/// `PartialEq` impl for the currency caveat).
///
/// # Examples
///
/// ```
/// use centime::Money;
///
/// let price = Money::new(1000);
/// assert_eq!(price + 10, Money::new(1010));
/// assert_eq!(price.to_string(), "$10.00");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Minor units per major unit (cents per dollar).
    pub const MINOR_PER_MAJOR: i64 = 100;

    /// Fractional digits of the major unit.
    pub const MINOR_UNIT_SCALE: u32 = 2;

    /// Creates a value of `amount` minor units in the default currency.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self {
            amount,
            currency: Currency::Usd,
        }
    }

    /// Creates a zero value in the default currency.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Creates a value from a major-unit float, flooring to whole minor
    /// units.
    ///
    /// The fractional scaling happens in `f64` and truncates toward
    /// negative infinity, so `from_float(-0.005)` is -1 cent while
    /// `from_float(0.005)` is 0. This is not the same as constructing and
    /// then [rounding](Self::round).
    ///
    /// # Errors
    ///
    /// [`MoneyError::InvalidAmount`] for NaN or infinite input,
    /// [`MoneyError::Overflow`] when the scaled amount exceeds the `i64`
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use centime::Money;
    ///
    /// assert_eq!(Money::from_float(1000.0).unwrap(), Money::new(100_000));
    /// assert_eq!(Money::from_float(10.5).unwrap(), Money::new(1050));
    /// assert!(Money::from_float(f64::NAN).is_err());
    /// ```
    pub fn from_float(amount: f64) -> MoneyResult<Self> {
        if !amount.is_finite() {
            return Err(MoneyError::InvalidAmount(format!(
                "not a finite number: {amount}"
            )));
        }
        let scaled = (amount * Self::MINOR_PER_MAJOR as f64).floor();
        // f64 holds i64::MIN exactly but rounds i64::MAX up to 2^63, so the
        // upper bound is exclusive.
        let lower = i64::MIN as f64;
        if scaled < lower || scaled >= -lower {
            return Err(MoneyError::Overflow);
        }
        Ok(Self::new(scaled as i64))
    }

    /// Parses a currency string such as `"$6,150,593.22"`.
    ///
    /// Every character that is not an ASCII digit or a decimal point is
    /// discarded, the remainder is parsed as an exact decimal, and the
    /// result goes through [`Self::from_float`]. Discarding includes a
    /// leading minus sign: negative strings parse as positive amounts.
    ///
    /// # Errors
    ///
    /// [`MoneyError::InvalidAmount`] when nothing parseable remains after
    /// stripping, plus everything [`Self::from_float`] returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use centime::Money;
    ///
    /// let m = Money::from_string("$6,150,593.22").unwrap();
    /// assert_eq!(m.amount(), 615_059_322);
    /// ```
    pub fn from_string(text: &str) -> MoneyResult<Self> {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let parsed = cleaned.parse::<Decimal>().map_err(|e| {
            MoneyError::InvalidAmount(format!("cannot parse {text:?}: {e}"))
        })?;
        let major = parsed
            .to_f64()
            .ok_or_else(|| MoneyError::InvalidAmount(format!("cannot parse {text:?}")))?;
        Self::from_float(major)
    }

    /// Returns a new value with the given amount and this value's currency.
    ///
    /// The arithmetic impls build their results through this, so derived
    /// values inherit the left operand's currency.
    #[must_use]
    pub const fn with_amount(&self, amount: i64) -> Self {
        Self {
            amount,
            currency: self.currency,
        }
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency code.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Returns the exact major-unit value, scale fixed to
    /// [`Self::MINOR_UNIT_SCALE`].
    ///
    /// This is the value handed to the formatting layer.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.amount, Self::MINOR_UNIT_SCALE)
    }

    /// Rounds to the nearest whole major unit, ties to the even unit.
    ///
    /// The result is always a multiple of [`Self::MINOR_PER_MAJOR`].
    ///
    /// # Examples
    ///
    /// ```
    /// use centime::Money;
    ///
    /// assert_eq!(Money::new(1001).round(), Money::new(1000));
    /// assert_eq!(Money::new(1051).round(), Money::new(1100));
    /// // 10.50 and 11.50 both sit on a tie; the even dollar wins.
    /// assert_eq!(Money::new(1050).round(), Money::new(1000));
    /// assert_eq!(Money::new(1150).round(), Money::new(1200));
    /// ```
    #[must_use]
    pub const fn round(&self) -> Self {
        let quotient = self.amount.div_euclid(Self::MINOR_PER_MAJOR);
        let remainder = self.amount.rem_euclid(Self::MINOR_PER_MAJOR);
        let half = Self::MINOR_PER_MAJOR / 2;
        let nearest = if remainder > half || (remainder == half && (quotient & 1) != 0) {
            quotient + 1
        } else {
            quotient
        };
        self.with_amount(nearest * Self::MINOR_PER_MAJOR)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self::new(amount)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl From<Money> for i64 {
    /// The raw amount in minor units.
    fn from(money: Money) -> Self {
        money.amount
    }
}

impl From<Money> for f64 {
    /// The major-unit value as the nearest double.
    ///
    /// Display-oriented and lossy; the integer amount stays the source of
    /// truth.
    fn from(money: Money) -> Self {
        money.amount as f64 / Money::MINOR_PER_MAJOR as f64
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format::format_currency(self.to_decimal(), self.currency, Locale::default());
        f.write_str(&text)
    }
}
