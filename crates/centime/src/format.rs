//! Rendering money values as display strings.
//!
//! The money type hands this module a correctly scaled major-unit decimal;
//! everything presentational lives here: currency symbol placement, digit
//! grouping, and the separator table per locale.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::Currency;

/// Display locale for formatted amounts.
///
/// Only `en-US` conventions are wired up; the enum is the seam where more
/// separator tables would go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// English (United States): `.` decimal point, `,` grouping in threes.
    #[default]
    EnUs,
}

impl Locale {
    /// Returns the character between the whole and fractional parts.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        match self {
            Self::EnUs => '.',
        }
    }

    /// Returns the character between groups of three whole-part digits.
    #[must_use]
    pub const fn grouping_separator(&self) -> char {
        match self {
            Self::EnUs => ',',
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnUs => write!(f, "en-US"),
        }
    }
}

/// Formats a major-unit amount as a grouped, symbol-prefixed string.
///
/// The sign precedes the symbol and the fractional part is padded to the
/// currency's decimal places, so `-5` in USD renders as `-$5.00`. Values
/// with excess fractional digits are rounded half-to-even first.
///
/// # Examples
///
/// ```
/// use centime::format::{format_currency, Locale};
/// use centime::Currency;
/// use rust_decimal_macros::dec;
///
/// let text = format_currency(dec!(1234.50), Currency::Usd, Locale::EnUs);
/// assert_eq!(text, "$1,234.50");
/// ```
#[must_use]
pub fn format_currency(value: Decimal, currency: Currency, locale: Locale) -> String {
    let negative = value.is_sign_negative() && !value.is_zero();
    let places = currency.decimal_places();
    let rounded = value
        .abs()
        .round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);

    let text = rounded.to_string();
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = String::with_capacity(text.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(currency.symbol());

    let digits = whole.len();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(locale.grouping_separator());
        }
        out.push(digit);
    }

    let places = places as usize;
    if places > 0 {
        out.push(locale.decimal_separator());
        out.push_str(frac);
        for _ in frac.len()..places {
            out.push('0');
        }
    }

    out
}
