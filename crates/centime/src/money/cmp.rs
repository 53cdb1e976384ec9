//! Equality and ordering for money values.
//!
//! Comparisons accept another money value or a bare `i64` amount, the same
//! operands addition takes; no float comparison impls exist. There is no
//! `Hash` impl: equality ignores the currency field, and a derived hash
//! would have to honor it.

use std::cmp::Ordering;

use super::Money;

/// Equality compares the minor-unit amounts only. The currency code does
/// not participate, so ten dollars equals ten euros; all current
/// constructors produce the default currency, which keeps the gap latent.
impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl Eq for Money {}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount.cmp(&other.amount)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for Money {
    fn eq(&self, other: &i64) -> bool {
        self.amount == *other
    }
}

impl PartialEq<Money> for i64 {
    fn eq(&self, other: &Money) -> bool {
        *self == other.amount
    }
}

impl PartialOrd<i64> for Money {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.amount.partial_cmp(other)
    }
}

impl PartialOrd<Money> for i64 {
    fn partial_cmp(&self, other: &Money) -> Option<Ordering> {
        self.partial_cmp(&other.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;

    #[test]
    fn test_eq_between_money_values() {
        assert_eq!(Money::new(1000), Money::new(1000));
        assert_ne!(Money::new(1000), Money::new(999));
    }

    #[test]
    fn test_eq_with_integers_both_directions() {
        assert_eq!(Money::new(1000), 1000);
        assert_eq!(1000, Money::new(1000));
        assert_ne!(Money::new(1000), 999);
        assert_ne!(999, Money::new(1000));
    }

    #[test]
    fn test_ordering_between_money_values() {
        assert!(Money::new(500) < Money::new(1000));
        assert!(Money::new(1000) > Money::new(999));
        assert!(Money::new(1000) <= Money::new(1000));
        assert!(Money::new(-1) < Money::zero());
    }

    #[test]
    fn test_ordering_with_integers_both_directions() {
        let m = Money::new(1000);
        assert!(m < 1001);
        assert!(m > 999);
        assert!(m >= 1000);
        assert!(m <= 1000);
        assert!(999 < m);
        assert!(1001 > m);
        assert!(1000 <= m);
    }

    #[test]
    fn test_ord_gives_min_max_and_sort() {
        assert_eq!(Money::new(3).max(Money::new(5)), Money::new(5));
        assert_eq!(Money::new(3).min(Money::new(5)), Money::new(3));

        let mut values = vec![Money::new(30), Money::new(-10), Money::new(20)];
        values.sort();
        assert_eq!(
            values,
            vec![Money::new(-10), Money::new(20), Money::new(30)]
        );
    }

    #[test]
    fn test_eq_ignores_currency_code() {
        let eur: Money =
            serde_json::from_value(serde_json::json!({"amount": 1000, "currency": "EUR"}))
                .unwrap();
        assert_eq!(eur.currency(), Currency::Eur);
        assert_eq!(eur, Money::new(1000));
    }
}
