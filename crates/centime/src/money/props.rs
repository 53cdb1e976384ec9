//! Property tests for money construction, arithmetic, and rendering.

use proptest::prelude::*;

use super::Money;

/// Amounts that survive any pairwise add/sub in the tests without overflow.
fn safe_amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000_i64..=1_000_000_000_000_i64
}

/// Scalar divisors excluding zero.
fn nonzero_divisor() -> impl Strategy<Value = i64> {
    prop_oneof![-1000_i64..=-1, 1_i64..=1000]
}

/// Non-negative amounts that are whole multiples of a quarter major unit;
/// their float renderings are binary-exact, so parsing them back is too.
fn quarter_amount() -> impl Strategy<Value = i64> {
    (0_i64..=4_000_000_000).prop_map(|n| n * 25)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_constructor_round_trips_amount(amount in any::<i64>()) {
        prop_assert_eq!(Money::new(amount).amount(), amount);
        prop_assert_eq!(i64::from(Money::new(amount)), amount);
    }

    #[test]
    fn prop_with_amount_equals_fresh_construction(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Money::new(a).with_amount(b), Money::new(b));
    }

    #[test]
    fn prop_add_sub_are_inverse(a in safe_amount(), b in safe_amount()) {
        let m = Money::new(a);
        prop_assert_eq!((m + b) - b, m);
        prop_assert_eq!((m - b) + b, m);
    }

    #[test]
    fn prop_add_is_commutative(a in safe_amount(), b in safe_amount()) {
        prop_assert_eq!(Money::new(a) + Money::new(b), Money::new(b) + Money::new(a));
        prop_assert_eq!(Money::new(a) + b, b + Money::new(a));
    }

    #[test]
    fn prop_round_lands_on_whole_major_units(amount in any::<i64>()) {
        let rounded = Money::new(amount).round();
        prop_assert_eq!(rounded.amount() % Money::MINOR_PER_MAJOR, 0);
        let distance = (rounded.amount() - amount).abs();
        prop_assert!(
            distance <= Money::MINOR_PER_MAJOR / 2,
            "{amount} rounded to {} which is {distance} away",
            rounded.amount()
        );
    }

    #[test]
    fn prop_round_is_idempotent(amount in any::<i64>()) {
        let once = Money::new(amount).round();
        prop_assert_eq!(once.round(), once);
    }

    #[test]
    fn prop_neg_is_involutive(amount in safe_amount()) {
        let m = Money::new(amount);
        prop_assert_eq!(-(-m), m);
        prop_assert_eq!(m + (-m), Money::zero());
    }

    #[test]
    fn prop_abs_is_non_negative(amount in safe_amount()) {
        prop_assert!(!Money::new(amount).abs().is_negative());
    }

    #[test]
    fn prop_floor_div_never_exceeds_true_div(a in safe_amount(), k in nonzero_divisor()) {
        let m = Money::new(a);
        let floored = m.checked_floor_div(k).unwrap();
        let rounded = m.checked_div(k).unwrap();
        prop_assert!(floored <= rounded);
    }

    #[test]
    fn prop_ratio_agrees_with_scalar_divide(a in safe_amount(), k in nonzero_divisor()) {
        let m = Money::new(a);
        prop_assert_eq!(
            m.checked_ratio(Money::new(k)).unwrap(),
            m.checked_div(k).unwrap().amount()
        );
    }

    #[test]
    fn prop_display_parse_round_trips(amount in quarter_amount()) {
        let m = Money::new(amount);
        let parsed = Money::from_string(&m.to_string()).unwrap();
        prop_assert_eq!(parsed, m, "render was {}", m);
    }

    #[test]
    fn prop_negative_renders_parse_positive(amount in quarter_amount()) {
        let m = Money::new(-amount);
        let parsed = Money::from_string(&m.to_string()).unwrap();
        prop_assert_eq!(parsed, m.abs(), "render was {}", m);
    }

    #[test]
    fn prop_integer_comparisons_mirror_amounts(a in any::<i64>(), b in any::<i64>()) {
        let m = Money::new(a);
        prop_assert_eq!(m == b, a == b);
        prop_assert_eq!(m < b, a < b);
        prop_assert_eq!(b < m, b < a);
    }
}
