use claims::assert_err_eq;
use decimal_bigint::{BigInt, BigIntError};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Arbitrary signed decimal strings, leading zeros and `-0` included.
fn arb_decimal() -> impl Strategy<Value = String> {
    "[+-]?[0-9]{1,60}".prop_map(|s| s.to_string())
}

fn arb_big_int() -> impl Strategy<Value = BigInt> {
    arb_decimal().prop_map(|s| s.parse::<BigInt>().unwrap())
}

/// Values small enough that products fit in an `i128`.
fn arb_small() -> impl Strategy<Value = i64> {
    -999_999_999_999_999_999_i64..=999_999_999_999_999_999_i64
}

fn canonical(s: &str) -> String {
    let (negative, digits) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    }
}

proptest! {
    #[test]
    fn round_trip(s in arb_decimal()) {
        let val: BigInt = s.parse().unwrap();
        let text = val.to_string();
        prop_assert_eq!(&text, &canonical(&s));
        prop_assert_eq!(text.parse::<BigInt>().unwrap(), val);
    }

    #[test]
    fn additive_identity_and_inverse(x in arb_big_int()) {
        prop_assert_eq!(&x + &BigInt::zero(), x.clone());
        let sum = &x + &(-&x);
        prop_assert_eq!(&sum, &BigInt::zero());
        prop_assert!(!sum.is_negative());
    }

    #[test]
    fn commutative_and_associative(x in arb_big_int(), y in arb_big_int(), z in arb_big_int()) {
        prop_assert_eq!(&x + &y, &y + &x);
        prop_assert_eq!(&(&x + &y) + &z, &x + &(&y + &z));
        prop_assert_eq!(&x * &y, &y * &x);
        prop_assert_eq!(&(&x - &y) + &y, x.clone());
    }

    #[test]
    fn division_law(x in arb_big_int(), y in arb_big_int()) {
        prop_assume!(!y.is_zero());
        let q = &x / &y;
        let r = &x % &y;
        prop_assert_eq!(&(&q * &y) + &r, x.clone());
        if !r.is_zero() {
            prop_assert_eq!(r.is_negative(), x.is_negative());
        }
        prop_assert!(r.abs() < y.abs());
        let (q2, r2) = x.div_rem(&y).unwrap();
        prop_assert_eq!(q2, q);
        prop_assert_eq!(r2, r);
    }

    #[test]
    fn division_by_zero(x in arb_big_int()) {
        assert_err_eq!(x.checked_div(&BigInt::zero()), BigIntError::DivisionByZero);
        assert_err_eq!(x.checked_rem(&BigInt::zero()), BigIntError::DivisionByZero);
    }

    #[test]
    fn ordering_totality(x in arb_big_int(), y in arb_big_int()) {
        let lt = x < y;
        let eq = x == y;
        let gt = x > y;
        prop_assert_eq!([lt, eq, gt].iter().filter(|b| **b).count(), 1);
        prop_assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
        prop_assert_eq!(x.cmp(&y) == Ordering::Equal, eq);
    }

    #[test]
    fn agrees_with_i128(a in arb_small(), b in arb_small()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!((&x + &y).to_string(), (a + b).to_string());
        prop_assert_eq!((&x - &y).to_string(), (a - b).to_string());
        prop_assert_eq!((&x * &y).to_string(), (a * b).to_string());
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!((&x / &y).to_string(), (a / b).to_string());
            prop_assert_eq!((&x % &y).to_string(), (a % b).to_string());
        }
    }

    #[test]
    fn from_i64_matches_display(v in any::<i64>()) {
        let val = BigInt::from(v);
        prop_assert_eq!(val.to_string(), v.to_string());
        prop_assert_eq!(val.to_i64(), Some(v));
        prop_assert_eq!(-(-val.clone()), val);
    }

    #[test]
    fn increment_then_decrement(x in arb_big_int()) {
        let mut y = x.clone();
        y.increment();
        prop_assert_eq!(&y, &(&x + &BigInt::from(1)));
        let before = y.post_decrement();
        prop_assert_eq!(&before, &(&x + &BigInt::from(1)));
        prop_assert_eq!(y, x);
    }

    #[test]
    fn rejects_non_digits(prefix in "[0-9]{0,10}", bad in "[a-zA-Z.,_ ]", suffix in "[0-9]{0,10}") {
        let input = format!("{}{}{}", prefix, bad, suffix);
        let err = input.parse::<BigInt>().unwrap_err();
        let expected = BigIntError::InvalidFormat {
            character: bad.chars().next().unwrap(),
            position: prefix.len(),
        };
        prop_assert_eq!(err, expected);
    }
}

#[test]
fn malformed_inputs() {
    for input in ["12a3", "--5", "5.", "+-1", "1 000"] {
        assert!(matches!(
            input.parse::<BigInt>(),
            Err(BigIntError::InvalidFormat { .. })
        ), "{} should be rejected", input);
    }
}

#[test]
fn min_i64_negated_twice() {
    let min = BigInt::from(i64::MIN);
    assert_eq!(min.to_string(), "-9223372036854775808");
    let negated = -&min;
    assert_eq!(negated.to_string(), "9223372036854775808");
    assert_eq!(-negated, min);
}
