//! Property tests for `BigInt` against `i128` reference arithmetic.
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use tern_value::BigInt;

fn floor_div(a: i128, b: i128) -> i128 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

fn big(n: i64) -> BigInt {
    BigInt::from(n)
}

proptest! {
    #[test]
    fn decimal_text_roundtrips(n in any::<i64>()) {
        let text = n.to_string();
        let parsed: BigInt = text.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn long_digit_strings_roundtrip(head in 1u8..=9, tail in proptest::collection::vec(0u8..=9, 0..60), negative in any::<bool>()) {
        let mut text = String::new();
        if negative {
            text.push('-');
        }
        text.push(char::from(b'0' + head));
        text.extend(tail.iter().map(|&d| char::from(b'0' + d)));
        let parsed: BigInt = text.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn add_sub_mul_match_i128(a in any::<i64>(), b in any::<i64>()) {
        let (wa, wb) = (i128::from(a), i128::from(b));
        prop_assert_eq!((big(a) + big(b)).to_string(), (wa + wb).to_string());
        prop_assert_eq!((big(a) - big(b)).to_string(), (wa - wb).to_string());
        prop_assert_eq!((big(a) * big(b)).to_string(), (wa * wb).to_string());
    }

    #[test]
    fn floor_division_matches_reference(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        let (wa, wb) = (i128::from(a), i128::from(b));
        let q = floor_div(wa, wb);
        let r = wa - wb * q;
        prop_assert_eq!(big(a).checked_div_floor(&big(b)).unwrap().to_string(), q.to_string());
        prop_assert_eq!(big(a).checked_mod_floor(&big(b)).unwrap().to_string(), r.to_string());
    }

    #[test]
    fn floor_division_law_holds(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        let (a, b) = (big(a), big(b));
        let (q, r) = a.checked_div_mod_floor(&b).unwrap();
        prop_assert_eq!(&(&b * &q) + &r, a);
        if !r.is_zero() {
            prop_assert_eq!(r.is_negative(), b.is_negative());
        }
    }

    #[test]
    fn ordering_matches_i64(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(big(a).cmp(&big(b)), a.cmp(&b));
    }
}
