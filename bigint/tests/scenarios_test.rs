//! Worked examples and boundary cases for BigInt arithmetic and text.

use bigint::{BigInt, BigIntError, Sign};

fn p(s: &str) -> BigInt {
    BigInt::parse(s).unwrap()
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_add_to_power_of_ten() {
    assert_eq!(p("123") + p("877"), p("1000"));
}

#[test]
fn test_mul_ten_pow_18_squared() {
    assert_eq!(
        p("1000000000000000000") * p("1000000000000000000"),
        p("1000000000000000000000000000000000000")
    );
}

#[test]
fn test_divmod_positive() {
    assert_eq!(p("17").div_rem(&p("5")).unwrap(), (p("3"), p("2")));
}

#[test]
fn test_divmod_negative_dividend() {
    assert_eq!(p("-17").div_rem(&p("5")).unwrap(), (p("-3"), p("-2")));
}

#[test]
fn test_carry_across_limbs() {
    assert_eq!(
        p("99999999999999999999") + 1u8,
        p("100000000000000000000")
    );
}

// ============================================================================
// Boundary cases
// ============================================================================

#[test]
fn test_zero_prints_without_sign() {
    assert_eq!(BigInt::zero().to_string(), "0");
    assert_eq!((p("5") - p("5")).to_string(), "0");
    assert_eq!((p("-5") * 0u8).to_string(), "0");
    assert_eq!((-p("0")).to_string(), "0");
}

#[test]
fn test_parse_negative_zero_is_zero() {
    assert_eq!(p("-0"), BigInt::zero());
    assert_eq!(p("-0").sign(), Sign::Positive);
}

#[test]
fn test_parse_leading_zeros() {
    assert_eq!(p("007"), BigInt::from(7u8));
}

#[test]
fn test_division_by_zero_fails() {
    assert_eq!(
        p("123456789012345678901234567890").div_rem(&BigInt::zero()),
        Err(BigIntError::DivisionByZero)
    );
    assert_eq!(p("-1").checked_div(&p("0")), None);
}

#[test]
fn test_native_minimums() {
    assert_eq!(BigInt::from(i8::MIN).to_string(), "-128");
    assert_eq!(BigInt::from(i32::MIN).to_string(), "-2147483648");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(
        BigInt::from(i128::MIN).to_string(),
        "-170141183460469231731687303715884105728"
    );
}

#[test]
fn test_native_maximums_roundtrip() {
    assert_eq!(u64::try_from(&BigInt::from(u64::MAX)), Ok(u64::MAX));
    assert_eq!(i64::try_from(&BigInt::from(i64::MIN)), Ok(i64::MIN));
    assert_eq!(
        u64::try_from(&(BigInt::from(u64::MAX) + 1u8)),
        Err(BigIntError::Overflow { target: "u64" })
    );
}

#[test]
fn test_invalid_text() {
    for text in ["", "-", "+", "1.5", "0x10", "1e9", "٣", "12 "] {
        assert!(
            matches!(BigInt::parse(text), Err(BigIntError::InvalidFormat { .. })),
            "{text:?} should be rejected"
        );
    }
}

// ============================================================================
// Larger values
// ============================================================================

#[test]
fn test_factorial_30() {
    let mut acc = BigInt::one();
    for i in 1..=30u32 {
        acc *= i;
    }
    assert_eq!(acc.to_string(), "265252859812191058636308480000000");
}

#[test]
fn test_power_of_two_shifts() {
    let v = BigInt::one() << 200u32;
    assert_eq!(
        v.to_string(),
        "1606938044258990275541962092341162602522202993782792835301376"
    );
    assert_eq!(v.bit_len(), 201);
    assert_eq!(&v >> 200u32, BigInt::one());
    assert_eq!(&v >> 201u32, BigInt::zero());
}

#[test]
fn test_long_division_many_limbs() {
    // (10^40 + 7) = (10^20 + 3) * (10^20 - 3) + 16
    let a = p("10000000000000000000000000000000000000007");
    let b = p("100000000000000000003");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q, p("99999999999999999997"));
    assert_eq!(r, p("16"));
    assert_eq!(q * &b + r, a);
}

#[test]
fn test_subtraction_borrow_chain() {
    let a = p("340282366920938463463374607431768211456"); // 2^128
    assert_eq!(
        (a - 1u8).to_string(),
        "340282366920938463463374607431768211455"
    );
}

#[test]
fn test_increment_decrement() {
    let mut v = p("-1");
    v.inc();
    assert_eq!(v, BigInt::zero());
    v.inc();
    assert_eq!(v, BigInt::one());
    let mut w = p("18446744073709551616");
    w.dec();
    assert_eq!(w, BigInt::from(u64::MAX));
}
