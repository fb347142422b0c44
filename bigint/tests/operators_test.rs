//! Operator surface: owned/borrowed operands, native integers, compound
//! assignment and shifts.

use bigint::BigInt;

fn p(s: &str) -> BigInt {
    BigInt::parse(s).unwrap()
}

#[test]
fn test_every_native_type_converts() {
    assert_eq!(BigInt::from(200u8), 200u8);
    assert_eq!(BigInt::from(-200i16), -200i16);
    assert_eq!(BigInt::from(u32::MAX), u32::MAX);
    assert_eq!(BigInt::from(i64::MAX), i64::MAX);
    assert_eq!(BigInt::from(u128::MAX), u128::MAX);
    assert_eq!(BigInt::from(isize::MIN), isize::MIN);
    assert_eq!(BigInt::from(usize::MAX), usize::MAX);
}

#[test]
fn test_mixed_operands() {
    let big = p("100000000000000000000");
    assert_eq!(&big + 1u64, p("100000000000000000001"));
    assert_eq!(1u64 + &big, p("100000000000000000001"));
    assert_eq!(&big - 1i32, p("99999999999999999999"));
    assert_eq!(-1i32 - &big, p("-100000000000000000001"));
    assert_eq!(&big * -2i8, p("-200000000000000000000"));
    assert_eq!(&big / 7u16, p("14285714285714285714"));
    assert_eq!(&big % 7u16, 2u8);
    assert_eq!(1000i128 / BigInt::from(-7i32), -142i32);
    assert_eq!(1000i128 % BigInt::from(-7i32), 6i32);
}

#[test]
fn test_compound_with_bigint() {
    let mut v = p("12345678901234567890");
    let w = p("98765432109876543210");
    v += &w;
    assert_eq!(v, p("111111111011111111100"));
    v -= w.clone();
    assert_eq!(v, p("12345678901234567890"));
    v *= &w;
    assert_eq!(v, p("1219326311370217952237463801111263526900"));
    v /= &w;
    assert_eq!(v, p("12345678901234567890"));
    v %= p("1000");
    assert_eq!(v, 890u32);
}

#[test]
fn test_shift_operands() {
    let one = BigInt::one();
    assert_eq!(&one << 8u8, 256u32);
    assert_eq!(&one << 64u64, p("18446744073709551616"));
    assert_eq!(p("18446744073709551616") >> 63usize, 2u8);
    let mut v = p("-1024");
    v >>= 3u16;
    assert_eq!(v, -128i32);
    v <<= 1u32;
    assert_eq!(v, -256i32);
}

#[test]
fn test_negation() {
    let v = p("123456789012345678901234567890");
    assert_eq!(-&v, p("-123456789012345678901234567890"));
    assert_eq!(-(-v.clone()), v);
}

#[test]
fn test_sorting_mixed_signs() {
    let mut values: Vec<BigInt> = ["5", "-18446744073709551616", "0", "-3", "18446744073709551616"]
        .iter()
        .map(|s| p(s))
        .collect();
    values.sort();
    let sorted: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    assert_eq!(
        sorted,
        ["-18446744073709551616", "-3", "0", "5", "18446744073709551616"]
    );
}

#[test]
fn test_hash_set_dedups_zero() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(p("0"));
    set.insert(p("-0"));
    set.insert(p("5") - p("5"));
    assert_eq!(set.len(), 1);
}

#[test]
#[should_panic(expected = "BigInt division by zero")]
fn test_div_assign_by_zero_panics() {
    let mut v = p("10");
    v /= 0u8;
}
