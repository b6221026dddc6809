//! Contract tests for the unsigned-add extension, driven through the public
//! surface the host VM sees: raw tagged values in, one raw tagged value out.

use onyx_abi::{RawValue, TypeKind, Value};
use onyx_mathext::unsigned_add;

#[test]
fn test_result_is_always_uint_kind() {
    for args in [
        vec![],
        vec![RawValue::uint(100)],
        vec![RawValue::uint(5), RawValue::uint(7)],
        vec![RawValue::new(3, 1.5f64.to_bits()), RawValue::new(4, 9)],
    ] {
        assert_eq!(unsigned_add(&args).kind, TypeKind::Uint.code());
    }
}

#[test]
fn test_sum_matches_wrapping_addition() {
    let cases = [
        (0u64, 0u64),
        (5, 7),
        (u64::MAX, 1),
        (u64::MAX, u64::MAX),
        (1 << 63, 1 << 63),
    ];
    for (a, b) in cases {
        let res = unsigned_add(&[RawValue::uint(a), RawValue::uint(b)]);
        assert_eq!(res.payload, a.wrapping_add(b));
    }
}

#[test]
fn test_missing_operands_yield_zero_uint() {
    assert_eq!(unsigned_add(&[]), RawValue::uint(0));
    assert_eq!(unsigned_add(&[RawValue::uint(100)]), RawValue::uint(0));
}

#[test]
fn test_arguments_are_not_mutated() {
    let args = [RawValue::uint(5), RawValue::uint(7)];
    let before = args;
    let _ = unsigned_add(&args);
    assert_eq!(args, before);
}

#[test]
fn test_result_decodes_as_safe_uint() {
    let res = unsigned_add(&[RawValue::uint(40), RawValue::uint(2)]);
    assert_eq!(Value::from_raw(res), Value::Uint(42));
}
