//! Safe operation bodies, working on bounded argument slices.

use onyx_abi::RawValue;

/// Sum the first two arguments as unsigned 64-bit integers.
///
/// Pure and total: with fewer than two arguments the result is a zero uint
/// rather than an error, and overflow wraps mod 2^64. Payloads are taken
/// as-is; the kind discriminants of the arguments are not inspected.
pub fn unsigned_add(args: &[RawValue]) -> RawValue {
    let (a, b) = match args {
        [a, b, ..] => (a.payload, b.payload),
        _ => return RawValue::uint(0),
    };
    RawValue::uint(a.wrapping_add(b))
}
