//! C ABI exports for the host VM's native loader.
//!
//! These are thin wrappers: each builds the bounded argument view once via
//! [`onyx_abi::args_view`] and delegates to the safe body in [`crate::ops`].

use onyx_abi::{args_view, RawValue};

use crate::ops;

/// Sum of the first two arguments as unsigned 64-bit integers, wrapping.
///
/// Returns a zero uint when fewer than two arguments are passed.
///
/// # Safety
///
/// If `argc > 0` and `args` is non-null, `args` must point to at least
/// `argc` initialized `RawValue`s that stay valid for the duration of the
/// call.
#[no_mangle]
pub unsafe extern "C" fn unsigned_add(args: *const RawValue, argc: u32) -> RawValue {
    // SAFETY: Contract forwarded to the caller, per the function docs.
    let args = unsafe { args_view(args, argc) };
    ops::unsigned_add(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use onyx_abi::NativeFnRaw;
    use std::ptr;

    // The export must match the loader's symbol ABI exactly.
    const _: NativeFnRaw = unsigned_add;

    #[test]
    fn test_export_adds_through_raw_convention() {
        let args = [RawValue::uint(5), RawValue::uint(7)];
        // SAFETY: args holds 2 live values.
        let res = unsafe { unsigned_add(args.as_ptr(), 2) };
        assert_eq!(res, RawValue::uint(12));
    }

    #[test]
    fn test_export_tolerates_null_args() {
        // SAFETY: Null with argc 0 is the no-arguments call shape.
        let res = unsafe { unsigned_add(ptr::null(), 0) };
        assert_eq!(res, RawValue::uint(0));
    }

    #[test]
    fn test_export_single_argument_defaults_to_zero() {
        let args = [RawValue::uint(100)];
        // SAFETY: args holds 1 live value.
        let res = unsafe { unsigned_add(args.as_ptr(), 1) };
        assert_eq!(res, RawValue::uint(0));
    }
}
