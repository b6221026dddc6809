//! The raw calling convention and its one safe adaptation point.
//!
//! Every native symbol the host VM dispatches to has the [`NativeFnRaw`]
//! signature: a pointer to the first argument plus an explicit count, a
//! single tagged value returned by value, no error channel. [`args_view`]
//! turns that pair into a bounded slice exactly once; everything past it is
//! safe code.

use crate::value::RawValue;

/// ABI of a native symbol: `fn(args, argc) -> result`.
///
/// `args` points at `argc` leading [`RawValue`]s owned by the caller for the
/// duration of the call. The callee must not read past `args[argc - 1]` and
/// must not mutate the arguments.
pub type NativeFnRaw = unsafe extern "C" fn(args: *const RawValue, argc: u32) -> RawValue;

/// Build a bounded argument slice from the raw calling convention.
///
/// A null `args` or a zero `argc` yields the empty slice, so callees stay
/// total even against a host that passes nothing.
///
/// # Safety
///
/// If `argc > 0` and `args` is non-null, `args` must point to at least
/// `argc` initialized `RawValue`s that stay alive and unaliased by writers
/// for the returned slice's lifetime.
pub unsafe fn args_view<'a>(args: *const RawValue, argc: u32) -> &'a [RawValue] {
    if args.is_null() || argc == 0 {
        return &[];
    }
    // SAFETY: Caller guarantees args points to argc live RawValues.
    unsafe { std::slice::from_raw_parts(args, argc as usize) }
}
