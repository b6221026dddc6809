//! Unsigned arithmetic native extension for the Onyx VM.
//!
//! Builds as a `cdylib` the host VM loads through its native service, and as
//! an `rlib` so hosts can register the same operations in-process. The logic
//! lives in [`ops`]; [`ffi`] holds the thin `extern "C"` exports that adapt
//! the raw calling convention.

pub mod ffi;
pub mod ops;

pub use ops::unsigned_add;
