//! Tagged value contract for the Onyx native boundary.
//!
//! This crate defines the types both sides of the VM/native boundary agree
//! on: the wire-level [`RawValue`] record, the [`TypeKind`] registry, the
//! safe [`Value`] view, and the calling convention a native symbol honors.
//! The host VM links it to dispatch calls; extension crates link it to
//! implement them.

mod boundary;
mod value;

pub use boundary::{args_view, NativeFnRaw};
pub use value::{RawValue, TypeKind, Value};
