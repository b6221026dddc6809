//! Host-side native service for the Onyx VM.
//!
//! The VM's `ncall` instruction carries a 16-bit call code; this crate maps
//! those codes to native functions. Extensions ship as dynamic libraries
//! described by TOML manifests (see [`manifest`]); hosts can also register
//! in-process Rust functions under the same contract. Dispatch validates
//! the declared argument count, then hands the extension a bounded slice
//! of tagged values and returns its result by value.

mod error;
mod library;
pub mod manifest;
mod service;

pub use error::{NativeError, NativeResult};
pub use library::NativeLibrary;
pub use manifest::{load_manifest_dir, FunctionEntry, LibraryManifest, ManifestScan};
pub use service::{BuiltinFn, LoadReport, NativeService};
