//! Native service error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the host-side native service.
#[derive(Debug, Error)]
pub enum NativeError {
    /// The dynamic loader could not open an extension library.
    #[error("failed to load native library '{path}': {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// A manifest file or directory could not be read.
    #[error("manifest I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A manifest file is not valid TOML or misses required fields.
    #[error("invalid manifest: {0}")]
    Manifest(#[from] toml::de::Error),

    /// No entry is registered under this call code.
    #[error("unknown native call code 0x{0:x}")]
    UnknownCallCode(u16),

    /// Two entries claim the same call code.
    #[error("duplicate native call code 0x{0:x}")]
    DuplicateCallCode(u16),

    /// The library loaded but does not export the manifest's symbol.
    #[error("symbol '{symbol}' not found in library '{lib}': {source}")]
    MissingSymbol {
        lib: String,
        symbol: String,
        #[source]
        source: libloading::Error,
    },

    /// Fewer arguments than the manifest declares for this call.
    #[error("call 0x{code:x} expects {expected} arguments, got {got}")]
    ArityMismatch { code: u16, expected: u32, got: usize },

    /// The manifest names no library file for the current platform.
    #[error("library '{lib}' has no filename for this platform")]
    UnsupportedPlatform { lib: String },
}

/// Native service result type alias.
pub type NativeResult<T> = Result<T, NativeError>;
