//! Loaded extension libraries.

use crate::error::{NativeError, NativeResult};
use crate::manifest::LibraryManifest;
use libloading::{Library, Symbol};
use onyx_abi::{NativeFnRaw, RawValue};
use std::path::Path;
use std::ptr;

/// One loaded extension library plus the manifest that described it.
///
/// The `Library` stays alive for as long as this struct does, and symbols
/// are resolved per call rather than cached, so no function pointer can
/// outlive the code it points into.
#[derive(Debug)]
pub struct NativeLibrary {
    library: Library,
    manifest: LibraryManifest,
}

impl NativeLibrary {
    /// Open the library file at `path`.
    ///
    /// Loading runs the library's initializers; manifests should only ever
    /// point into the host's trusted extension directory.
    pub fn open(path: &Path, manifest: LibraryManifest) -> NativeResult<Self> {
        // SAFETY: Dynamic loading executes library init code; the trust
        // boundary is the manifest directory, per the doc above.
        let library = unsafe { Library::new(path) }.map_err(|source| NativeError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { library, manifest })
    }

    /// The manifest this library was loaded from.
    pub fn manifest(&self) -> &LibraryManifest {
        &self.manifest
    }

    /// Resolve `symbol` and invoke it with the raw calling convention.
    ///
    /// An empty argument slice is passed as `(null, 0)`, matching what
    /// `onyx_abi::args_view` accepts on the callee side.
    pub fn call(&self, symbol: &str, args: &[RawValue]) -> NativeResult<RawValue> {
        // SAFETY: The manifest declares this symbol with the NativeFnRaw ABI.
        let func: Symbol<'_, NativeFnRaw> = unsafe { self.library.get(symbol.as_bytes()) }
            .map_err(|source| NativeError::MissingSymbol {
                lib: self.manifest.name.clone(),
                symbol: symbol.to_string(),
                source,
            })?;

        let args_ptr = if args.is_empty() {
            ptr::null()
        } else {
            args.as_ptr()
        };
        // SAFETY: args_ptr covers args.len() live values (or is null with
        // count 0); the callee must not read past that count.
        Ok(unsafe { func(args_ptr, args.len() as u32) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_is_load_error() {
        let manifest = LibraryManifest::from_toml("name = \"ghost\"").unwrap();
        let err = NativeLibrary::open(Path::new("/nonexistent/libghost.so"), manifest).unwrap_err();
        assert!(matches!(err, NativeError::Load { .. }));
    }
}
