//! Extension library manifests.
//!
//! Each native extension ships one TOML manifest naming its library file per
//! platform and the functions it exports, keyed by the 16-bit call code the
//! VM's `ncall` instruction carries:
//!
//! ```toml
//! name = "mathext"
//! version = "0.1.0"
//! lib_filename_linux = "libonyx_mathext.so"
//! lib_filename_macos = "libonyx_mathext.dylib"
//! lib_filename_windows = "onyx_mathext.dll"
//!
//! [functions.unsigned_add]
//! symbol = "unsigned_add"
//! call_code = 0x30
//! argc = 2
//! ```

use crate::error::{NativeError, NativeResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest of one native extension library.
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryManifest {
    /// Extension name, used in diagnostics.
    pub name: String,
    /// Optional version string; informational only.
    pub version: Option<String>,

    pub lib_filename_linux: Option<String>,
    pub lib_filename_macos: Option<String>,
    pub lib_filename_windows: Option<String>,

    /// Exported functions, keyed by a manifest-local name.
    #[serde(default)]
    pub functions: BTreeMap<String, FunctionEntry>,
}

/// One exported function of an extension library.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionEntry {
    /// The symbol the loader resolves in the library.
    pub symbol: String,
    /// Call code the VM dispatches on.
    pub call_code: u16,
    /// Number of leading arguments the function consumes.
    pub argc: u32,
}

impl LibraryManifest {
    /// Parse a manifest from TOML text.
    pub fn from_toml(text: &str) -> NativeResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The library filename for the platform this host was compiled for.
    pub fn lib_filename(&self) -> Option<&str> {
        let filename = if cfg!(target_os = "windows") {
            &self.lib_filename_windows
        } else if cfg!(target_os = "macos") {
            &self.lib_filename_macos
        } else if cfg!(target_os = "linux") {
            &self.lib_filename_linux
        } else {
            &None
        };
        filename.as_deref()
    }
}

/// Result of scanning a manifest directory.
///
/// Unparseable files are recorded, not fatal: one broken manifest must not
/// take down every other extension.
#[derive(Debug, Default)]
pub struct ManifestScan {
    /// Successfully parsed manifests.
    pub manifests: Vec<LibraryManifest>,
    /// Files that failed to read or parse, with the reason.
    pub skipped: Vec<(PathBuf, NativeError)>,
}

/// Parse every regular file in `dir` as a library manifest.
///
/// Fails only when the directory itself cannot be read.
pub fn load_manifest_dir(dir: &Path) -> NativeResult<ManifestScan> {
    let mut scan = ManifestScan::default();
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.is_file().then_some(path)
        })
        .collect();
    paths.sort();

    for path in paths {
        let parsed = fs::read_to_string(&path)
            .map_err(NativeError::from)
            .and_then(|text| LibraryManifest::from_toml(&text));
        match parsed {
            Ok(manifest) => scan.manifests.push(manifest),
            Err(err) => scan.skipped.push((path, err)),
        }
    }
    Ok(scan)
}
