//! Call-code registry and dispatch.

use crate::error::{NativeError, NativeResult};
use crate::library::NativeLibrary;
use crate::manifest::{self, LibraryManifest};
use onyx_abi::{RawValue, Value};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// An in-process native function registered without dynamic loading.
///
/// Same contract as a loaded symbol, minus the raw calling convention: the
/// host already owns a bounded slice.
pub type BuiltinFn = fn(&[RawValue]) -> RawValue;

#[derive(Debug)]
enum Entry {
    /// Resolved through a loaded library by symbol name.
    Dynamic {
        lib: usize,
        symbol: String,
        argc: u32,
    },
    /// A Rust function living in the host process.
    Builtin {
        name: String,
        argc: u32,
        func: BuiltinFn,
    },
}

impl Entry {
    fn argc(&self) -> u32 {
        match self {
            Self::Dynamic { argc, .. } | Self::Builtin { argc, .. } => *argc,
        }
    }
}

/// Report of a [`NativeService::load_dir`] pass.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Names of the extensions whose libraries were loaded and registered.
    pub loaded: Vec<String>,
    /// Manifest files or libraries that failed, with the reason.
    pub skipped: Vec<(PathBuf, NativeError)>,
}

/// The host-side registry of native functions.
///
/// Maps 16-bit call codes to either symbols in loaded extension libraries
/// or in-process builtins, and dispatches calls after validating the
/// argument count each entry declared.
#[derive(Debug, Default)]
pub struct NativeService {
    libs: Vec<NativeLibrary>,
    entries: HashMap<u16, Entry>,
}

impl NativeService {
    /// An empty service with nothing registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any entry claims `call_code`.
    pub fn is_registered(&self, call_code: u16) -> bool {
        self.entries.contains_key(&call_code)
    }

    /// The symbol or builtin name registered under `call_code`.
    pub fn entry_name(&self, call_code: u16) -> Option<&str> {
        self.entries.get(&call_code).map(|entry| match entry {
            Entry::Dynamic { symbol, .. } => symbol.as_str(),
            Entry::Builtin { name, .. } => name.as_str(),
        })
    }

    /// Scan `dir` for manifests and register every loadable extension.
    ///
    /// Broken manifests and unloadable libraries end up in the report's
    /// `skipped` list; only an unreadable directory is fatal.
    pub fn load_dir(&mut self, dir: &Path) -> NativeResult<LoadReport> {
        let scan = manifest::load_manifest_dir(dir)?;
        let mut report = LoadReport {
            skipped: scan.skipped,
            ..LoadReport::default()
        };

        for m in scan.manifests {
            let name = m.name.clone();
            match self.register_manifest(dir, m) {
                Ok(()) => report.loaded.push(name),
                Err(err) => report.skipped.push((dir.join(&name), err)),
            }
        }
        Ok(report)
    }

    /// Load the manifest's library for this platform and register its
    /// functions under their call codes.
    pub fn register_manifest(&mut self, dir: &Path, manifest: LibraryManifest) -> NativeResult<()> {
        let filename = manifest
            .lib_filename()
            .ok_or_else(|| NativeError::UnsupportedPlatform {
                lib: manifest.name.clone(),
            })?;

        // Reject collisions before touching the loader, so a bad manifest
        // leaves the registry unchanged.
        let mut claimed = HashSet::new();
        for entry in manifest.functions.values() {
            if self.entries.contains_key(&entry.call_code) || !claimed.insert(entry.call_code) {
                return Err(NativeError::DuplicateCallCode(entry.call_code));
            }
        }

        let path = dir.join(filename);
        let lib = NativeLibrary::open(&path, manifest)?;

        let lib_ind = self.libs.len();
        for entry in lib.manifest().functions.values() {
            self.entries.insert(
                entry.call_code,
                Entry::Dynamic {
                    lib: lib_ind,
                    symbol: entry.symbol.clone(),
                    argc: entry.argc,
                },
            );
        }
        self.libs.push(lib);
        Ok(())
    }

    /// Register an in-process function under `call_code`.
    pub fn register_builtin(
        &mut self,
        call_code: u16,
        name: &str,
        argc: u32,
        func: BuiltinFn,
    ) -> NativeResult<()> {
        if self.entries.contains_key(&call_code) {
            return Err(NativeError::DuplicateCallCode(call_code));
        }
        self.entries.insert(
            call_code,
            Entry::Builtin {
                name: name.to_string(),
                argc,
                func,
            },
        );
        Ok(())
    }

    /// Dispatch a call at the wire level.
    ///
    /// The declared arity is validated here; the extension's own
    /// missing-argument handling stays as defense below this check. The
    /// argument slice is passed through unmodified and the result returned
    /// by value — result placement is the VM's concern.
    pub fn call_raw(&self, call_code: u16, args: &[RawValue]) -> NativeResult<RawValue> {
        let entry = self
            .entries
            .get(&call_code)
            .ok_or(NativeError::UnknownCallCode(call_code))?;

        let expected = entry.argc();
        if args.len() < expected as usize {
            return Err(NativeError::ArityMismatch {
                code: call_code,
                expected,
                got: args.len(),
            });
        }

        match entry {
            Entry::Dynamic { lib, symbol, .. } => self.libs[*lib].call(symbol, args),
            Entry::Builtin { func, .. } => Ok(func(args)),
        }
    }

    /// Dispatch a call at the safe value level.
    pub fn call(&self, call_code: u16, args: &[Value]) -> NativeResult<Value> {
        let raw: Vec<RawValue> = args.iter().map(Value::to_raw).collect();
        Ok(Value::from_raw(self.call_raw(call_code, &raw)?))
    }
}
