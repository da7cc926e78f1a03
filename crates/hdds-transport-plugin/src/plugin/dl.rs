// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Unsafe dynamic-loading boundary.
//!
//! [`RawLibrary`] is the only place in this crate that touches the
//! platform's dynamic linker. Everything outside this module is ordinary
//! safe code working with tagged results; everything the linker hands back
//! crosses through here as a raw pointer with its contract documented.
//!
//! Handles are deliberately never closed: once a transport built from a
//! loaded library has been returned to the caller, the library must stay
//! mapped for the life of the process, so `RawLibrary` carries no `Drop`.

use std::fmt;

/// Dynamic-linker failure (library not found, symbol not found).
///
/// Carries the linker's own message when one is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DlError(pub String);

impl fmt::Display for DlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DlError {}

#[cfg(unix)]
pub use imp::RawLibrary;

#[cfg(unix)]
mod imp {
    use super::DlError;
    use std::ffi::{c_void, CStr, CString};
    use std::ptr::NonNull;

    /// Handle to a dynamically loaded shared library.
    ///
    /// # Safety contract
    ///
    /// Symbols are resolved by name only. Casting a resolved symbol to a
    /// function type with a different actual signature, and then calling it,
    /// is undefined behavior at the ABI boundary; callers are responsible
    /// for configuring a symbol name that designates a conforming factory.
    #[derive(Debug)]
    pub struct RawLibrary {
        handle: NonNull<c_void>,
        path: String,
    }

    impl RawLibrary {
        /// Load the shared library at `path` (lazy binding).
        pub fn open(path: &str) -> Result<Self, DlError> {
            let c_path = CString::new(path)
                .map_err(|_| DlError(format!("library path contains NUL: {path:?}")))?;
            // Clear any stale linker error before the call.
            unsafe { libc::dlerror() };
            let handle = unsafe { libc::dlopen(c_path.as_ptr(), libc::RTLD_LAZY) };
            match NonNull::new(handle) {
                Some(handle) => Ok(Self {
                    handle,
                    path: path.to_string(),
                }),
                None => Err(DlError(last_linker_error())),
            }
        }

        /// Resolve `name` inside this library.
        ///
        /// A symbol that legitimately resolves to address zero is treated as
        /// unusable here: a null factory cannot be invoked.
        pub fn symbol(&self, name: &str) -> Result<NonNull<c_void>, DlError> {
            let c_name = CString::new(name)
                .map_err(|_| DlError(format!("symbol name contains NUL: {name:?}")))?;
            unsafe { libc::dlerror() };
            let address = unsafe { libc::dlsym(self.handle.as_ptr(), c_name.as_ptr()) };
            match NonNull::new(address) {
                Some(address) => Ok(address),
                None => Err(DlError(last_linker_error())),
            }
        }

        /// Path the library was loaded from.
        #[must_use]
        pub fn path(&self) -> &str {
            &self.path
        }
    }

    fn last_linker_error() -> String {
        let message = unsafe { libc::dlerror() };
        if message.is_null() {
            return "unknown dynamic linker error".to_string();
        }
        unsafe { CStr::from_ptr(message) }
            .to_string_lossy()
            .into_owned()
    }
}

#[cfg(not(unix))]
pub use imp::RawLibrary;

// Stub for platforms without a dlopen-style facility: same surface, every
// load reports a typed failure.
#[cfg(not(unix))]
mod imp {
    use super::DlError;
    use std::ffi::c_void;
    use std::ptr::NonNull;

    /// Handle to a dynamically loaded shared library (unsupported here).
    #[derive(Debug)]
    pub struct RawLibrary {
        path: String,
    }

    impl RawLibrary {
        pub fn open(path: &str) -> Result<Self, DlError> {
            let _ = path;
            Err(DlError(
                "dynamic library loading is not supported on this platform".to_string(),
            ))
        }

        pub fn symbol(&self, _name: &str) -> Result<NonNull<c_void>, DlError> {
            Err(DlError(
                "dynamic library loading is not supported on this platform".to_string(),
            ))
        }

        #[must_use]
        pub fn path(&self) -> &str {
            &self.path
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_missing_library_fails() {
        let err = RawLibrary::open("/nonexistent/libhdds_no_such_transport.so")
            .expect_err("open must fail for a missing file");
        assert!(!err.0.is_empty());
    }

    #[test]
    fn test_open_garbage_file_fails() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(b"this is not an ELF object")
            .expect("write garbage");
        let path = file.path().to_string_lossy().into_owned();
        assert!(RawLibrary::open(&path).is_err());
    }

    #[test]
    fn test_path_with_interior_nul_rejected() {
        let err = RawLibrary::open("bad\0path").expect_err("NUL path must fail");
        assert!(err.0.contains("NUL"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_missing_symbol_in_real_library() {
        let lib = RawLibrary::open("libc.so.6").expect("libc should load");
        assert_eq!(lib.path(), "libc.so.6");
        assert!(lib.symbol("hdds_definitely_no_such_symbol").is_err());
    }
}
