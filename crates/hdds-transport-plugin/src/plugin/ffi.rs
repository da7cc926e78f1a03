// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Factory calling contract for externally loaded transports.
//!
//! A loaded library exposes one factory function that receives an output
//! slot for its default network address and a read-only view of its scoped
//! properties, and returns an opaque transport instance (or null on internal
//! failure). This module defines the `#[repr(C)]` types crossing that
//! boundary and the Rust-side owner of the C-string storage backing a
//! property view.

use crate::diag::{DiagnosticSink, Level};
use crate::properties::PropertyStore;
use std::ffi::{c_char, c_void, CString};

const ORIGIN: &str = "loader";

/// Transport-layer network address, 16 octets.
///
/// IPv4 addresses occupy the trailing 4 octets, matching RTPS locator
/// layout. The factory fills this with the transport's default address.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkAddress {
    pub octets: [u8; 16],
}

impl NetworkAddress {
    /// All-zero address.
    pub const UNSPECIFIED: Self = Self { octets: [0; 16] };
}

/// One property entry as seen by the loaded library.
///
/// Both pointers reference NUL-terminated strings owned by the
/// [`FfiPropertyView`] that produced this entry.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawProperty {
    pub name: *const c_char,
    pub value: *const c_char,
}

/// Read-only property sequence handed to the factory.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawPropertySet {
    /// Number of valid entries
    pub length: u32,
    /// Pointer to `length` consecutive entries
    pub entries: *const RawProperty,
}

/// The factory contract an external library must implement.
///
/// Returns an opaque transport instance, or null if the plugin failed
/// internally.
///
/// # Safety
///
/// This is the fixed ABI precondition of the plugin boundary: the symbol
/// configured via `<name>.create_function` must actually have this
/// signature. The loader casts by name without runtime signature
/// introspection; invoking a mismatched symbol is undefined behavior.
pub type CreateTransportFn = unsafe extern "C" fn(
    address_out: *mut NetworkAddress,
    properties_in: *const RawPropertySet,
) -> *mut c_void;

/// Owner of the C-compatible snapshot of a scoped property store.
///
/// The `CString` storage and the entry array live exactly as long as this
/// view, which must outlive the factory call it is built for. Entries whose
/// name or value contains an interior NUL cannot cross the C boundary and
/// are skipped with a warning (keys and values are plain ASCII by contract,
/// so this is a recoverable-configuration case, not a failure).
pub struct FfiPropertyView {
    strings: Vec<(CString, CString)>,
    entries: Vec<RawProperty>,
    set: RawPropertySet,
}

impl FfiPropertyView {
    /// Snapshot `store` into C-compatible storage.
    #[must_use]
    pub fn new(store: &PropertyStore, sink: &dyn DiagnosticSink) -> Self {
        let mut strings = Vec::with_capacity(store.len());
        for entry in store.iter() {
            match (CString::new(entry.name.as_str()), CString::new(entry.value.as_str())) {
                (Ok(name), Ok(value)) => strings.push((name, value)),
                _ => sink.record(
                    Level::Warning,
                    ORIGIN,
                    &format!(
                        "property {:?} contains an interior NUL, skipped from plugin view",
                        entry.name
                    ),
                ),
            }
        }

        let entries: Vec<RawProperty> = strings
            .iter()
            .map(|(name, value)| RawProperty {
                name: name.as_ptr(),
                value: value.as_ptr(),
            })
            .collect();

        let set = RawPropertySet {
            length: entries.len() as u32,
            entries: entries.as_ptr(),
        };

        Self {
            strings,
            entries,
            set,
        }
    }

    /// Pointer to the property set, valid while this view is alive.
    #[must_use]
    pub fn as_ptr(&self) -> *const RawPropertySet {
        &self.set
    }

    /// Number of entries visible to the plugin.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries survived the snapshot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
