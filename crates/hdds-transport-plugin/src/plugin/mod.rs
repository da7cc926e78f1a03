// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic transport plugin loading.
//!
//! A transport backend is selected by name at runtime: the reserved name
//! `UDPv4` resolves the built-in UDP backend in-process, any other name
//! loads an external shared library whose location and factory symbol come
//! from the `<name>.library` / `<name>.create_function` properties.
//!
//! # Modules
//!
//! - `dl` - the unsafe dynamic-loading boundary (`dlopen`/`dlsym`)
//! - `ffi` - the factory calling contract crossed into the loaded library
//! - `loader` - name resolution, load sequencing, and error taxonomy
//!
//! # Failure taxonomy
//!
//! Loading distinguishes *misconfigured* ([`LoadError::MissingProperty`])
//! from *misdeployed* ([`LoadError::LibraryOpen`], [`LoadError::SymbolResolve`])
//! from *plugin-internal* ([`LoadError::FactoryFailed`]) failures, so callers
//! can tell a bad XML profile from a missing `.so` on disk. Bad scalar values
//! inside an otherwise loadable configuration are never load failures; they
//! fall back to defaults with a warning.

pub mod dl;
pub mod ffi;
pub mod loader;

pub use dl::RawLibrary;
pub use ffi::{CreateTransportFn, FfiPropertyView, NetworkAddress, RawProperty, RawPropertySet};
pub use loader::{load, load_plugin, LoadError, LoadResult, PluginTransport, Transport};
