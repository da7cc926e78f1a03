// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Transport loading: name resolution, sequencing, and error taxonomy.
//!
//! Loading an external transport is three strictly sequential steps, each of
//! which short-circuits the rest on failure with no side effects:
//!
//! 1. resolve `<name>.library` and `<name>.create_function` (both mandatory)
//! 2. load the library and resolve the factory symbol
//! 3. invoke the factory with a scoped property view
//!
//! The reserved name `UDPv4` bypasses all of this and resolves the built-in
//! UDP backend in-process; its scalar fields follow the recoverable
//! default-and-warn policy, so the built-in path cannot fail on bad values.

use crate::diag::{DiagnosticSink, Level};
use crate::plugin::dl::RawLibrary;
use crate::plugin::ffi::{CreateTransportFn, FfiPropertyView, NetworkAddress};
use crate::properties::{PropertyStore, Resolver};
use crate::transport::udpv4::{UdpV4Properties, UDPV4_TRANSPORT_NAME};
use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

const ORIGIN: &str = "loader";

/// Property suffix naming the shared library of an external transport.
pub const LIBRARY_PROPERTY: &str = "library";

/// Property suffix naming the factory symbol of an external transport.
pub const CREATE_FUNCTION_PROPERTY: &str = "create_function";

/// Result alias for transport loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Why a transport could not be loaded.
///
/// The variants separate a misconfigured profile from a misdeployed
/// installation from a plugin that failed internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A mandatory property (`library` or `create_function`) is absent.
    /// There is no sensible default for either, so this is a hard failure,
    /// unlike the scalar default-and-warn policy.
    MissingProperty(String),

    /// The shared library could not be loaded.
    LibraryOpen { library: String, reason: String },

    /// The factory symbol could not be resolved inside the library.
    SymbolResolve {
        library: String,
        symbol: String,
        reason: String,
    },

    /// The factory ran but reported internal failure (returned null).
    FactoryFailed { plugin: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingProperty(key) => write!(f, "there is no property {key} defined"),
            Self::LibraryOpen { library, reason } => {
                write!(f, "cannot load the library {library}: {reason}")
            }
            Self::SymbolResolve {
                library,
                symbol,
                reason,
            } => write!(
                f,
                "cannot load the function {symbol} from library {library}: {reason}"
            ),
            Self::FactoryFailed { plugin } => {
                write!(f, "transport factory for {plugin} returned no instance")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl LoadError {
    /// True for failures fixable in configuration (vs deployment).
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingProperty(_))
    }
}

/// Transport instance built from an external library.
///
/// Keeps the library handle alive alongside the raw instance pointer; both
/// live for the rest of the process once handed to the caller, whose own
/// transport lifecycle is responsible for eventual teardown.
#[derive(Debug)]
pub struct PluginTransport {
    library: RawLibrary,
    instance: NonNull<c_void>,
    default_address: NetworkAddress,
}

impl PluginTransport {
    /// The opaque transport instance produced by the factory.
    #[must_use]
    pub fn instance_ptr(&self) -> NonNull<c_void> {
        self.instance
    }

    /// Default network address the factory reported.
    #[must_use]
    pub fn default_address(&self) -> NetworkAddress {
        self.default_address
    }

    /// Path of the library backing this transport.
    #[must_use]
    pub fn library_path(&self) -> &str {
        self.library.path()
    }
}

/// A loaded transport backend.
#[derive(Debug)]
pub enum Transport {
    /// Built-in UDPv4 backend, configured in-process
    BuiltinUdpV4(Box<UdpV4Properties>),
    /// Externally loaded transport
    Plugin(PluginTransport),
}

/// Load the transport named `name` from `store`.
///
/// The reserved name `UDPv4` resolves the built-in backend; anything else
/// goes through [`load_plugin`]. On success the returned handle is owned by
/// the caller.
pub fn load(
    name: &str,
    store: &PropertyStore,
    sink: &dyn DiagnosticSink,
) -> LoadResult<Transport> {
    if name == UDPV4_TRANSPORT_NAME {
        let props = UdpV4Properties::from_store(store, sink);
        return Ok(Transport::BuiltinUdpV4(Box::new(props)));
    }
    load_plugin(name, store, sink)
}

/// Load an external transport plugin named `name`.
///
/// Resolves the mandatory `library` and `create_function` properties, loads
/// the library, resolves the factory symbol, and invokes it with a property
/// view scoped to `name`. Each failure is recorded through `sink` and
/// returned as a typed error; no partially constructed transport escapes.
///
/// The resolved symbol is cast to [`CreateTransportFn`] without runtime
/// signature validation; configuring a symbol with a different actual
/// signature is undefined behavior at the ABI boundary.
pub fn load_plugin(
    name: &str,
    store: &PropertyStore,
    sink: &dyn DiagnosticSink,
) -> LoadResult<Transport> {
    let resolver = Resolver::new(store, name, sink);

    let library_name = resolver
        .string(LIBRARY_PROPERTY)
        .ok_or_else(|| missing(&resolver, LIBRARY_PROPERTY, sink))?;
    let function_name = resolver
        .string(CREATE_FUNCTION_PROPERTY)
        .ok_or_else(|| missing(&resolver, CREATE_FUNCTION_PROPERTY, sink))?;

    let library = RawLibrary::open(library_name).map_err(|e| {
        let err = LoadError::LibraryOpen {
            library: library_name.to_string(),
            reason: e.to_string(),
        };
        sink.record(Level::Error, ORIGIN, &err.to_string());
        err
    })?;

    let symbol = library.symbol(function_name).map_err(|e| {
        let err = LoadError::SymbolResolve {
            library: library_name.to_string(),
            symbol: function_name.to_string(),
            reason: e.to_string(),
        };
        sink.record(Level::Error, ORIGIN, &err.to_string());
        err
    })?;

    // Private, prefix-stripped configuration view for the plugin.
    let scoped = store.scoped(name);
    let view = FfiPropertyView::new(&scoped, sink);

    // ABI precondition: the configured symbol must be a conforming factory.
    let factory: CreateTransportFn =
        unsafe { std::mem::transmute::<*mut c_void, CreateTransportFn>(symbol.as_ptr()) };

    let mut default_address = NetworkAddress::UNSPECIFIED;
    let raw_instance = unsafe { factory(&mut default_address, view.as_ptr()) };
    drop(view);

    match NonNull::new(raw_instance) {
        Some(instance) => Ok(Transport::Plugin(PluginTransport {
            library,
            instance,
            default_address,
        })),
        None => {
            let err = LoadError::FactoryFailed {
                plugin: name.to_string(),
            };
            sink.record(Level::Error, ORIGIN, &err.to_string());
            Err(err)
        }
    }
}

fn missing(resolver: &Resolver<'_>, suffix: &str, sink: &dyn DiagnosticSink) -> LoadError {
    let err = LoadError::MissingProperty(resolver.key(suffix));
    sink.record(Level::Error, ORIGIN, &err.to_string());
    err
}
