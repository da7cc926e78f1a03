// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # HDDS Transport Plugin Loading
//!
//! Property-driven resolution, configuration, and dynamic loading of
//! pluggable network-transport backends for the HDDS wire layer.
//!
//! An application picks or substitutes a transport at runtime, without
//! recompilation, through a flat namespaced property store:
//!
//! ```text
//! UDPv4.send_socket_buffer_size = 65536      built-in UDPv4 tuning
//! mytp.library                  = libmytp.so external transport library
//! mytp.create_function          = make_mytp  factory symbol inside it
//! mytp.verbosity                = 2          private plugin configuration
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use hdds_transport_plugin::diag::{ConsoleSink, Level};
//! use hdds_transport_plugin::plugin::{load, Transport};
//! use hdds_transport_plugin::properties::PropertyStore;
//!
//! let mut store = PropertyStore::new();
//! store.insert("UDPv4.multicast_ttl", "4");
//!
//! let sink = ConsoleSink::new(Level::Warning);
//! let transport = load("UDPv4", &store, &sink).expect("built-in transport");
//! assert!(matches!(transport, Transport::BuiltinUdpV4(_)));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +--------------------------------------------------------------+
//! |                        plugin::loader                        |
//! |   name -> built-in UDPv4  |  name -> library + factory call  |
//! +--------------------------------------------------------------+
//! |  properties::resolve   |  properties::store  |  plugin::dl   |
//! |  typed defaults/warn   |  lookup + scoping   | dlopen/dlsym  |
//! +--------------------------------------------------------------+
//! |        transport::properties / transport::udpv4              |
//! |        property records, deep copy, finalize                 |
//! +--------------------------------------------------------------+
//! ```
//!
//! ## Error posture
//!
//! Malformed configuration never crashes or leaks: invalid scalar values
//! fall back to documented defaults with one warning through the injected
//! [`diag::DiagnosticSink`]; only missing mandatory plugin properties and
//! dynamic-load failures surface as typed [`plugin::LoadError`] values.

/// Injected diagnostic sink (console, file, log facade, memory).
pub mod diag;
/// Dynamic plugin loading (library resolution, factory contract, loader).
pub mod plugin;
/// Namespaced property store, scoping, and typed resolution.
pub mod properties;
/// RTPS wire-layer constants (sizes and submessage kinds only).
pub mod protocol;
/// Transport property records (common set + built-in UDPv4).
pub mod transport;

pub use diag::{ConsoleSink, DiagnosticSink, Level};
pub use plugin::{load, load_plugin, LoadError, LoadResult, NetworkAddress, Transport};
pub use properties::{PropertyEntry, PropertyStore, Resolver};
pub use transport::{SendBlocking, TransportProperties, UdpV4Properties, UDPV4_TRANSPORT_NAME};
