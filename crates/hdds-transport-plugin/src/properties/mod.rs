// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Namespaced property configuration.
//!
//! Transport selection and tuning is driven entirely by a flat store of
//! dotted string keys (`UDPv4.send_socket_buffer_size`, `myplugin.library`).
//! This module provides the store itself, prefix scoping for nested
//! transports, and typed extraction with default-fallback semantics.
//!
//! # Modules
//!
//! - `store` - ordered key/value store with exact lookup and prefix scoping
//! - `resolve` - typed, validated field resolution with default fallback

pub mod resolve;
pub mod store;

pub use resolve::Resolver;
pub use store::{PropertyEntry, PropertyStore, MAX_KEY_LENGTH, MAX_VALUE_LENGTH};
