// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Transport property records.
//!
//! A transport's tunable limits and interface filters live in a property
//! record that is resolved from the property store, deep-copied when
//! ownership crosses a boundary (e.g. into a factory call), and torn down
//! exactly once.
//!
//! # Modules
//!
//! - `properties` - common transport property set (limits + interface lists)
//! - `udpv4` - built-in UDPv4 specialization and its property resolution

pub mod properties;
pub mod udpv4;

pub use properties::TransportProperties;
pub use udpv4::{SendBlocking, UdpV4Properties, UDPV4_TRANSPORT_NAME};
