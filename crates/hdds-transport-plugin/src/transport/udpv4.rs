// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Built-in UDPv4 transport properties.
//!
//! The UDPv4 transport is configured in-process from the `UDPv4.*` property
//! namespace instead of going through a shared library. Roughly 15 scalar
//! and list fields are resolved with the standard default-and-warn policy;
//! every numeric field ends up holding either a validated parsed value or
//! its documented default, never a raw parse result.

use crate::diag::DiagnosticSink;
use crate::properties::{PropertyStore, Resolver};
use crate::protocol::rtps::MAX_PACKET_SIZE;
use crate::transport::properties::TransportProperties;

/// Reserved transport name for the built-in UDPv4 backend.
pub const UDPV4_TRANSPORT_NAME: &str = "UDPv4";

/// UDPv4 transport class identifier.
pub const UDPV4_CLASSID: i32 = 1;

/// Significant address bits for UDPv4 (IPv4 within a 16-octet address).
pub const UDPV4_ADDRESS_BIT_COUNT: i32 = 32;

/// Default maximum message size, in bytes.
pub const MESSAGE_SIZE_MAX_DEFAULT: i32 = 9216;

/// Reset value for socket buffer sizes that fail validation, in bytes.
pub const SOCKET_BUFFER_SIZE_DEFAULT: i32 = MESSAGE_SIZE_MAX_DEFAULT;

/// Default maximum number of gather-send buffers.
pub const GATHER_SEND_BUFFER_COUNT_MAX_DEFAULT: i32 = 3;

/// Default multicast TTL (link-local scope).
pub const MULTICAST_TTL_DEFAULT: i32 = 1;

/// Default upper bound of the transport-priority mapping range.
pub const TRANSPORT_PRIORITY_MAPPING_HIGH_DEFAULT: u32 = 0xff;

/// Send-blocking policy for the UDPv4 socket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(i32)]
pub enum SendBlocking {
    /// Never block on send
    Never = 0,
    /// Block on every send (default)
    #[default]
    Always = 1,
    /// Block on unicast sends only
    UnicastOnly = 2,
}

impl SendBlocking {
    /// Convert a resolved integer into a policy; `None` for anything
    /// outside `0..=2`.
    #[must_use]
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Never),
            1 => Some(Self::Always),
            2 => Some(Self::UnicastOnly),
            _ => None,
        }
    }
}

/// UDPv4 transport property record.
///
/// Embeds the common [`TransportProperties`] as `parent` and adds the
/// UDP-specific tuning knobs. [`Default`] yields the documented defaults for
/// every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdpV4Properties {
    /// Common transport limits and interface filters
    pub parent: TransportProperties,
    /// Send socket buffer size, bytes; must be at least `parent.message_size_max`
    pub send_socket_buffer_size: i32,
    /// Receive socket buffer size, bytes; must be at least `parent.message_size_max`
    pub recv_socket_buffer_size: i32,
    /// Unicast reception enabled
    pub unicast_enabled: bool,
    /// Multicast reception enabled
    pub multicast_enabled: bool,
    /// IP TTL applied to multicast sends
    pub multicast_ttl: i32,
    /// Disable loopback of own multicast packets
    pub multicast_loopback_disabled: bool,
    /// Loopback interface handling: -1 auto, 0 use, 1 ignore
    pub ignore_loopback_interface: i32,
    /// Skip interfaces that are not up and running
    pub ignore_nonrunning_interfaces: bool,
    /// Disable the zero-copy receive path
    pub no_zero_copy: bool,
    /// Socket blocking policy for sends
    pub send_blocking: SendBlocking,
    /// Bitmask selecting which priority bits map to the IP layer
    pub transport_priority_mask: u32,
    /// Lower bound of the priority mapping range
    pub transport_priority_mapping_low: u32,
    /// Upper bound of the priority mapping range
    pub transport_priority_mapping_high: u32,
    /// Send RTPS ping on startup
    pub send_ping: bool,
}

impl Default for UdpV4Properties {
    fn default() -> Self {
        Self {
            parent: TransportProperties {
                classid: UDPV4_CLASSID,
                address_bit_count: UDPV4_ADDRESS_BIT_COUNT,
                properties_bitmap: 0,
                gather_send_buffer_count_max: GATHER_SEND_BUFFER_COUNT_MAX_DEFAULT,
                message_size_max: MESSAGE_SIZE_MAX_DEFAULT,
                allow_interfaces: Vec::new(),
                deny_interfaces: Vec::new(),
                allow_multicast_interfaces: Vec::new(),
                deny_multicast_interfaces: Vec::new(),
            },
            send_socket_buffer_size: SOCKET_BUFFER_SIZE_DEFAULT,
            recv_socket_buffer_size: SOCKET_BUFFER_SIZE_DEFAULT,
            unicast_enabled: true,
            multicast_enabled: true,
            multicast_ttl: MULTICAST_TTL_DEFAULT,
            multicast_loopback_disabled: false,
            ignore_loopback_interface: -1,
            ignore_nonrunning_interfaces: false,
            no_zero_copy: false,
            send_blocking: SendBlocking::Always,
            transport_priority_mask: 0,
            transport_priority_mapping_low: 0,
            transport_priority_mapping_high: TRANSPORT_PRIORITY_MAPPING_HIGH_DEFAULT,
            send_ping: true,
        }
    }
}

impl UdpV4Properties {
    /// Resolve the full UDPv4 record from the `UDPv4.*` namespace.
    ///
    /// Parent limits resolve first so that both socket buffer sizes can
    /// floor-validate against the resolved `message_size_max` rather than a
    /// mid-parse default. Every invalid field falls back to its documented
    /// default with one warning through `sink`; resolution itself cannot
    /// fail.
    #[must_use]
    pub fn from_store(store: &PropertyStore, sink: &dyn DiagnosticSink) -> Self {
        let mut props = Self::default();
        let resolver = Resolver::new(store, UDPV4_TRANSPORT_NAME, sink);

        // Parent limits first: the buffer-size floors depend on them.
        props.parent.message_size_max = resolver.i32_field(
            "parent.message_size_max",
            1..=MAX_PACKET_SIZE as i32,
            MESSAGE_SIZE_MAX_DEFAULT,
        );
        props.parent.gather_send_buffer_count_max = resolver.i32_min_field(
            "parent.gather_send_buffer_count_max",
            1,
            GATHER_SEND_BUFFER_COUNT_MAX_DEFAULT,
        );
        props.parent.allow_interfaces =
            resolver.single_interface_list("parent.allow_interfaces_list");

        props.send_socket_buffer_size = resolver.i32_min_field(
            "send_socket_buffer_size",
            props.parent.message_size_max,
            SOCKET_BUFFER_SIZE_DEFAULT,
        );
        props.recv_socket_buffer_size = resolver.i32_min_field(
            "recv_socket_buffer_size",
            props.parent.message_size_max,
            SOCKET_BUFFER_SIZE_DEFAULT,
        );

        props.unicast_enabled = resolver.flag_field("unicast_enabled", true);
        props.multicast_enabled = resolver.flag_field("multicast_enabled", true);
        props.multicast_ttl =
            resolver.i32_field("multicast_ttl", 0..=255, MULTICAST_TTL_DEFAULT);
        props.multicast_loopback_disabled =
            resolver.flag_field("multicast_loopback_disabled", false);
        props.ignore_loopback_interface =
            resolver.i32_field("ignore_loopback_interface", -1..=1, -1);
        props.ignore_nonrunning_interfaces =
            resolver.flag_field("ignore_nonrunning_interfaces", false);
        props.no_zero_copy = resolver.flag_field("no_zero_copy", false);

        let blocking_raw =
            resolver.i32_field("send_blocking", 0..=2, SendBlocking::Always as i32);
        props.send_blocking =
            SendBlocking::from_i32(blocking_raw).unwrap_or(SendBlocking::Always);

        props.transport_priority_mask = resolver.mask_field("transport_priority_mask", 0);
        props.transport_priority_mapping_low =
            resolver.mask_field("transport_priority_mapping_low", 0);
        props.transport_priority_mapping_high = resolver.mask_field(
            "transport_priority_mapping_high",
            TRANSPORT_PRIORITY_MAPPING_HIGH_DEFAULT,
        );

        props.send_ping = resolver.flag_field("send_ping", true);

        props
    }
}
