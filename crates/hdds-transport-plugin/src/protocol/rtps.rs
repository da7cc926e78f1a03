// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! RTPS message constants (DDS-RTPS v2.x Sec.8.3 / Sec.9.4).
//!
//! Fixed header and submessage field sizes plus the submessage kind
//! enumeration. The transport layer only needs these for buffer sizing and
//! classification; no encode/decode logic lives in this crate.

/// Size of the RTPS protocol magic ("RTPS"), bytes
pub const RTPS_HEADER_PROTOCOL_SIZE: usize = 4;
/// Size of the protocol version field, bytes
pub const RTPS_HEADER_VERSION_SIZE: usize = 2;
/// Size of the vendor id field, bytes
pub const RTPS_HEADER_VENDORID_SIZE: usize = 2;
/// Size of the GUID prefix field, bytes
pub const RTPS_HEADER_GUIDPREFIX_SIZE: usize = 12;

/// Full RTPS message header size, bytes
pub const RTPS_HEADER_SIZE: usize = RTPS_HEADER_PROTOCOL_SIZE
    + RTPS_HEADER_VERSION_SIZE
    + RTPS_HEADER_VENDORID_SIZE
    + RTPS_HEADER_GUIDPREFIX_SIZE;

/// Submessage header: kind octet
pub const RTPS_SUBMESSAGE_HEADER_ID_SIZE: usize = 1;
/// Submessage header: flags octet
pub const RTPS_SUBMESSAGE_HEADER_FLAGS_SIZE: usize = 1;
/// Submessage header: octets-to-next-header field
pub const RTPS_SUBMESSAGE_HEADER_OCTETSTONEXTHEADER_SIZE: usize = 2;

/// Submessage body: extra flags field
pub const RTPS_SUBMESSAGE_BODY_EXTRAFLAGS_SIZE: usize = 2;
/// Submessage body: octets-to-inline-QoS field
pub const RTPS_SUBMESSAGE_BODY_OCTETSTOINLINEQOS_SIZE: usize = 2;
/// Submessage body: reader + writer entity ids
pub const RTPS_SUBMESSAGE_BODY_ENTITIESID_SIZE: usize = 8;
/// Submessage body: sequence number field
pub const RTPS_SUBMESSAGE_BODY_SEQUENCENUMBER_SIZE: usize = 8;

/// InfoTimestamp: seconds field
pub const RTPS_SUBMESSAGE_INFOTS_TIMESTAMP_SEC_SIZE: usize = 4;
/// InfoTimestamp: nanoseconds field
pub const RTPS_SUBMESSAGE_INFOTS_TIMESTAMP_NANOSEC_SIZE: usize = 4;
/// InfoTimestamp: full timestamp field
pub const RTPS_SUBMESSAGE_INFOTS_TIMESTAMP_SIZE: usize =
    RTPS_SUBMESSAGE_INFOTS_TIMESTAMP_SEC_SIZE + RTPS_SUBMESSAGE_INFOTS_TIMESTAMP_NANOSEC_SIZE;

/// Maximum UDP packet size supported by the transport layer, bytes.
///
/// The RTPS submessage length field is a u16, so ~64 KiB bounds any single
/// reassembled message.
pub const MAX_PACKET_SIZE: usize = 65536;

/// RTPS submessage kinds (wire discriminants).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SubmessageKind {
    Pad = 0x01,
    AckNack = 0x06,
    Heartbeat = 0x07,
    Gap = 0x08,
    InfoTimestamp = 0x09,
    InfoSource = 0x0c,
    InfoReplyIp4 = 0x0d,
    InfoDestination = 0x0e,
    InfoReply = 0x0f,
    NackFrag = 0x12,
    HeartbeatFrag = 0x13,
    Data = 0x15,
    DataFrag = 0x16,
}

impl SubmessageKind {
    /// Number of defined submessage kinds.
    pub const COUNT: usize = 13;

    /// Decode a wire discriminant; `None` for unknown kinds.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Self::Pad),
            0x06 => Some(Self::AckNack),
            0x07 => Some(Self::Heartbeat),
            0x08 => Some(Self::Gap),
            0x09 => Some(Self::InfoTimestamp),
            0x0c => Some(Self::InfoSource),
            0x0d => Some(Self::InfoReplyIp4),
            0x0e => Some(Self::InfoDestination),
            0x0f => Some(Self::InfoReply),
            0x12 => Some(Self::NackFrag),
            0x13 => Some(Self::HeartbeatFrag),
            0x15 => Some(Self::Data),
            0x16 => Some(Self::DataFrag),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_size() {
        assert_eq!(RTPS_HEADER_SIZE, 20);
    }

    #[test]
    fn test_timestamp_size() {
        assert_eq!(RTPS_SUBMESSAGE_INFOTS_TIMESTAMP_SIZE, 8);
    }

    #[test]
    fn test_submessage_kind_roundtrip() {
        for kind in [
            SubmessageKind::Pad,
            SubmessageKind::AckNack,
            SubmessageKind::Heartbeat,
            SubmessageKind::Gap,
            SubmessageKind::InfoTimestamp,
            SubmessageKind::InfoSource,
            SubmessageKind::InfoReplyIp4,
            SubmessageKind::InfoDestination,
            SubmessageKind::InfoReply,
            SubmessageKind::NackFrag,
            SubmessageKind::HeartbeatFrag,
            SubmessageKind::Data,
            SubmessageKind::DataFrag,
        ] {
            assert_eq!(SubmessageKind::from_u8(kind as u8), Some(kind));
        }
        assert_eq!(SubmessageKind::from_u8(0x00), None);
        assert_eq!(SubmessageKind::from_u8(0xff), None);
    }

    #[test]
    fn test_submessage_kind_count() {
        assert_eq!(SubmessageKind::COUNT, 13);
    }
}
