// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Common transport property set.
//!
//! Scalar transport limits plus four independently-sized interface-filter
//! lists. Each list owns its elements; length and contents are a single
//! unit, so a non-empty list is never partially initialized and the length
//! field can never disagree with the element count.

/// Property record shared by every transport class.
///
/// An empty list is represented by length 0 with no allocation. Allocation
/// failure during [`copy_from`](Self::copy_from) is fatal (process abort);
/// there is no partial-copy recovery path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportProperties {
    /// Transport class identifier
    pub classid: i32,
    /// Number of significant bits in a transport address
    pub address_bit_count: i32,
    /// Transport capability bitmap
    pub properties_bitmap: u32,
    /// Maximum number of gather-send buffers per send call
    pub gather_send_buffer_count_max: i32,
    /// Maximum message size accepted by the transport, in bytes
    pub message_size_max: i32,
    /// Interfaces the transport may use
    pub allow_interfaces: Vec<String>,
    /// Interfaces the transport must not use
    pub deny_interfaces: Vec<String>,
    /// Interfaces allowed for multicast
    pub allow_multicast_interfaces: Vec<String>,
    /// Interfaces denied for multicast
    pub deny_multicast_interfaces: Vec<String>,
}

impl TransportProperties {
    /// Deep-copy `src` into this record.
    ///
    /// Scalars are copied field by field; each non-empty interface list is
    /// rebuilt with freshly owned elements, so the destination shares no
    /// storage with the source. An empty source list leaves the destination
    /// list empty.
    pub fn copy_from(&mut self, src: &TransportProperties) {
        self.classid = src.classid;
        self.address_bit_count = src.address_bit_count;
        self.properties_bitmap = src.properties_bitmap;
        self.gather_send_buffer_count_max = src.gather_send_buffer_count_max;
        self.message_size_max = src.message_size_max;

        copy_list(&mut self.allow_interfaces, &src.allow_interfaces);
        copy_list(&mut self.deny_interfaces, &src.deny_interfaces);
        copy_list(&mut self.allow_multicast_interfaces, &src.allow_multicast_interfaces);
        copy_list(&mut self.deny_multicast_interfaces, &src.deny_multicast_interfaces);
    }

    /// Release every interface list.
    ///
    /// Each list's elements are dropped, then its backing storage, and the
    /// length ends at 0. Idempotent: a second call finds all lengths already
    /// zero and no storage to release, so it is a no-op.
    pub fn finalize(&mut self) {
        release_list(&mut self.allow_interfaces);
        release_list(&mut self.deny_interfaces);
        release_list(&mut self.allow_multicast_interfaces);
        release_list(&mut self.deny_multicast_interfaces);
    }

    /// True if no interface list holds elements or storage.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        [
            &self.allow_interfaces,
            &self.deny_interfaces,
            &self.allow_multicast_interfaces,
            &self.deny_multicast_interfaces,
        ]
        .iter()
        .all(|list| list.is_empty() && list.capacity() == 0)
    }
}

fn copy_list(dst: &mut Vec<String>, src: &[String]) {
    dst.clear();
    if !src.is_empty() {
        dst.extend(src.iter().cloned());
    }
}

fn release_list(list: &mut Vec<String>) {
    if !list.is_empty() || list.capacity() > 0 {
        *list = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TransportProperties {
        TransportProperties {
            classid: 1,
            address_bit_count: 32,
            properties_bitmap: 0b101,
            gather_send_buffer_count_max: 3,
            message_size_max: 9216,
            allow_interfaces: vec!["eth0".into(), "eth1".into(), "lo".into()],
            deny_interfaces: Vec::new(),
            allow_multicast_interfaces: vec!["eth0".into()],
            deny_multicast_interfaces: Vec::new(),
        }
    }

    #[test]
    fn test_copy_is_deep_and_storage_disjoint() {
        let src = sample();
        let mut dst = TransportProperties::default();
        dst.copy_from(&src);

        assert_eq!(dst, src);
        // Deep equality but disjoint storage: element buffers differ.
        for (a, b) in dst.allow_interfaces.iter().zip(src.allow_interfaces.iter()) {
            assert_ne!(a.as_ptr(), b.as_ptr());
        }
        assert!(dst.deny_interfaces.is_empty());
    }

    #[test]
    fn test_copy_then_finalize_releases_both() {
        let mut src = sample();
        let mut dst = TransportProperties::default();
        dst.copy_from(&src);

        assert_eq!(dst.allow_interfaces.len(), 3);
        assert_eq!(dst.deny_interfaces.len(), 0);

        dst.finalize();
        src.finalize();
        assert_eq!(dst.allow_interfaces.len(), 0);
        assert_eq!(src.allow_interfaces.len(), 0);
        assert!(dst.is_finalized());
        assert!(src.is_finalized());
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut props = sample();
        props.finalize();
        let snapshot = props.clone();
        props.finalize();
        assert_eq!(props, snapshot);
        assert!(props.is_finalized());
    }

    #[test]
    fn test_finalize_keeps_scalars() {
        let mut props = sample();
        props.finalize();
        assert_eq!(props.classid, 1);
        assert_eq!(props.message_size_max, 9216);
    }

    #[test]
    fn test_copy_replaces_previous_lists() {
        let src = sample();
        let mut dst = TransportProperties {
            allow_interfaces: vec!["stale0".into(), "stale1".into()],
            ..TransportProperties::default()
        };
        dst.copy_from(&src);
        assert_eq!(dst.allow_interfaces, src.allow_interfaces);
    }
}
