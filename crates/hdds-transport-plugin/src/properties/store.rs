// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ordered property store with exact-key lookup and namespace scoping.
//!
//! The store is populated by the configuration layer (QoS profiles) before
//! any transport is constructed and is read-only to the transport core.
//! Keys are plain ASCII dotted strings; values are plain ASCII strings.

/// Practical upper bound for one key segment, in bytes.
///
/// Inherited from the configuration layer's buffers. Documented limit only;
/// the store does not enforce it.
pub const MAX_KEY_LENGTH: usize = 255;

/// Practical upper bound for a property value, in bytes.
///
/// Documented limit only; the store does not enforce it.
pub const MAX_VALUE_LENGTH: usize = 16383;

/// One `name = value` configuration entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    /// Dotted key, e.g. `UDPv4.multicast_ttl`
    pub name: String,
    /// Raw string value, parsed on demand by the resolver
    pub value: String,
}

impl PropertyEntry {
    /// Create an entry from any string-like pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered sequence of unique-key property entries.
///
/// Insertion order is preserved (it matters for scoped views handed to
/// subtransports), lookup is by exact key. Inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    entries: Vec<PropertyEntry>,
}

impl PropertyStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one property.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.value = value;
        } else {
            self.entries.push(PropertyEntry { name, value });
        }
    }

    /// Exact-key lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    /// True if the key is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyEntry> {
        self.entries.iter()
    }

    /// Derive the private property view for a nested transport.
    ///
    /// Selects every entry whose key starts with `prefix` followed by a dot,
    /// strips that prefix (including the dot), and preserves relative order.
    /// The result holds exactly the matching entries, so the same resolver
    /// logic applies recursively without re-parsing full key paths.
    ///
    /// # Example
    ///
    /// ```
    /// use hdds_transport_plugin::properties::PropertyStore;
    ///
    /// let mut store = PropertyStore::new();
    /// store.insert("UDPv4.send_ping", "1");
    /// store.insert("Other.x", "2");
    ///
    /// let scoped = store.scoped("UDPv4");
    /// assert_eq!(scoped.len(), 1);
    /// assert_eq!(scoped.get("send_ping"), Some("1"));
    /// ```
    #[must_use]
    pub fn scoped(&self, prefix: &str) -> PropertyStore {
        let full_prefix = format!("{prefix}.");
        let entries = self
            .entries
            .iter()
            .filter_map(|e| {
                e.name.strip_prefix(&full_prefix).map(|stripped| {
                    PropertyEntry::new(stripped, e.value.clone())
                })
            })
            .collect();
        PropertyStore { entries }
    }
}

impl FromIterator<(String, String)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut store = PropertyStore::new();
        for (name, value) in iter {
            store.insert(name, value);
        }
        store
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut store = PropertyStore::new();
        for (name, value) in iter {
            store.insert(name, value);
        }
        store
    }
}
