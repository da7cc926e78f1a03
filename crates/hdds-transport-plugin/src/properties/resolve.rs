// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Typed, validated property resolution with default fallback.
//!
//! All scalar transport configuration follows the same recoverable-error
//! policy: an absent key keeps the documented default silently, while a
//! present-but-invalid value (unparsable, or outside the field's valid
//! range) emits one warning naming the full key and falls back to the same
//! default. Resolution never fails the caller and never mutates the store.
//!
//! Key construction is centralized here: callers pass field suffixes and the
//! resolver prepends its namespace, so `"multicast_ttl"` under namespace
//! `"UDPv4"` looks up `UDPv4.multicast_ttl`.

use crate::diag::{DiagnosticSink, Level};
use crate::properties::store::PropertyStore;
use std::ops::RangeInclusive;

const ORIGIN: &str = "resolver";

/// Typed field resolver over one namespace of a [`PropertyStore`].
///
/// Holds the store, the namespace prefix, and the diagnostic sink that
/// receives recoverable-configuration warnings.
pub struct Resolver<'a> {
    store: &'a PropertyStore,
    namespace: &'a str,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Resolver<'a> {
    /// Create a resolver for `namespace` (without trailing dot).
    #[must_use]
    pub fn new(store: &'a PropertyStore, namespace: &'a str, sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            store,
            namespace,
            sink,
        }
    }

    /// Build the full dotted key for a field suffix.
    #[must_use]
    pub fn key(&self, suffix: &str) -> String {
        format!("{}.{}", self.namespace, suffix)
    }

    /// Plain string lookup; absence carries no default and no diagnostic.
    ///
    /// Mandatory-string policy (e.g. `library`, `create_function`) is the
    /// caller's: this method only reports presence.
    #[must_use]
    pub fn string(&self, suffix: &str) -> Option<&'a str> {
        self.store.get(&self.key(suffix))
    }

    /// Resolve a signed integer field with an inclusive valid range.
    ///
    /// Absent key: returns `default` silently. Present but unparsable or out
    /// of range: one warning naming the key, then `default`.
    #[must_use]
    pub fn i32_field(&self, suffix: &str, valid: RangeInclusive<i32>, default: i32) -> i32 {
        let key = self.key(suffix);
        let Some(raw) = self.store.get(&key) else {
            return default;
        };
        match raw.trim().parse::<i32>() {
            Ok(value) if valid.contains(&value) => value,
            _ => {
                self.warn_bad_value(&key, raw);
                default
            }
        }
    }

    /// Resolve a signed integer field with a minimum floor.
    ///
    /// Used for fields whose lower bound comes from another resolved field
    /// (e.g. socket buffer size must be at least the max message size). A
    /// value below `min` is invalid and triggers the default-and-warn policy.
    #[must_use]
    pub fn i32_min_field(&self, suffix: &str, min: i32, default: i32) -> i32 {
        self.i32_field(suffix, min..=i32::MAX, default)
    }

    /// Resolve a boolean-as-int field (`0` or `1`).
    #[must_use]
    pub fn flag_field(&self, suffix: &str, default: bool) -> bool {
        let raw_default = i32::from(default);
        self.i32_field(suffix, 0..=1, raw_default) != 0
    }

    /// Resolve a mask field accepting `0x`-prefixed hexadecimal or decimal.
    ///
    /// Hexadecimal is tried first, then plain decimal, matching the priority
    /// mask and mapping-bound fields.
    #[must_use]
    pub fn mask_field(&self, suffix: &str, default: u32) -> u32 {
        let key = self.key(suffix);
        let Some(raw) = self.store.get(&key) else {
            return default;
        };
        let trimmed = raw.trim();
        let parsed = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .map_or_else(
                || trimmed.parse::<u32>(),
                |hex| u32::from_str_radix(hex, 16),
            );
        match parsed {
            Ok(value) => value,
            Err(_) => {
                self.warn_bad_value(&key, raw);
                default
            }
        }
    }

    /// Resolve a single-element interface list.
    ///
    /// The entire value becomes the one list element (length fixed at 1).
    /// An empty or whitespace-only value releases the list and treats the
    /// field as absent (length 0); the list is never left partially built.
    #[must_use]
    pub fn single_interface_list(&self, suffix: &str) -> Vec<String> {
        let key = self.key(suffix);
        let Some(raw) = self.store.get(&key) else {
            return Vec::new();
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.warn_bad_value(&key, raw);
            return Vec::new();
        }
        vec![trimmed.to_string()]
    }

    fn warn_bad_value(&self, key: &str, raw: &str) {
        self.sink.record(
            Level::Warning,
            ORIGIN,
            &format!("bad value for {key} ({raw:?}), using default"),
        );
    }
}
