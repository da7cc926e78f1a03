// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Protocol-level constants shared with the wire layer.
//!
//! Only fixed sizes and identifiers live here; serialization belongs to the
//! RTPS encoder/decoder, which is a separate collaborator.

pub mod rtps;

pub use rtps::{SubmessageKind, MAX_PACKET_SIZE};
