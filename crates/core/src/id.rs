// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket and note identifier generation.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Format a ticket ID from its category prefix and sequence number.
/// Format: {prefix}{sequence} with the sequence zero-padded to 4 digits, e.g. `FIRE0001`.
pub fn ticket_id(prefix: &str, sequence: u32) -> String {
    format!("{}{:04}", prefix, sequence)
}

/// Allocate the next ticket ID after `last`, skipping IDs that already exist.
/// Returns the ID and the sequence number it consumed, or an error once the
/// sequence for `prefix` runs out.
pub fn next_ticket_id<F>(prefix: &str, last: u32, exists: F) -> Result<(String, u32)>
where
    F: Fn(&str) -> bool,
{
    let mut sequence = last;
    loop {
        sequence = sequence.checked_add(1).ok_or_else(|| {
            Error::CorruptedData(format!("ticket sequence exhausted for {}", prefix))
        })?;
        let id = ticket_id(prefix, sequence);
        if !exists(&id) {
            return Ok((id, sequence));
        }
    }
}

/// Generate a note ID.
/// Format: note-{millis}-{hash} where hash is first 8 hex chars of
/// SHA256(ticket id + position + timestamp). Position keeps notes written in
/// the same millisecond distinct.
pub fn note_id(ticket_id: &str, position: usize, at: &DateTime<Utc>) -> String {
    let input = format!("{}:{}:{}", ticket_id, position, at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    format!("note-{}-{}", at.timestamp_millis(), hex::encode(&hash[..4]))
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
