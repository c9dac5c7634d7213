//! Helpers for computing and verifying record checksums.

use super::record::Record;

/// Accumulate a slice of bytes into a modulo-256 sum.
pub fn compute_sum(init: u8, r: &[u8]) -> u8 {
    r.iter().fold(init, |acc, b| acc.wrapping_add(*b))
}

/// Compute the checksum a record should carry.
///
/// This is the two's complement of the sum of every byte before the checksum
/// in the line, so that all bytes of a valid line sum to zero.
pub fn compute_checksum(record: &Record) -> u8 {
    let sum = compute_sum(0, &record.header_bytes());
    compute_sum(sum, record.payload()).wrapping_neg()
}

/// Whether a record's stored checksum matches its contents.
pub fn validate(record: &Record) -> bool {
    compute_checksum(record) == record.checksum()
}

impl Record {
    /// Whether the stored checksum matches the record's contents.
    ///
    /// Equivalent to [`validate`].
    pub fn is_valid(&self) -> bool {
        validate(self)
    }
}
