//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module are suited to decoding whole files and
//! in-memory buffers, publishing every record to a [`FromRecords`] receiver.
//! A [`RecordStore`] is the usual receiver, and can be built directly with
//! [`RecordStore::from_slice`] or [`RecordStore::from_reader`].
//!
//! Decoding stops at the first malformed line, reporting its 1-based line
//! number. Whether a checksum mismatch also stops decoding is chosen with
//! [`Validation`].

use alloc::vec::Vec;

use thiserror::Error;

use crate::sans::{self, ErrorKind, record::Record};

pub mod listing;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;
pub mod store;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;
pub use store::RecordStore;

/// Receive decoded records, in file order.
///
/// Only complete, well-formed records are published; a line that fails to
/// decode never reaches the receiver.
pub trait FromRecords {
    /// Add a record to the receiver.
    fn add_record(&mut self, record: Record);
}

impl FromRecords for Vec<Record> {
    fn add_record(&mut self, record: Record) {
        self.push(record);
    }
}

/// When, if ever, to verify record checksums while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Publish every well-formed record, logging those with a bad checksum.
    ///
    /// Callers needing trustworthy data must check
    /// [`Record::is_valid`] or [`RecordStore::mismatches`] themselves.
    #[default]
    Deferred,
    /// Stop decoding at the first record with a bad checksum.
    Strict,
}

/// Errors occurring while decoding the lines of a document.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A line could not be decoded into a record.
    #[error("Line {line}: {source}")]
    Malformed { line: usize, source: sans::Error },
    /// Calculated and found checksums do not match.
    #[error("Line {line}: calculated ({calculated:#04x}) and found ({found:#04x}) checksums do not match.")]
    ChecksumMismatch {
        line: usize,
        found: u8,
        calculated: u8,
    },
}

impl Error {
    /// The 1-based number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            Error::Malformed { line, .. } | Error::ChecksumMismatch { line, .. } => *line,
        }
    }

    /// The kind of this error, ignoring its details.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Malformed { source, .. } => source.kind(),
            Error::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
        }
    }
}

/// Decode the `line`th line of a document and publish it to a receiver.
fn decode_line(
    line: usize,
    r: &[u8],
    validation: Validation,
    o: &mut impl FromRecords,
) -> Result<(), Error> {
    let record = sans::decode_line(r).map_err(|source| Error::Malformed { line, source })?;

    if !record.is_valid() {
        let found = record.checksum();
        let calculated = sans::check::compute_checksum(&record);

        match validation {
            Validation::Strict => Err(Error::ChecksumMismatch {
                line,
                found,
                calculated,
            })?,
            Validation::Deferred => log::warn!(
                "line {line}: calculated ({calculated:#04x}) and found ({found:#04x}) checksums do not match"
            ),
        }
    }

    log::trace!(
        "line {line}: {:?} record of {} bytes at {:#06x}",
        record.record_type(),
        record.length(),
        record.address()
    );

    o.add_record(record);

    Ok(())
}
