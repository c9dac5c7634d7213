//! Interpreting tokenized bytes as a record.

use alloc::vec::Vec;

use thiserror::Error;
use zerocopy::FromBytes;

use super::ErrorKind;

/// An error interpreting bytes as a record.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// Too few bytes for a header and checksum.
    #[error("Found {found} bytes, fewer than a record header and checksum need.")]
    HeaderTooShort { found: usize },
    /// Declared and found payload lengths do not match.
    #[error("Declared ({declared}) and found ({found}) payload lengths do not match.")]
    LengthMismatch { declared: u8, found: usize },
}

impl RecordError {
    /// The kind of this error, ignoring its details.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecordError::HeaderTooShort { .. } => ErrorKind::HeaderTooShort,
            RecordError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
        }
    }
}

/// The type of a record.
///
/// Codes outside the six defined by the format are kept as [`Unknown`], and
/// convert back to the same number.
///
/// [`Unknown`]: RecordType::Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// `00`
    Data,
    /// `01`
    EndOfFile,
    /// `02`
    ExtendedSegmentAddress,
    /// `03`
    StartSegmentAddress,
    /// `04`
    ExtendedLinearAddress,
    /// `05`
    StartLinearAddress,
    Unknown(u8),
}

impl From<u8> for RecordType {
    fn from(code: u8) -> Self {
        match code {
            0x00 => RecordType::Data,
            0x01 => RecordType::EndOfFile,
            0x02 => RecordType::ExtendedSegmentAddress,
            0x03 => RecordType::StartSegmentAddress,
            0x04 => RecordType::ExtendedLinearAddress,
            0x05 => RecordType::StartLinearAddress,
            _ => RecordType::Unknown(code),
        }
    }
}

impl From<RecordType> for u8 {
    fn from(record_type: RecordType) -> Self {
        match record_type {
            RecordType::Data => 0x00,
            RecordType::EndOfFile => 0x01,
            RecordType::ExtendedSegmentAddress => 0x02,
            RecordType::StartSegmentAddress => 0x03,
            RecordType::ExtendedLinearAddress => 0x04,
            RecordType::StartLinearAddress => 0x05,
            RecordType::Unknown(code) => code,
        }
    }
}

/// One decoded line.
///
/// Records are only produced by [`Record::parse`], and cannot be modified
/// afterward. The payload always holds exactly [`length`](Record::length)
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    length: u8,
    address: u16,
    record_type: RecordType,
    payload: Vec<u8>,
    checksum: u8,
}

#[repr(C, packed)]
#[derive(FromBytes)]
struct RecordHeader {
    length: u8,
    address: [u8; 2],
    record_type: u8,
}

impl Record {
    /// Interpret the bytes of a tokenized line as a record.
    ///
    /// The checksum is stored as found; see [`crate::sans::check`] to verify
    /// it.
    pub fn parse(r: &[u8]) -> Result<Self, RecordError> {
        let short = RecordError::HeaderTooShort { found: r.len() };

        let (header, rest) = r.split_first_chunk::<4>().ok_or(short)?;
        let (&checksum, payload) = rest.split_last().ok_or(short)?;

        let RecordHeader {
            length,
            address,
            record_type,
        } = zerocopy::transmute!(*header);

        if payload.len() != length as usize {
            Err(RecordError::LengthMismatch {
                declared: length,
                found: payload.len(),
            })?;
        }

        Ok(Self {
            length,
            address: u16::from_be_bytes(address),
            record_type: record_type.into(),
            payload: payload.to_vec(),
            checksum,
        })
    }

    /// The number of payload bytes.
    pub fn length(&self) -> u8 {
        self.length
    }

    /// The 16-bit load offset.
    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The checksum as written in the line.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Whether this record carries data, rather than describing the file.
    pub fn is_data(&self) -> bool {
        self.record_type == RecordType::Data
    }

    /// The header bytes as they appeared in the line.
    pub(crate) fn header_bytes(&self) -> [u8; 4] {
        let [high, low] = self.address.to_be_bytes();
        [self.length, high, low, self.record_type.into()]
    }
}
