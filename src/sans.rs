//! Line-at-a-time primitives for implementing decoders.
//!
//! This module is intended for applications that need fine control over how
//! lines are sourced and how records are stored. See [`crate::avec`] for
//! implementations covering common decoding patterns.
//!
//! # Architecture
//!
//! Decoding a line is a short pipeline of pure functions, each owning one
//! stage and one error type:
//!
//! 1. [`line::tokenize`] strips the line terminator, checks the marker and the
//!    line length, and decodes digit pairs into a fixed buffer with the
//!    helpers in [`digit`].
//!
//! 2. [`record::Record::parse`] interprets the decoded bytes as a header,
//!    payload and checksum.
//!
//! 3. [`check::validate`] recomputes the checksum. This stage is never run
//!    implicitly; decoders choose whether to skip it, report it or treat a
//!    mismatch as fatal.
//!
//! [`decode_line`] chains the first two stages. Nothing in this module
//! performs I/O or keeps state between lines, so implementers must take care
//! of:
//!
//! - Splitting the input into lines, and counting them for error reports.
//!
//! - Bounding how much of an overlong line is buffered before handing it to
//!   the tokenizer, which rejects it as [`line::LineError::LineTooLong`].
//!
//! Implementers are recommended to begin by studying and modifying a decoder
//! from the [`crate::avec`] module.

use thiserror::Error;

pub mod check;
pub mod digit;
pub mod line;
pub mod record;

use line::LineError;
use record::{Record, RecordError};

/// An error decoding a single line into a record.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The line is not a well-formed sequence of digit pairs.
    #[error(transparent)]
    Line(#[from] LineError),
    /// The decoded bytes do not have the shape of a record.
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl Error {
    /// The kind of this error, ignoring its details.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Line(e) => e.kind(),
            Error::Record(e) => e.kind(),
        }
    }
}

/// Every way a line can fail to decode or verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The line does not begin with the record marker.
    MissingMarker,
    /// The line holds an odd number of digits.
    TruncatedLine,
    /// The line is longer than any legal record.
    LineTooLong,
    /// A digit pair holds a non-hexadecimal character.
    MalformedByte,
    /// The line decodes to fewer bytes than a record header needs.
    HeaderTooShort,
    /// The declared payload length disagrees with the payload found.
    LengthMismatch,
    /// The recomputed checksum disagrees with the stored one.
    ChecksumMismatch,
}

/// Decode one line, with or without its terminator, into a record.
///
/// The checksum is not verified.
pub fn decode_line(line: &[u8]) -> Result<Record, Error> {
    let tokens = line::tokenize(line)?;
    Ok(Record::parse(&tokens)?)
}
