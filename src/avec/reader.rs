//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{
    io::{BufRead, Read},
    vec::Vec,
};

use thiserror::Error;

use crate::sans::{ErrorKind, line::MAX_LINE_LEN};

use super::{FromRecords, Validation};

extern crate std;

/// The most bytes buffered for a single line.
///
/// Room for the longest legal line and a `\r\n` terminator, plus one byte so
/// that anything longer is still seen to be too long.
const LINE_LIMIT: usize = MAX_LINE_LEN + 3;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An error in the document read.
    #[error(transparent)]
    Decode(#[from] super::Error),
}

impl Error {
    /// The 1-based number of the offending line, unless reading failed.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Io(_) => None,
            Error::Decode(e) => Some(e.line()),
        }
    }

    /// The kind of this error, unless reading failed.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Io(_) => None,
            Error::Decode(e) => Some(e.kind()),
        }
    }
}

/// Decode records from a reader of a document, publishing to a receiver.
///
/// Lines are read one at a time, and no more than a little over the longest
/// legal line is ever buffered, however long a line in the document is.
///
/// This method is also re-exported as `hexfile::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(
    r: &mut impl BufRead,
    o: &mut impl FromRecords,
    validation: Validation,
) -> Result<(), Error> {
    let mut buf = Vec::with_capacity(LINE_LIMIT);
    let mut lines = 0; // Counter of lines decoded, used to report errors.

    loop {
        buf.clear();

        if r.by_ref().take(LINE_LIMIT as u64).read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        lines += 1;
        super::decode_line(lines, &buf, validation, o)?;
    }

    log::debug!("decoded {lines} lines from a reader");

    Ok(())
}
