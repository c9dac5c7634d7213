//! Tokenizing a line of text into the bytes it encodes.

use core::{fmt, ops::Deref};

use thiserror::Error;

use super::{
    ErrorKind,
    digit::{InvalidDigit, decode_byte, decode_digit},
};

/// The character opening every record.
pub const MARKER: u8 = b':';

/// The longest legal line, excluding its terminator.
///
/// A marker followed by the digits of a 255-byte payload and the five bytes
/// surrounding it.
pub const MAX_LINE_LEN: usize = 1 + 2 * MAX_RECORD_BYTES;

/// The most bytes a single line can encode.
pub const MAX_RECORD_BYTES: usize = 255 + 5;

/// An error tokenizing a line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// The line does not begin with the record marker.
    #[error("Missing record marker.")]
    MissingMarker,
    /// The line holds an odd number of digits.
    #[error("Odd number of digits ({digits}).")]
    TruncatedLine { digits: usize },
    /// The line is longer than any legal record.
    #[error("Too long ({length} characters, limit {max}).", max = MAX_LINE_LEN)]
    LineTooLong { length: usize },
    /// A digit pair holds a non-hexadecimal character.
    #[error("Malformed byte at column {column}: {digit}")]
    MalformedByte {
        column: usize,
        #[source]
        digit: InvalidDigit,
    },
}

impl LineError {
    /// The kind of this error, ignoring its details.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LineError::MissingMarker => ErrorKind::MissingMarker,
            LineError::TruncatedLine { .. } => ErrorKind::TruncatedLine,
            LineError::LineTooLong { .. } => ErrorKind::LineTooLong,
            LineError::MalformedByte { .. } => ErrorKind::MalformedByte,
        }
    }
}

/// The bytes decoded from one line, marker excluded.
///
/// Dereferences to a slice of exactly the decoded bytes.
#[derive(Clone)]
pub struct Tokens {
    bytes: [u8; MAX_RECORD_BYTES],
    len: usize,
}

impl Deref for Tokens {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl fmt::Debug for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Tokenize a line into the bytes its digit pairs encode.
///
/// A single trailing `\n` or `\r\n` is ignored. A `\r` alone does not end a
/// line, as in the decoders. Lines are measured before any digit is decoded,
/// so an overlong line is always reported as such, whatever it contains.
pub fn tokenize(line: &[u8]) -> Result<Tokens, LineError> {
    let line = strip_terminator(line);

    if line.len() > MAX_LINE_LEN {
        return Err(LineError::LineTooLong { length: line.len() });
    }

    let Some((&MARKER, digits)) = line.split_first() else {
        return Err(LineError::MissingMarker);
    };

    if digits.len() % 2 != 0 {
        return Err(LineError::TruncatedLine {
            digits: digits.len(),
        });
    }

    let mut tokens = Tokens {
        bytes: [0; MAX_RECORD_BYTES],
        len: digits.len() / 2,
    };

    for (i, pair) in digits.chunks_exact(2).enumerate() {
        tokens.bytes[i] = decode_byte([pair[0], pair[1]]).map_err(|digit| {
            // Columns are 1-based and the marker occupies the first.
            let column = 2 + 2 * i + usize::from(decode_digit(pair[0]).is_ok());
            LineError::MalformedByte { column, digit }
        })?;
    }

    Ok(tokens)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => line,
    }
}
