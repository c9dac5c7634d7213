//! Slice-based decoder implementation.

use super::{Error, FromRecords, Validation};

/// Decode records from a slice of a document, publishing to a receiver.
///
/// Lines are separated by `\n`, optionally preceded by `\r`. A final line
/// without a terminator is decoded like any other.
///
/// This method is also re-exported as `hexfile::avec::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl FromRecords, validation: Validation) -> Result<(), Error> {
    let mut lines = 0; // Counter of lines decoded, used to report errors.

    for line in r.split_inclusive(|b| *b == b'\n') {
        lines += 1;
        super::decode_line(lines, line, validation, o)?;
    }

    log::debug!("decoded {lines} lines from a slice of {} bytes", r.len());

    Ok(())
}
