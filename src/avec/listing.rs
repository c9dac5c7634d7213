//! Plain-text listings of data records.
//!
//! Each data record becomes one line: its address as six hexadecimal digits,
//! a tab, its payload as space-separated digit pairs, a tab, and its payload
//! again as characters. Records describing the file rather than carrying data
//! are left out.
//!
//! ```text
//! 002462	46 4c 55 49 44 20 50 52 4f 46 49 4c 45 00 46 4c 	F L U I D   P R O F I L E  F L
//! ```
//!
//! Listings are rendered as bytes rather than text: the export style copies
//! payload bytes verbatim, so its output is only valid UTF-8 when the payload
//! is ASCII.

use alloc::vec::Vec;

use crate::sans::{digit::encode_byte, record::Record};

/// How payload bytes are rendered as characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Every byte as is, each followed by a space.
    #[default]
    Export,
    /// Printable ASCII as itself and anything else as `.`, without
    /// separators. Always valid ASCII.
    Console,
}

/// Append the listing line of a single record, whatever its type.
pub fn write_record(out: &mut Vec<u8>, record: &Record, style: Style) {
    out.extend_from_slice(&encode_address(record.address()));
    out.push(b'\t');

    for &b in record.payload() {
        out.extend_from_slice(&encode_byte(b));
        out.push(b' ');
    }

    out.push(b'\t');

    for &b in record.payload() {
        match style {
            Style::Export => out.extend_from_slice(&[b, b' ']),
            Style::Console if b.is_ascii_graphic() || b == b' ' => out.push(b),
            Style::Console => out.push(b'.'),
        }
    }

    out.push(b'\n');
}

/// Append the listing of every data record in a sequence, in order.
pub fn write_listing<'a>(
    out: &mut Vec<u8>,
    records: impl IntoIterator<Item = &'a Record>,
    style: Style,
) {
    for record in records.into_iter().filter(|r| r.is_data()) {
        write_record(out, record, style);
    }
}

/// Six lowercase digits, the first two always zero.
fn encode_address(address: u16) -> [u8; 6] {
    let [high, low] = address.to_be_bytes();
    let [a, b] = encode_byte(high);
    let [c, d] = encode_byte(low);
    [b'0', b'0', a, b, c, d]
}
