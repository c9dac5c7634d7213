#![no_std]

//! A strict decoder for Intel HEX firmware and EEPROM record files.
//!
//! Every line of a HEX file is a colon-prefixed string of hexadecimal digit
//! pairs encoding one record: a payload length, a 16-bit address, a record
//! type, the payload itself and a trailing checksum. Hexfile turns each line
//! into a [`Record`](sans::record::Record), refuses malformed lines outright
//! and leaves checksum verification as an explicit, opt-in step.
//!
//! Most users should begin with the functions in the [`avec`] module, which
//! decode whole files and slices into a [`RecordStore`](avec::RecordStore).
//! The line-at-a-time primitives they are built from live in the [`sans`]
//! module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).
//! - `cli`: build the `hexfile` command-line tool (default).

extern crate alloc;

pub mod avec;
pub mod sans;
