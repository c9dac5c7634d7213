//! An ordered, in-memory collection of decoded records.

use alloc::vec::Vec;
use core::{ops::Index, slice};

use crate::sans::record::Record;

use super::{Error, FromRecords, Validation};

#[cfg(feature = "std")]
extern crate std;

/// Every record decoded from one document, in line order.
///
/// The store only grows: records are appended as they are decoded and are
/// never removed, reordered or merged. Indices are therefore stable, and
/// `store[i]` is always the `i`th record received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for at least `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Decode a whole document held in a slice.
    ///
    /// Nothing is returned unless every line decodes.
    pub fn from_slice(r: &[u8], validation: Validation) -> Result<Self, Error> {
        let mut store = Self::new();
        super::decode_slice(r, &mut store, validation)?;
        Ok(store)
    }

    /// Decode a whole document from a reader.
    ///
    /// Nothing is returned unless every line decodes.
    ///
    /// _Requires Cargo feature `std`._
    #[cfg(feature = "std")]
    pub fn from_reader(
        r: &mut impl std::io::BufRead,
        validation: Validation,
    ) -> Result<Self, super::reader::Error> {
        let mut store = Self::new();
        super::decode_reader(r, &mut store, validation)?;
        Ok(store)
    }

    /// Add a record after all others.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over the records carrying data, skipping those describing the
    /// file.
    pub fn data_records(&self) -> impl Iterator<Item = &Record> {
        self.iter().filter(|r| r.is_data())
    }

    /// Iterate over the records whose stored checksum does not match their
    /// contents, along with their indices.
    pub fn mismatches(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.iter().enumerate().filter(|(_, r)| !r.is_valid())
    }
}

impl FromRecords for RecordStore {
    fn add_record(&mut self, record: Record) {
        self.append(record);
    }
}

impl Index<usize> for RecordStore {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
