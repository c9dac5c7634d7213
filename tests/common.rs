#![cfg(feature = "std")]

use std::{io::BufReader, path::Path};

use csv::ReaderBuilder;
use hexfile::{
    avec::{FromRecords, Validation},
    sans::record::Record,
};

#[test]
fn decode_slice_fluid() {
    const PATH: &str = "fixtures/fluid.hex";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    hexfile::avec::decode_slice(&data, &mut validator, Validation::Strict).unwrap();
    validator.finish();
}

#[test]
fn decode_slice_blink() {
    const PATH: &str = "fixtures/blink.hex";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    hexfile::avec::decode_slice(&data, &mut validator, Validation::Strict).unwrap();
    validator.finish();
}

#[test]
fn decode_slice_corrupt() {
    const PATH: &str = "fixtures/corrupt.hex";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    hexfile::avec::decode_slice(&data, &mut validator, Validation::Deferred).unwrap();
    validator.finish();
}

#[test]
fn decode_reader_fluid() {
    const PATH: &str = "fixtures/fluid.hex";
    let mut file = BufReader::new(std::fs::File::open(PATH).unwrap());
    let mut validator = Validator::new(PATH);
    hexfile::avec::decode_reader(&mut file, &mut validator, Validation::Strict).unwrap();
    validator.finish();
}

#[test]
fn decode_reader_blink() {
    const PATH: &str = "fixtures/blink.hex";
    let mut file = BufReader::new(std::fs::File::open(PATH).unwrap());
    let mut validator = Validator::new(PATH);
    hexfile::avec::decode_reader(&mut file, &mut validator, Validation::Strict).unwrap();
    validator.finish();
}

#[test]
fn decode_reader_corrupt() {
    const PATH: &str = "fixtures/corrupt.hex";
    let mut file = BufReader::new(std::fs::File::open(PATH).unwrap());
    let mut validator = Validator::new(PATH);
    hexfile::avec::decode_reader(&mut file, &mut validator, Validation::Deferred).unwrap();
    validator.finish();
}

/// Checks each published record against the next row of a CSV file holding
/// length, address, type, payload, checksum and validity.
struct Validator(Vec<Vec<String>>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(expected)
    }

    fn finish(self) {
        assert!(self.0.is_empty(), "{} records were not decoded", self.0.len());
    }
}

impl FromRecords for Validator {
    fn add_record(&mut self, record: Record) {
        let mut row = self.0.remove(0);
        assert_eq!(row.remove(0), record.length().to_string());
        assert_eq!(row.remove(0), record.address().to_string());
        assert_eq!(row.remove(0), u8::from(record.record_type()).to_string());

        let payload: String = record.payload().iter().map(|b| format!("{b:02X}")).collect();
        assert_eq!(row.remove(0), payload);

        assert_eq!(row.remove(0), record.checksum().to_string());
        assert_eq!(row.remove(0), record.is_valid().to_string());
        assert_eq!(record.payload().len(), record.length() as usize);
    }
}
