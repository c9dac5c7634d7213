//! Paging data records to the console.

use std::io::{self, BufRead, Write};

use hexfile::{
    avec::{
        RecordStore,
        listing::{self, Style},
    },
    sans::record::Record,
};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct Pager<'a> {
    records: Vec<&'a Record>,
    page_size: usize,
    next: usize,
    /// Ask before every page after the first.
    prompt: bool,
    /// Clear the screen before every page.
    clear: bool,
}

impl<'a> Pager<'a> {
    pub fn new(store: &'a RecordStore, page_size: usize) -> Self {
        Self {
            records: store.data_records().collect(),
            page_size: page_size.max(1),
            next: 0,
            prompt: false,
            clear: false,
        }
    }

    pub fn prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Write the next page of records. Returns whether any remain.
    fn write_page(&mut self, out: &mut impl Write) -> io::Result<bool> {
        let end = (self.next + self.page_size).min(self.records.len());

        let mut text = Vec::new();
        listing::write_listing(
            &mut text,
            self.records[self.next..end].iter().copied(),
            Style::Console,
        );

        if self.clear {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        out.write_all(&text)?;

        self.next = end;
        Ok(self.next < self.records.len())
    }

    /// Write pages until the records run out or the reader declines more.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        while self.write_page(out)? {
            if self.prompt && !ask_more(input, out, self.page_size)? {
                return Ok(());
            }
        }

        writeln!(out, "\n=========== End of file ===========")?;
        out.flush()
    }
}

/// Ask whether to show another page, until answered with `y` or `n`.
///
/// The end of input counts as `n`.
fn ask_more(input: &mut impl BufRead, out: &mut impl Write, page_size: usize) -> io::Result<bool> {
    loop {
        write!(
            out,
            "\nPress `y` to see {page_size} more lines or `n` to stop. "
        )?;
        out.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(false);
        }

        match answer.trim() {
            "y" | "Y" => return Ok(true),
            "n" | "N" => return Ok(false),
            _ => {}
        }
    }
}
