//! The interactive menu: view, save or quit, until told to quit.

use std::{
    error::Error,
    io::{BufRead, Write},
    path::Path,
};

use hexfile::avec::RecordStore;

use crate::pager::Pager;

const MENU: &str = "===================== Intel Hex Program Menu =====================

\t\t1. View file in console
\t\t2. Save file
\t\t3. Quit

Your choice: ";

pub fn run(
    store: &RecordStore,
    input: &mut impl BufRead,
    out: &mut impl Write,
    page_size: usize,
    clear: bool,
) -> Result<(), Box<dyn Error>> {
    loop {
        write!(out, "{MENU}")?;
        out.flush()?;

        let Some(choice) = read_answer(input)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => Pager::new(store, page_size)
                .prompt(true)
                .clear(clear)
                .run(input, out)?,
            "2" => {
                write!(out, "Enter file name (must have .txt extension): ")?;
                out.flush()?;

                let Some(name) = read_answer(input)? else {
                    return Ok(());
                };

                crate::export(store, Path::new(&name))?;
                writeln!(out, "\nSaved successfully.")?;
            }
            "3" => return Ok(()),
            other => log::debug!("ignoring menu choice {other:?}"),
        }

        writeln!(out)?;
    }
}

/// Read a trimmed line of input, or `None` at the end of input.
fn read_answer(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(None);
    }
    Ok(Some(answer.trim().to_owned()))
}
