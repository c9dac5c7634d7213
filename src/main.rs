//! # Command Line Interface
//!
//! Subcommands are dispatched here. The pager and the interactive menu are in
//! their own modules.

use std::{
    error::Error,
    fs::File,
    io::{self, BufReader, IsTerminal},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::ArgMatches;
use hexfile::{
    avec::{
        RecordStore, Validation,
        listing::{self, Style},
    },
    sans::check::compute_checksum,
};
use log::{info, warn};

mod cli;
mod menu;
mod pager;

use pager::Pager;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli::build_cli().get_matches();

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<ExitCode, Box<dyn Error>> {
    let Some((name, cmd)) = matches.subcommand() else {
        return Err("a subcommand is required".into());
    };

    let store = load(cmd)?;

    match name {
        "view" => {
            let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
            Pager::new(&store, page_size(cmd))
                .prompt(interactive)
                .clear(interactive)
                .run(&mut io::stdin().lock(), &mut io::stdout().lock())?;
        }
        "export" => {
            let output = cmd
                .get_one::<PathBuf>("output")
                .ok_or("an output path is required")?;
            export(&store, output)?;
            println!("Saved successfully.");
        }
        "check" => return Ok(check(&store)),
        "menu" => menu::run(
            &store,
            &mut io::stdin().lock(),
            &mut io::stdout().lock(),
            page_size(cmd),
            io::stdout().is_terminal(),
        )?,
        _ => return Err(format!("unknown subcommand {name}").into()),
    }

    Ok(ExitCode::SUCCESS)
}

/// Decode the input file named on the command line.
fn load(cmd: &ArgMatches) -> Result<RecordStore, Box<dyn Error>> {
    let path = cmd
        .get_one::<PathBuf>("input")
        .ok_or("missing parameter: the path to a HEX file")?;

    if !path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("hex"))
    {
        warn!("{} does not have a .hex extension", path.display());
    }

    let validation = match cmd.try_get_one::<bool>("strict") {
        Ok(Some(&true)) => Validation::Strict,
        _ => Validation::Deferred,
    };

    let file = File::open(path)
        .map_err(|e| format!("{} could not be opened: {e}", path.display()))?;

    info!("loading {}", path.display());
    let store = RecordStore::from_reader(&mut BufReader::new(file), validation)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    info!("loaded {} records", store.len());

    Ok(store)
}

fn page_size(cmd: &ArgMatches) -> usize {
    cmd.get_one::<u16>("lines").copied().map_or(25, usize::from)
}

/// Write the export listing of a store to a `.txt` file.
pub(crate) fn export(store: &RecordStore, path: &Path) -> Result<(), Box<dyn Error>> {
    if !path.extension().is_some_and(|ext| ext == "txt") {
        return Err(format!("{} is not a valid file, expected a .txt extension", path.display()).into());
    }

    let mut text = Vec::new();
    listing::write_listing(&mut text, store, Style::Export);

    std::fs::write(path, text)
        .map_err(|e| format!("{} could not be written: {e}", path.display()))?;
    info!("wrote {} data records to {}", store.data_records().count(), path.display());

    Ok(())
}

/// Report every record with a bad checksum, failing if there are any.
fn check(store: &RecordStore) -> ExitCode {
    println!(
        "{} records, {} carrying data",
        store.len(),
        store.data_records().count()
    );

    let mut invalid = 0;
    for (i, record) in store.mismatches() {
        invalid += 1;
        // Every line holds exactly one record.
        println!(
            "line {}: calculated ({:#04x}) and found ({:#04x}) checksums do not match",
            i + 1,
            compute_checksum(record),
            record.checksum()
        );
    }

    if invalid == 0 {
        println!("all checksums valid");
        ExitCode::SUCCESS
    } else {
        println!("{invalid} records with bad checksums");
        ExitCode::FAILURE
    }
}
