use clap::{Arg, ArgAction, Command, ValueHint, crate_version, value_parser};
use std::path::PathBuf;

const STRICT_HELP: &str = "stop at the first record with a bad checksum";
const STRICT_LONG_HELP: &str = "By default every well-formed record is kept, and bad checksums are only logged.
With this flag the first record with a bad checksum is treated like a malformed line.";

fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("PATH")
        .help("path to the HEX file")
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
        .required(true)
}

fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .help(STRICT_HELP)
        .long_help(STRICT_LONG_HELP)
        .action(ArgAction::SetTrue)
}

fn lines_arg() -> Arg {
    Arg::new("lines")
        .short('n')
        .long("lines")
        .value_name("COUNT")
        .help("data records per page")
        .value_parser(value_parser!(u16).range(1..))
        .default_value("25")
}

pub fn build_cli() -> Command {
    let long_help = "hexfile is always invoked with exactly one subcommand.
Lines are decoded strictly: the first malformed line stops decoding and is reported.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
page through data:     `hexfile view firmware.hex`
save a listing:        `hexfile export firmware.hex -o firmware.txt`
verify checksums:      `hexfile check firmware.hex`
interactive menu:      `hexfile menu firmware.hex`";

    Command::new("hexfile")
        .about("Decodes and inspects Intel HEX record files.")
        .after_long_help(long_help)
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("view")
                .arg(input_arg())
                .arg(lines_arg())
                .arg(strict_arg())
                .about("write data records to stdout, one page at a time"),
        )
        .subcommand(
            Command::new("export")
                .arg(input_arg())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("path of the listing to write, must end in .txt")
                        .value_parser(value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath)
                        .required(true),
                )
                .arg(strict_arg())
                .about("write a plain-text listing of data records"),
        )
        .subcommand(
            Command::new("check")
                .arg(input_arg())
                .about("report every record with a bad checksum"),
        )
        .subcommand(
            Command::new("menu")
                .arg(input_arg())
                .arg(lines_arg())
                .arg(strict_arg())
                .about("choose between viewing and saving from an interactive menu"),
        )
}
