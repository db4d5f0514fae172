//! Command-line definition
//!
//! Every option is optional; running with none performs a full extraction
//! over the built-in table followed by manifest generation.

use clap::{Arg, ArgAction, Command as ClapCommand};

use crate::manifest::DEFAULT_EXTRACTION_DATE;

/// Build the clap command for the `roomkit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("RoomKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Extract interactive objects from room images")
        .arg(
            Arg::new("base-path")
                .long("base-path")
                .help("Root of the asset tree; the manifest is written here")
                .value_name("DIR")
                .default_value("."),
        )
        .arg(
            Arg::new("rooms-dir")
                .long("rooms-dir")
                .help("Directory holding <room>.png and <room>-dark.png [default: <base-path>/assets/images/rooms]")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("objects-dir")
                .long("objects-dir")
                .help("Directory receiving <room>/<object>.png [default: <base-path>/assets/images/objects]")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("table")
                .long("table")
                .help("TOML extraction table to use instead of the built-in one")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("extraction-date")
                .long("extraction-date")
                .help("Date string recorded in the manifest")
                .value_name("DATE")
                .default_value(DEFAULT_EXTRACTION_DATE),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("Print the extraction table without extracting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 2 when any extraction fails")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Hide the progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also append log records to this file")
                .value_name("FILE")
                .required(false),
        )
}
