use std::path::Path;
use std::process;
use log::{error, LevelFilter};

use roomkit::cli::build_cli;
use roomkit::commands::{CommandFactory, CommandOutcome, RoomkitCommandFactory};
use roomkit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = matches.get_one::<String>("log-file").map(Path::new);

    if let Err(e) = Logger::init_global_logger(log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = RoomkitCommandFactory::new();

    let command_result = factory.create_command(&matches);
    match command_result {
        Ok(command) => match command.execute() {
            Ok(CommandOutcome::Success) => {},
            Ok(CommandOutcome::PartialFailure) => process::exit(2),
            Err(e) => {
                error!("Command execution error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            process::exit(1);
        }
    };
}
