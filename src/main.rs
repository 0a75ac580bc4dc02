//! Binary entry point: parse arguments and dispatch to a command.

use adhanr::args::{self, CliAction, ParsedArgs};
use adhanr::commands::{list, next, run};
use adhanr::constants::EXIT_FAILURE;
use adhanr::{log_end, log_error_exit};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let result = match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Run(options) => run::handle_run_command(&options),
        CliAction::List(options) => list::handle_list_command(&options),
        CliAction::Next(options) => next::handle_next_command(&options),
    };

    if let Err(e) = result {
        adhanr::logger::Log::set_enabled(true);
        log_error_exit!("{e:#}");
        log_end!();
        std::process::exit(EXIT_FAILURE);
    }
}
