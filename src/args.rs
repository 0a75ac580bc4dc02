//! Command-line argument parsing and processing.
//!
//! Supports the `run`, `list` and `next` subcommands plus the standard help,
//! version, debug and config-directory flags. Unknown input falls back to
//! showing help.

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonOptions {
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
    /// Evaluate at this wall-clock time ("YYYY-MM-DD HH:MM:SS") instead of now
    pub at: Option<String>,
    pub json: bool,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Live board with a countdown that updates every second
    Run(CommonOptions),
    /// Print today's and tomorrow's prayers once
    List(CommonOptions),
    /// Print the next prayer and its countdown once
    Next(CommonOptions),
    ShowHelp,
    ShowVersion,
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

#[derive(Clone, Copy, PartialEq)]
enum Command {
    Run,
    List,
    Next,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut options = CommonOptions::default();
        let mut command: Option<Command> = None;
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;

        let mut iter = args_vec.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => options.debug_enabled = true,
                "--json" | "-j" => options.json = true,
                "--config" | "-c" => match iter.next() {
                    Some(dir) => options.config_dir = Some(dir.clone()),
                    None => unknown_arg_found = true,
                },
                "--at" | "-a" => match iter.next() {
                    Some(at) => options.at = Some(at.clone()),
                    None => unknown_arg_found = true,
                },
                "run" | "r" if command.is_none() => command = Some(Command::Run),
                "list" | "l" if command.is_none() => command = Some(Command::List),
                "next" | "n" if command.is_none() => command = Some(Command::Next),
                _ => unknown_arg_found = true,
            }
        }

        let command = command.unwrap_or(Command::Run);
        // The live view is for humans only
        if options.json && command == Command::Run {
            unknown_arg_found = true;
        }

        let action = if display_help {
            CliAction::ShowHelp
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else if display_version {
            CliAction::ShowVersion
        } else {
            match command {
                Command::Run => CliAction::Run(options),
                Command::List => CliAction::List(options),
                Command::Next => CliAction::Next(options),
            }
        };

        ParsedArgs { action }
    }

    /// Parse from the process arguments.
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Display version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Display help information using custom logging style.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("adhanr [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-a, --at <datetime>    Evaluate at \"YYYY-MM-DD HH:MM:SS\" instead of now");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-j, --json             Print JSON (list and next only)");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("run, r                 Live board and countdown (default)");
    log_indented!("list, l                Print today's and tomorrow's prayers");
    log_indented!("next, n                Print the next prayer and time remaining");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let parsed = ParsedArgs::parse(vec!["adhanr"]);
        assert_eq!(parsed.action, CliAction::Run(CommonOptions::default()));
    }

    #[test]
    fn test_parse_debug_flag() {
        let parsed = ParsedArgs::parse(vec!["adhanr", "--debug"]);
        assert_eq!(
            parsed.action,
            CliAction::Run(CommonOptions {
                debug_enabled: true,
                ..CommonOptions::default()
            })
        );
    }

    #[test]
    fn test_parse_list_with_options() {
        let parsed = ParsedArgs::parse(vec![
            "adhanr",
            "-c",
            "/tmp/adhanr",
            "list",
            "--json",
            "--at",
            "2024-01-15 19:45:00",
        ]);
        assert_eq!(
            parsed.action,
            CliAction::List(CommonOptions {
                debug_enabled: false,
                config_dir: Some("/tmp/adhanr".to_string()),
                at: Some("2024-01-15 19:45:00".to_string()),
                json: true,
            })
        );
    }

    #[test]
    fn test_parse_next_alias() {
        let parsed = ParsedArgs::parse(vec!["adhanr", "n"]);
        assert_eq!(parsed.action, CliAction::Next(CommonOptions::default()));
    }

    #[test]
    fn test_parse_help_wins() {
        let parsed = ParsedArgs::parse(vec!["adhanr", "list", "--help"]);
        assert_eq!(parsed.action, CliAction::ShowHelp);
    }

    #[test]
    fn test_parse_version() {
        let parsed = ParsedArgs::parse(vec!["adhanr", "-V"]);
        assert_eq!(parsed.action, CliAction::ShowVersion);
    }

    #[test]
    fn test_parse_errors() {
        for args in [
            vec!["adhanr", "--bogus"],
            vec!["adhanr", "--config"],
            vec!["adhanr", "list", "next"],
            vec!["adhanr", "--json"],
        ] {
            let parsed = ParsedArgs::parse(args.clone());
            assert_eq!(parsed.action, CliAction::ShowHelpDueToError, "{args:?}");
        }
    }
}
