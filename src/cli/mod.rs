//! Command-line interface.
//!
//! Parsed before the terminal is taken over, so `--version`, `--help`, and
//! argument errors print to a normal terminal:
//!
//! ```ignore
//! use starships::cli::{parse_args, run_cli_command, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     Ok(CliCommand::Run(args)) => { /* start the TUI */ }
//!     Ok(other) => std::process::exit(run_cli_command(&other)),
//!     Err(e) => { eprintln!("{}\n\n{}", e, USAGE); std::process::exit(2) }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, RunArgs, USAGE};
pub use version::{version_line, VERSION};

/// Exit code for command-line usage errors.
pub const EXIT_USAGE: i32 = 2;

/// Print output for a non-TUI command and return its exit code.
///
/// `Run` is not handled here and returns 0 without printing.
pub fn run_cli_command(command: &CliCommand) -> i32 {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            0
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            0
        }
        CliCommand::Run(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_tui_commands_exit_zero() {
        assert_eq!(run_cli_command(&CliCommand::Version), 0);
        assert_eq!(run_cli_command(&CliCommand::Help), 0);
    }
}
