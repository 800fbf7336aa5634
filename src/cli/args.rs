//! Command-line argument parsing.

use std::path::PathBuf;

use thiserror::Error;

use crate::traits::DiagnosticLevel;

pub const USAGE: &str = "\
Usage: starships [OPTIONS] [PATH]

Browse starships from the Star Wars API in the terminal.

Arguments:
  [PATH]                 Page to open first: /, /ships or /ships/<id> [default: /]

Options:
      --api-base <URL>   API base URL [env: STARSHIPS_API_BASE]
      --log-level <LVL>  error, warn, info, debug or trace [env: STARSHIPS_LOG]
      --log-file <PATH>  Log file location [env: STARSHIPS_LOG_FILE]
      --timeout <SECS>   Give up on a request after SECS seconds [env: STARSHIPS_TIMEOUT]
  -h, --help             Print help
  -V, --version          Print version";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the TUI (default)
    Run(RunArgs),
}

/// Flags for the TUI. `None` means "not given on the command line".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    pub api_base: Option<String>,
    pub log_level: Option<DiagnosticLevel>,
    pub log_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Parse command-line arguments. The first item is the program name.
///
/// `--version` and `--help` win over everything else on the line.
///
/// # Examples
///
/// ```
/// use starships::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["starships".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.skip(1).collect();

    for arg in &args {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            _ => {}
        }
    }

    let mut run = RunArgs::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            if let Some(path) = iter.next() {
                set_path(&mut run, path)?;
            }
            continue;
        }
        if !arg.starts_with('-') {
            set_path(&mut run, arg)?;
            continue;
        }
        if !arg.starts_with("--") {
            return Err(ArgsError::UnknownOption(arg));
        }

        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
            None => (arg.clone(), None),
        };

        let mut value = || -> Result<String, ArgsError> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => iter
                    .next()
                    .ok_or_else(|| ArgsError::MissingValue(flag.clone())),
            }
        };

        match flag.as_str() {
            "--api-base" => run.api_base = Some(value()?),
            "--log-level" => {
                let raw = value()?;
                let level = DiagnosticLevel::parse(&raw).ok_or_else(|| ArgsError::InvalidValue {
                    flag: flag.clone(),
                    value: raw.clone(),
                })?;
                run.log_level = Some(level);
            }
            "--log-file" => run.log_file = Some(PathBuf::from(value()?)),
            "--timeout" => {
                let raw = value()?;
                let secs = raw.parse().map_err(|_| ArgsError::InvalidValue {
                    flag: flag.clone(),
                    value: raw.clone(),
                })?;
                run.timeout_secs = Some(secs);
            }
            _ => return Err(ArgsError::UnknownOption(flag)),
        }
    }

    Ok(CliCommand::Run(run))
}

fn set_path(run: &mut RunArgs, path: String) -> Result<(), ArgsError> {
    if run.path.is_some() {
        return Err(ArgsError::UnexpectedArgument(path));
    }
    run.path = Some(path);
    Ok(())
}
