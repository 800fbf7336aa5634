//! Environment and command-line layering for `AppConfig`.
//!
//! These tests touch process-wide environment variables, so they run serially.

use std::path::PathBuf;
use std::time::Duration;

use serial_test::serial;
use starships::cli::{parse_args, CliCommand};
use starships::config::{AppConfig, ConfigError, ENV_API_BASE, ENV_LOG_FILE, ENV_LOG_LEVEL, ENV_TIMEOUT};
use starships::traits::DiagnosticLevel;

fn clear_env() {
    for var in [ENV_API_BASE, ENV_LOG_LEVEL, ENV_LOG_FILE, ENV_TIMEOUT] {
        std::env::remove_var(var);
    }
}

fn run_args(line: &[&str]) -> starships::cli::RunArgs {
    let args = std::iter::once("starships").chain(line.iter().copied()).map(String::from);
    match parse_args(args).unwrap() {
        CliCommand::Run(args) => args,
        other => panic!("expected run command, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_env();
    std::env::set_var(ENV_API_BASE, "http://localhost:8000/api/");
    std::env::set_var(ENV_LOG_LEVEL, "WARN");
    std::env::set_var(ENV_TIMEOUT, "3");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.api_base, "http://localhost:8000/api");
    assert_eq!(config.log_level, DiagnosticLevel::Warn);
    assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    clear_env();
}

#[test]
#[serial]
fn test_flags_override_env() {
    clear_env();
    std::env::set_var(ENV_API_BASE, "http://env.example/api");
    std::env::set_var(ENV_LOG_FILE, "/tmp/from-env.log");

    let args = run_args(&["--api-base=http://flag.example/api", "--log-file", "/tmp/flag.log", "/ships/9/"]);
    let config = AppConfig::from_env().unwrap().apply_args(&args).unwrap();

    assert_eq!(config.api_base, "http://flag.example/api");
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/flag.log")));
    assert_eq!(config.initial_path, "/ships/9");
    clear_env();
}

#[test]
#[serial]
fn test_bad_env_value_is_reported() {
    clear_env();
    std::env::set_var(ENV_TIMEOUT, "soon");

    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    assert!(err.to_string().contains(ENV_TIMEOUT));
    clear_env();
}
