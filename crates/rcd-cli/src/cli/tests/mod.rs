//! CLI tests: argument parsing, prompts, and outcome messages.

use super::{abort_grace, Cli, ABORT_GRACE};
use clap::Parser;
use std::time::Duration;


#[test]
fn cli_parse_no_args() {
    assert!(Cli::try_parse_from(["rcd"]).is_ok());
}

#[test]
fn cli_rejects_flags_and_positionals() {
    assert!(Cli::try_parse_from(["rcd", "--jobs", "4"]).is_err());
    assert!(Cli::try_parse_from(["rcd", "pics"]).is_err());
}

#[test]
fn cli_version_flag() {
    let err = Cli::try_parse_from(["rcd", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn interrupt_during_prompts_skips_grace() {
    assert_eq!(abort_grace(false), Duration::ZERO);
    assert_eq!(abort_grace(true), ABORT_GRACE);
}
