//! Tests for name, plan, completions and the global --config flag.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_name() {
    match parse(&["shotfs", "name", "https://example.com/x", "1024", "chrome"]) {
        CliCommand::Name {
            url,
            width,
            browser,
        } => {
            assert_eq!(url, "https://example.com/x");
            assert_eq!(width, 1024);
            assert_eq!(browser, "chrome");
        }
        _ => panic!("expected Name"),
    }
}

#[test]
fn cli_parse_name_rejects_bad_width() {
    assert!(Cli::try_parse_from(["shotfs", "name", "example.com", "wide", "chrome"]).is_err());
}

#[test]
fn cli_parse_plan() {
    match parse(&["shotfs", "plan", "example.com"]) {
        CliCommand::Plan { url, out, create } => {
            assert_eq!(url, "example.com");
            assert!(out.is_none());
            assert!(!create);
        }
        _ => panic!("expected Plan"),
    }
}

#[test]
fn cli_parse_plan_out_and_create() {
    match parse(&["shotfs", "plan", "example.com", "--out", "/tmp/x", "--create"]) {
        CliCommand::Plan { out, create, .. } => {
            assert_eq!(out.as_deref(), Some("/tmp/x"));
            assert!(create);
        }
        _ => panic!("expected Plan with --out"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["shotfs", "plan", "example.com", "--config", "c.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("c.toml")));

    let cli = Cli::try_parse_from(["shotfs", "mkdir", "x"]).unwrap();
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_completions() {
    match parse(&["shotfs", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
