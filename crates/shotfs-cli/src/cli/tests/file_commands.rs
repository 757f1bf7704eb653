//! Tests for mkdir, rm, cat, write and copy.

use super::parse;
use crate::cli::commands::{run_copy, run_mkdir, run_rm, run_write, WriteSource};
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_mkdir() {
    match parse(&["shotfs", "mkdir", "shots/chrome"]) {
        CliCommand::Mkdir { path } => assert_eq!(path, "shots/chrome"),
        _ => panic!("expected Mkdir"),
    }
}

#[test]
fn cli_parse_rm_patterns() {
    match parse(&["shotfs", "rm", "shots/**", "!shots/keep.png"]) {
        CliCommand::Rm { patterns } => {
            assert_eq!(patterns, vec!["shots/**", "!shots/keep.png"]);
        }
        _ => panic!("expected Rm"),
    }
}

#[test]
fn cli_parse_rm_requires_a_pattern() {
    assert!(Cli::try_parse_from(["shotfs", "rm"]).is_err());
}

#[test]
fn cli_parse_cat() {
    match parse(&["shotfs", "cat", "a.png"]) {
        CliCommand::Cat { path } => assert_eq!(path, Path::new("a.png")),
        _ => panic!("expected Cat"),
    }
}

#[test]
fn cli_parse_write_text() {
    match parse(&["shotfs", "write", "out.txt", "--text", "hello"]) {
        CliCommand::Write { path, text, from } => {
            assert_eq!(path, Path::new("out.txt"));
            assert_eq!(text.as_deref(), Some("hello"));
            assert!(from.is_none());
        }
        _ => panic!("expected Write"),
    }
}

#[test]
fn cli_parse_write_text_and_from_conflict() {
    assert!(Cli::try_parse_from(["shotfs", "write", "o", "--text", "x", "--from", "f"]).is_err());
}

#[test]
fn cli_parse_copy() {
    match parse(&["shotfs", "copy", "current", "baseline"]) {
        CliCommand::Copy { from, to } => {
            assert_eq!(from, Path::new("current"));
            assert_eq!(to, Path::new("baseline"));
        }
        _ => panic!("expected Copy"),
    }
}

#[test]
fn mkdir_then_rm() {
    let dir = tempfile::tempdir().unwrap();
    let target = format!("{}/a/b", dir.path().display());

    run_mkdir(&target).unwrap();
    assert!(dir.path().join("a/b").is_dir());

    run_rm(&[format!("{}/a", dir.path().display())]);
    assert!(!dir.path().join("a").exists());
}

#[test]
fn mkdir_failure_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("file"), b"x").unwrap();
    let err = run_mkdir(&format!("{}/file/sub", dir.path().display())).unwrap_err();
    assert!(format!("{:#}", err).contains("not a directory"));
}

#[tokio::test]
async fn write_from_text_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    run_write(&first, WriteSource::Text("hello".to_string()))
        .await
        .unwrap();
    run_write(&second, WriteSource::File(first.clone()))
        .await
        .unwrap();

    assert_eq!(std::fs::read(&second).unwrap(), b"hello");
}

#[test]
fn copy_tree() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir_all(src.join("chrome")).unwrap();
    std::fs::write(src.join("chrome/a.png"), b"png").unwrap();

    run_copy(&src, &dir.path().join("dst")).unwrap();

    assert_eq!(std::fs::read(dir.path().join("dst/chrome/a.png")).unwrap(), b"png");
}
