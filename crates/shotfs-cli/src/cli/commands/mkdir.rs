//! `shotfs mkdir <path>` – create a directory path segment by segment.

use anyhow::{Context, Result};
use shotfs_core::dir;

/// Creates `path` and prints the normalized result. A failure is returned to
/// `main`, which logs it and exits with status 1: a run cannot go on without
/// its output directory.
pub fn run_mkdir(path: &str) -> Result<()> {
    let created = dir::create_dir(path)
        .with_context(|| format!("cannot prepare directory {path}"))?;
    println!("{}", created.display());
    Ok(())
}
