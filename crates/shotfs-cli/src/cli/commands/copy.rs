//! `shotfs copy <from> <to>` – mirror a directory tree.

use anyhow::Result;
use shotfs_core::dir;
use std::path::Path;

pub fn run_copy(from: &Path, to: &Path) -> Result<()> {
    let files = dir::copy_dir(from, to)?;
    println!("Copied {files} files to {}", to.display());
    Ok(())
}
