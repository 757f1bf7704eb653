//! `shotfs cat <path>` – dump a file to stdout.

use anyhow::Result;
use shotfs_core::file_io;
use std::path::Path;
use tokio::io::AsyncWriteExt;

pub async fn run_cat(path: &Path) -> Result<()> {
    let data = file_io::read_file(path).await?;
    let mut stdout = tokio::io::stdout();
    stdout.write_all(&data).await?;
    stdout.flush().await?;
    Ok(())
}
