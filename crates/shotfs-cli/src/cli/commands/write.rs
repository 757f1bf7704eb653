//! `shotfs write <path>` – write a file from text, another file, or stdin.

use anyhow::{Context, Result};
use shotfs_core::file_io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Where the bytes for `shotfs write` come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl WriteSource {
    async fn load(self) -> Result<Vec<u8>> {
        match self {
            WriteSource::Text(text) => Ok(text.into_bytes()),
            WriteSource::File(path) => Ok(file_io::read_file(&path).await?),
            WriteSource::Stdin => {
                let mut buf = Vec::new();
                tokio::io::stdin()
                    .read_to_end(&mut buf)
                    .await
                    .context("failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

pub async fn run_write(path: &Path, source: WriteSource) -> Result<()> {
    let data = source.load().await?;
    file_io::write_file(path, &data).await?;
    tracing::info!(path = %path.display(), bytes = data.len(), "file written");
    Ok(())
}
