//! Async whole-file read and write.
//!
//! Thin wrappers over `tokio::fs` that attach the path to any failure. No
//! retries, no timeouts, and writes are not atomic: a crash mid-write can
//! leave a partial file behind.

use std::path::Path;

use crate::error::FsError;

/// Reads the whole file at `path` as raw bytes.
pub async fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, FsError> {
    let path = path.as_ref();
    tokio::fs::read(path).await.map_err(|source| FsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `data` to `path`, creating the file or truncating what was there.
/// The parent directory must already exist.
pub async fn write_file(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> Result<(), FsError> {
    let path = path.as_ref();
    tokio::fs::write(path, data)
        .await
        .map_err(|source| FsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}
