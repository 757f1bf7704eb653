//! Segment-by-segment directory creation.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::FsError;

/// Anchor for a path that starts with `/`.
#[cfg(not(windows))]
fn root_anchor() -> &'static Path {
    Path::new("/")
}

/// On Windows a leading `/` is taken relative to the working directory.
#[cfg(windows)]
fn root_anchor() -> &'static Path {
    Path::new(".")
}

/// Ensures every segment of the `/`-separated `path` exists as a directory.
///
/// Segments are created left to right. `.` and empty segments are skipped,
/// `..` is resolved lexically against the segments seen so far. A segment
/// that already exists as a directory is accepted, so calling this twice is
/// harmless.
///
/// Returns the normalized path (`"a/./b//c"` → `a/b/c`, `""` → `.`).
///
/// On failure the offending segment and the original path are logged at
/// error level and returned in the error; whether that is fatal is up to the
/// caller.
pub fn create_dir(path: &str) -> Result<PathBuf, FsError> {
    tracing::debug!(path, "check exists");

    let mut current = PathBuf::new();
    if path.is_empty() {
        current.push(".");
        return Ok(current);
    }

    for (idx, segment) in path.split('/').enumerate() {
        match segment {
            "" if idx == 0 => current.push(root_anchor()),
            "" | "." => {}
            ".." => pop_lexically(&mut current),
            name => {
                current.push(name);
                ensure_segment(&current, path)?;
            }
        }
    }

    if current.as_os_str().is_empty() {
        current.push(".");
    }
    Ok(current)
}

/// Drops the last normal component; at a root it stays put, otherwise `..` is kept.
fn pop_lexically(current: &mut PathBuf) {
    match current.components().next_back() {
        Some(Component::Normal(_)) => {
            current.pop();
        }
        Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
        Some(Component::CurDir) | Some(Component::ParentDir) | None => current.push(".."),
    }
}

fn ensure_segment(segment: &Path, path: &str) -> Result<(), FsError> {
    match fs::create_dir(segment) {
        Ok(()) => {
            tracing::debug!(segment = %segment.display(), "created");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if segment.is_dir() {
                return Ok(());
            }
            tracing::error!(
                segment = %segment.display(),
                path,
                "cannot create directory: a non-directory entry is in the way"
            );
            Err(FsError::NotADirectory {
                segment: segment.to_path_buf(),
                path: path.to_string(),
            })
        }
        // Some filesystems report EROFS/EACCES before EEXIST.
        Err(_) if segment.is_dir() => Ok(()),
        Err(source) => {
            tracing::error!(
                segment = %segment.display(),
                path,
                error = %source,
                "error when creating directory"
            );
            Err(FsError::CreateDir {
                segment: segment.to_path_buf(),
                path: path.to_string(),
                source,
            })
        }
    }
}
