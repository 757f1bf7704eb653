//! Recursive directory copy.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::FsError;

/// Copies the tree rooted at `from` into `to`, creating `to` if needed and
/// overwriting files that already exist there. Symlinks are skipped.
///
/// Returns the number of regular files copied. A destination inside the
/// source is rejected with `InvalidInput` before anything is written.
pub fn copy_dir(from: &Path, to: &Path) -> Result<u64, FsError> {
    if let Ok(source_root) = from.canonicalize() {
        if resolve_existing_prefix(to).starts_with(&source_root) {
            tracing::error!(from = %from.display(), to = %to.display(), "destination is inside the source tree");
            return Err(FsError::Copy {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "destination is inside the source tree",
                ),
            });
        }
    }

    let mut copied = 0u64;

    for entry in WalkDir::new(from).follow_links(false) {
        let entry = entry.map_err(|source| FsError::Walk {
            path: from.to_path_buf(),
            source,
        })?;
        let Ok(rel) = entry.path().strip_prefix(from) else {
            continue;
        };
        let target = to.join(rel);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|source| FsError::Copy {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                source,
            })?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target).map_err(|source| FsError::Copy {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                source,
            })?;
            copied += 1;
        } else {
            tracing::debug!(path = %entry.path().display(), "skipping non-regular entry");
        }
    }

    tracing::debug!(from = %from.display(), to = %to.display(), files = copied, "copied tree");
    Ok(copied)
}

/// Canonicalizes the nearest existing ancestor of `path` and re-appends the
/// components that do not exist yet.
fn resolve_existing_prefix(path: &Path) -> PathBuf {
    let mut missing: Vec<OsString> = Vec::new();
    let mut current = path;
    loop {
        if let Ok(real) = current.canonicalize() {
            let mut resolved = real;
            resolved.extend(missing.iter().rev());
            return resolved;
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                current = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
            }
            _ => return path.to_path_buf(),
        }
    }
}
