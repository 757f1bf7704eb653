//! Best-effort removal of paths and glob matches.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

/// Deletes every path matched by `patterns`, directories recursively.
///
/// Each pattern is a path or a glob (`*`, `?`, `[..]`, `**`). A pattern
/// prefixed with `!` keeps its matches: they are not deleted, and neither is
/// any directory that contains one. The working directory and its ancestors
/// are never deleted.
///
/// Failures (bad patterns, I/O errors) are logged and skipped; nothing is
/// reported back to the caller.
pub fn remove_dir<I, S>(patterns: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let patterns: Vec<String> = patterns
        .into_iter()
        .map(|p| p.as_ref().to_string())
        .collect();

    let mut includes = Vec::new();
    let mut excludes = Vec::new();
    for pattern in &patterns {
        match pattern.strip_prefix('!') {
            Some(negated) => match Pattern::new(negated) {
                Ok(p) => excludes.push(p),
                Err(e) => tracing::error!(pattern = %pattern, "invalid glob pattern: {}", e),
            },
            None => includes.push(pattern.as_str()),
        }
    }

    let cwd = std::env::current_dir()
        .ok()
        .and_then(|d| d.canonicalize().ok());

    for pattern in includes {
        let entries = match glob::glob(pattern) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(pattern, "invalid glob pattern: {}", e);
                continue;
            }
        };
        // Expand fully before deleting so the walk never sees a half-removed tree.
        let matches: Vec<_> = entries.collect();

        for entry in matches {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    tracing::error!(path = %e.path().display(), "cannot expand pattern: {}", e.error());
                    continue;
                }
            };
            if excludes.iter().any(|ex| ex.matches_path(&path)) {
                tracing::debug!(path = %path.display(), "kept by negated pattern");
                continue;
            }
            if let Some(cwd) = cwd.as_deref() {
                if is_cwd_or_ancestor(&path, cwd) {
                    tracing::error!(
                        path = %path.display(),
                        "refusing to delete the current working directory or one of its parents"
                    );
                    continue;
                }
            }
            remove_one(&path, &excludes);
        }
    }

    tracing::debug!(patterns = ?patterns, "removed");
}

fn is_cwd_or_ancestor(path: &Path, cwd: &Path) -> bool {
    let resolved: PathBuf = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    cwd.starts_with(resolved)
}

/// True if any entry below `dir` matches one of `excludes`.
fn shelters_excluded(dir: &Path, excludes: &[Pattern]) -> bool {
    if excludes.is_empty() {
        return false;
    }
    WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .any(|entry| excludes.iter().any(|ex| ex.matches_path(entry.path())))
}

fn remove_one(path: &Path, excludes: &[Pattern]) {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        // Already gone with a parent matched earlier.
        Err(e) if e.kind() == io::ErrorKind::NotFound => return,
        Err(e) => {
            tracing::error!(path = %path.display(), "cannot stat: {}", e);
            return;
        }
    };

    let result = if meta.is_dir() {
        if shelters_excluded(path, excludes) {
            tracing::debug!(path = %path.display(), "directory holds kept entries, not removed");
            return;
        }
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => tracing::debug!(path = %path.display(), "deleted"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::error!(path = %path.display(), "could not delete: {}", e),
    }
}
