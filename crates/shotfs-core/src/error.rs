//! Error type shared by the directory and file helpers.

use std::io;
use std::path::PathBuf;

/// Failure of a filesystem helper. Every variant carries the path(s) involved
/// and, where there is one, the underlying error as `source`.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// Creating one segment of a directory path failed.
    #[error("failed to create directory {} for path {path}", segment.display())]
    CreateDir {
        segment: PathBuf,
        path: String,
        source: io::Error,
    },

    /// A segment of the requested path exists but is not a directory.
    #[error("{} exists and is not a directory (creating {path})", segment.display())]
    NotADirectory { segment: PathBuf, path: String },

    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to copy {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    /// Directory traversal failed (unreadable directory, entry vanished, ...).
    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl FsError {
    /// Kind of the underlying I/O error, if this failure wraps one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            FsError::CreateDir { source, .. }
            | FsError::Read { source, .. }
            | FsError::Write { source, .. }
            | FsError::Copy { source, .. } => Some(source.kind()),
            FsError::Walk { source, .. } => source.io_error().map(io::Error::kind),
            FsError::NotADirectory { .. } => None,
        }
    }
}
