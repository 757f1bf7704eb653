//! Helpers for tests that depend on the process working directory.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Serializes tests that change the working directory.
static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Switches into a directory for the lifetime of the guard, then switches back.
pub(crate) struct CwdGuard {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    pub(crate) fn enter(dir: &Path) -> Self {
        let lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        CwdGuard {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}
