//! `shotfs rm <pattern>...` – best-effort recursive delete.

use shotfs_core::dir;

/// Failures are logged by the remover itself and never change the exit status.
pub fn run_rm(patterns: &[String]) {
    dir::remove_dir(patterns);
}
