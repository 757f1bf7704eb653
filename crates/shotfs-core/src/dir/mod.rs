//! Directory tree helpers.
//!
//! Creation walks a `/`-separated path one segment at a time, removal expands
//! glob patterns and deletes matches best-effort, copy mirrors a whole tree.

mod copy;
mod create;
mod remove;

pub use copy::copy_dir;
pub use create::create_dir;
pub use remove::remove_dir;
