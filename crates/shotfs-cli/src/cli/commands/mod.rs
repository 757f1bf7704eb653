//! CLI command handlers. Each command is in its own file.

mod cat;
mod completions;
mod copy;
mod mkdir;
mod name;
mod plan;
mod rm;
mod write;

pub use cat::run_cat;
pub use completions::run_completions;
pub use copy::run_copy;
pub use mkdir::run_mkdir;
pub use name::run_name;
pub use plan::run_plan;
pub use rm::run_rm;
pub use write::{run_write, WriteSource};
