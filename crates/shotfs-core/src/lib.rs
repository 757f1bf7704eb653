pub mod config;
pub mod logging;

pub mod dir;
pub mod error;
pub mod file_io;
pub mod naming;

pub use dir::{copy_dir, create_dir, remove_dir};
pub use error::FsError;
pub use file_io::{read_file, write_file};
pub use naming::{screenshot_filename, screenshot_filenames};

#[cfg(test)]
pub(crate) mod test_support;
