//! `shotfs name <url> <width> <browser>` – print one screenshot filename.

use shotfs_core::naming;

pub fn run_name(url: &str, width: u32, browser: &str) {
    println!("{}", naming::screenshot_filename(url, width, browser));
}
