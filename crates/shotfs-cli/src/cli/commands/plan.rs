//! `shotfs plan <url>` – list the screenshot paths a capture run would produce.

use anyhow::{Context, Result};
use shotfs_core::config::ShotConfig;
use shotfs_core::{dir, naming};

/// One `<dir>/<filename>` per configured browser and width, browser-major.
/// `out` overrides the configured output directory.
pub fn plan_paths(cfg: &ShotConfig, url: &str, out: Option<&str>) -> Vec<String> {
    let out_dir = out.unwrap_or(cfg.output_dir.as_str()).trim_end_matches('/');
    naming::screenshot_filenames(url, &cfg.widths, &cfg.browsers)
        .into_iter()
        .map(|name| format!("{out_dir}/{name}"))
        .collect()
}

pub fn run_plan(cfg: &ShotConfig, url: &str, out: Option<&str>, create: bool) -> Result<()> {
    if create {
        let out_dir = out.unwrap_or(cfg.output_dir.as_str());
        dir::create_dir(out_dir).with_context(|| format!("cannot prepare directory {out_dir}"))?;
    }
    for path in plan_paths(cfg, url, out) {
        println!("{path}");
    }
    Ok(())
}
