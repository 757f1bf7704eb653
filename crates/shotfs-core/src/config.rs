use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/shotfs/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotConfig {
    /// Directory screenshots are written under (`/`-separated, relative to the working directory unless absolute).
    pub output_dir: String,
    /// Browsers a page is captured with, in capture order.
    #[serde(default = "default_browsers")]
    pub browsers: Vec<String>,
    /// Viewport widths in CSS pixels.
    #[serde(default = "default_widths")]
    pub widths: Vec<u32>,
}

fn default_browsers() -> Vec<String> {
    vec!["chrome".to_string()]
}

fn default_widths() -> Vec<u32> {
    vec![320, 1024]
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            output_dir: "screenshots".to_string(),
            browsers: default_browsers(),
            widths: default_widths(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shotfs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShotConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ShotConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<ShotConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: ShotConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
