//! CLI for the shotfs filesystem helpers.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use shotfs_core::config::{self, ShotConfig};
use std::path::{Path, PathBuf};

use commands::{
    run_cat, run_completions, run_copy, run_mkdir, run_name, run_plan, run_rm, run_write,
    WriteSource,
};

/// Top-level CLI for shotfs.
#[derive(Debug, Parser)]
#[command(name = "shotfs")]
#[command(about = "shotfs: filesystem helpers for screenshot runs", long_about = None)]
pub struct Cli {
    /// Read configuration from FILE instead of ~/.config/shotfs/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create a directory and every missing parent (`/`-separated).
    Mkdir {
        /// Directory path.
        path: String,
    },

    /// Delete paths or glob matches recursively. Prefix a pattern with `!` to keep its matches.
    Rm {
        /// Paths or glob patterns.
        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// Print a file's raw bytes to stdout.
    Cat {
        /// File to read.
        path: PathBuf,
    },

    /// Write a file, replacing any previous content. Reads stdin unless --text or --from is given.
    Write {
        /// Destination file.
        path: PathBuf,
        /// Literal content to write.
        #[arg(long, conflicts_with = "from")]
        text: Option<String>,
        /// Copy the content of this file.
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,
    },

    /// Copy a directory tree.
    Copy {
        /// Source directory.
        from: PathBuf,
        /// Destination directory (created if missing).
        to: PathBuf,
    },

    /// Print the screenshot filename for a URL, width and browser.
    Name {
        /// Page URL.
        url: String,
        /// Viewport width in pixels.
        width: u32,
        /// Browser name.
        browser: String,
    },

    /// Print the screenshot path for every configured browser and width.
    Plan {
        /// Page URL.
        url: String,
        /// Output directory (overrides `output_dir` from the config).
        #[arg(long, value_name = "DIR")]
        out: Option<String>,
        /// Create the output directory as well.
        #[arg(long)]
        create: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

/// Explicit `--config` file, else the XDG config (created with defaults on first use).
fn load_config(explicit: Option<&Path>) -> Result<ShotConfig> {
    let cfg = match explicit {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Mkdir { path } => run_mkdir(&path)?,
            CliCommand::Rm { patterns } => run_rm(&patterns),
            CliCommand::Cat { path } => run_cat(&path).await?,
            CliCommand::Write { path, text, from } => {
                let source = match (text, from) {
                    (Some(text), _) => WriteSource::Text(text),
                    (None, Some(file)) => WriteSource::File(file),
                    (None, None) => WriteSource::Stdin,
                };
                run_write(&path, source).await?;
            }
            CliCommand::Copy { from, to } => run_copy(&from, &to)?,
            CliCommand::Name {
                url,
                width,
                browser,
            } => run_name(&url, width, &browser),
            CliCommand::Plan { url, out, create } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_plan(&cfg, &url, out.as_deref(), create)?;
            }
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
