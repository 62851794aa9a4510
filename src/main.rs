//! Scrawl - a minimal terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! scrawl notes.txt
//! scrawl ~/projects/docs
//! scrawl --sidebar notes.txt
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use scrawl::app::App;

/// A minimal terminal text editor with a directory sidebar
#[derive(Parser, Debug)]
#[command(name = "scrawl", version, about, long_about = None)]
struct Cli {
    /// File to edit, or directory to browse
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Start with the directory sidebar visible
    #[arg(long)]
    sidebar: bool,

    /// Append log output to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            // Log file records user-action outcomes, so default to INFO.
            let filter = tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into());
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .context("log file path has no file name")?;
            let appender = tracing_appender::rolling::never(dir, name);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(appender)
                .with_ansi(false)
                .init();
        }
        None => {
            // Stderr is occupied by the TUI, so keep it quiet by default.
            let filter = tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into());
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut app = App::new(cli.path).with_sidebar(cli.sidebar);
    app.run().context("Application error")
}
