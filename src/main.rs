mod calculator;
mod domain;
mod error;
mod formulas;
mod page;
mod ranges;
mod server;
mod units;
mod validation;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use crate::page::PageRenderer;
use crate::server::AppState;

/// U.S. Navy body fat calculator web form.
#[derive(Parser, Debug)]
#[command(name = "navy-bodyfat")]
#[command(about = "Estimate body fat percentage from circumference measurements")]
#[command(version)]
struct Args {
    /// Port number for the web server.
    /// Can also be set via PORT environment variable.
    #[arg(long, value_name = "PORT", env = "PORT", default_value = "8080")]
    port: u16,

    /// Directory holding the page stylesheet and script.
    /// Can also be set via BODYFAT_STATIC_DIR environment variable.
    #[arg(long, value_name = "DIR", env = "BODYFAT_STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let page = PageRenderer::new().context("Failed to compile page template")?;
    let state = Arc::new(AppState { page });

    let static_dir = match args.static_dir {
        Some(dir) => dir,
        None => find_static_dir(),
    };
    if !static_dir.is_dir() {
        log::warn!(
            "Static directory {} not found; page will render unstyled",
            static_dir.display()
        );
    }
    log::info!("Static files: {}", static_dir.display());

    server::run_server(state, args.port, static_dir).await?;

    Ok(())
}

/// Finds the static directory for serving frontend files.
fn find_static_dir() -> PathBuf {
    // Try relative to current working directory
    let cwd_static = PathBuf::from("static");
    if cwd_static.is_dir() {
        return cwd_static;
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let exe_static = exe_dir.join("static");
        if exe_static.is_dir() {
            return exe_static;
        }
    }

    cwd_static
}
