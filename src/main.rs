//! VirtuArt - A terminal gallery landing page
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use virtuart::RunOptions;
use virtuart_core::prelude::*;

/// VirtuArt - A terminal gallery landing page
#[derive(Parser, Debug)]
#[command(name = "virtuart")]
#[command(about = "A terminal gallery landing page with an auto-advancing carousel", long_about = None)]
struct Args {
    /// Directory holding .virtuart/ (defaults to the current directory)
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Write default .virtuart/config.toml and content.toml, then exit
    #[arg(long)]
    init: bool,

    /// Disable carousel auto-advance
    #[arg(long)]
    no_autoplay: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let dir = args
        .dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        virtuart::init(&dir)?;
        eprintln!("✅ Wrote default config to {}", dir.join(".virtuart").display());
        return Ok(());
    }

    virtuart::run(
        &dir,
        RunOptions {
            no_autoplay: args.no_autoplay,
        },
    )
    .await
}
