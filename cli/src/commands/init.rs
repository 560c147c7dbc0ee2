//! # CfgRS Init Command
//!
//! File: cli/src/commands/init.rs
//!
//! ## Overview
//!
//! Implements the `cfgrs init` command, which lays out the standard CfgRS
//! directory tree under a base directory. The command is idempotent: running
//! it against an existing layout succeeds without touching anything.
//!
//! ## Architecture
//!
//! 1. Resolve the home directory once, at this boundary.
//! 2. Prefix every entry of `layout::STANDARD_LAYOUT` with the chosen base
//!    (default: the home marker `~`).
//! 3. Ensure each directory sequentially, in layout order. A failure stops
//!    the run; directories already created stay in place.
//!
//! ## Examples
//!
//! ```bash
//! # Lay out the standard tree under the home directory
//! cfgrs init
//!
//! # Lay it out somewhere else (e.g., for a staged environment)
//! cfgrs init --base /srv/staging
//! ```
//!
use crate::common::fs::{expand, layout};
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// Arguments for the 'init' command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Base directory to create the standard layout under.
    #[arg(long, default_value = "~")]
    base: String,
}

/// Handler for the 'init' command.
pub async fn handle_init(args: InitArgs) -> Result<()> {
    info!("Handling init command (base: {})...", args.base);
    let home = expand::home_dir()?;

    let created = layout::ensure_layout(&args.base, layout::STANDARD_LAYOUT, &home).await?;
    for dir in &created {
        println!("  {}", dir.display());
    }
    println!(
        "✅ Standard layout ready under '{}' ({} directories).",
        args.base,
        created.len()
    );
    Ok(())
}
