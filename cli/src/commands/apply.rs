//! # CfgRS Apply Command
//!
//! File: cli/src/commands/apply.rs
//!
//! ## Overview
//!
//! Implements the `cfgrs apply` command: reads a TOML manifest describing a
//! configuration tree and realizes it on disk. Directories come first, then
//! the directories implied by the paths object, then the configuration
//! files themselves, written with backup and permission control.
//!
//! ## Architecture
//!
//! 1. Resolve the home directory once, at this boundary.
//! 2. Load and validate the manifest (`core::manifest`).
//! 3. `dirs` entries go through `ensure_directories`, in manifest order.
//! 4. `paths` entries go through the paths-object adapter.
//! 5. `files` entries go through `write_config_files` with the manifest's
//!    resolved options (defaults: backups on, mode `0o600`).
//!
//! Each stage aborts the run on its first failure. Effects of completed
//! stages and entries are kept; there is no rollback.
//!
//! ## Examples
//!
//! ```bash
//! cfgrs apply app-layout.toml
//!
//! # With more logging
//! cfgrs -vv apply app-layout.toml
//! ```
//!
use crate::common::fs::{expand, io, layout};
use crate::core::error::Result;
use crate::core::manifest;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the 'apply' command.
#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Path to the manifest file to apply.
    manifest: PathBuf,
}

/// Handler for the 'apply' command.
pub async fn handle_apply(args: ApplyArgs) -> Result<()> {
    info!("Handling apply command ({})...", args.manifest.display());
    let home = expand::home_dir()?;
    let manifest = manifest::load_manifest(&args.manifest)?;

    if !manifest.dirs.is_empty() {
        let created = io::ensure_directories(&manifest.dirs, &home).await?;
        println!("Ensured {} directories.", created.len());
    }

    if !manifest.paths.is_empty() {
        let created = layout::ensure_paths(&manifest.paths, &home).await?;
        println!("Ensured {} directories from the paths object.", created.len());
    }

    if !manifest.files.is_empty() {
        let options = manifest.options.resolve()?;
        let pairs: Vec<(&str, &str)> = manifest
            .files
            .iter()
            .map(|entry| (entry.path.as_str(), entry.content.as_str()))
            .collect();
        let results = io::write_config_files(&pairs, Some(options), &home).await?;
        for result in &results {
            let verb = if result.created { "wrote" } else { "updated" };
            match &result.backup {
                Some(saved) => println!(
                    "  {} {} (previous version: {})",
                    verb,
                    result.path.display(),
                    saved.display()
                ),
                None => println!("  {} {}", verb, result.path.display()),
            }
        }
        println!("✅ Wrote {} configuration file(s).", results.len());
    }

    Ok(())
}
