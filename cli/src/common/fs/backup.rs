//! # CfgRS File Backup Operations
//!
//! File: cli/src/common/fs/backup.rs
//!
//! ## Overview
//!
//! This module snapshots existing files before they are overwritten. A backup
//! is a full byte copy of the source placed next to it, with a literal
//! `.backup-<timestamp>` suffix appended to the original file name. The source
//! file is left in place (copy, not move). Backups are never modified and
//! never automatically deleted by CfgRS.
//!
//! ## Architecture
//!
//! - **`backup_file`**: The public entry point. Expands the given path and
//!   delegates to `backup_existing`.
//! - **`backup_existing`**: Operates on an already-expanded path. A missing
//!   source is a normal outcome ("nothing to back up") and returns `Ok(None)`;
//!   an existing source that fails to copy is an error, not an absence.
//! - **`backup_path_for`**: Pure derivation of the backup path from the source
//!   path and an instant. The timestamp is the UTC instant rendered as RFC 3339
//!   with millisecond resolution, with colons and periods replaced by hyphens
//!   so the suffix is filesystem-legal and lexically sortable, e.g.
//!   `app.toml.backup-2026-08-06T12-34-56-789Z`.
//!
//! Millisecond resolution is the collision strategy: two backups of the same
//! source in the same millisecond would collide on the same name, which is an
//! accepted limitation of the single-writer usage model.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::backup;
//!
//! let home = crate::common::fs::expand::home_dir()?;
//! match backup::backup_file("~/.config/app/app.toml", &home).await? {
//!     Some(saved) => println!("Previous config saved to {}", saved.display()),
//!     None => println!("No previous config to save."),
//! }
//! ```
//!
use crate::common::fs::expand;
use crate::core::error::Result;
use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Backs up the file at `path` (after home expansion), if it exists.
///
/// # Arguments
///
/// * `path` - The file to back up, possibly starting with `~`.
/// * `home` - The home directory used for expansion.
///
/// # Returns
///
/// * `Result<Option<PathBuf>>` - `Some(backup_path)` if a backup was created,
///   `None` if the source file does not exist.
///
/// # Errors
///
/// Returns an `Err` if the source exists but the copy fails (permissions,
/// disk full, source is a directory, etc.).
#[allow(dead_code)] // The writer goes through `backup_existing`; this entry point is for direct callers.
pub async fn backup_file(path: &str, home: &Path) -> Result<Option<PathBuf>> {
    let expanded = expand::expand_path(path, home);
    backup_existing(&expanded).await
}

/// Backs up an already-expanded file path, if the file exists.
///
/// The absence of the source is a normal outcome, not a failure: callers use
/// this before overwriting a file that may or may not already be there.
pub async fn backup_existing(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        // Nothing to back up.
        debug!("No existing file to back up at {:?}", path);
        return Ok(None);
    }

    let backup_path = backup_path_for(path, Utc::now());
    fs::copy(path, &backup_path)
        .await
        .with_context(|| format!("Failed to back up {:?} to {:?}", path, backup_path))?;
    info!("Backed up {:?} -> {:?}", path, backup_path);
    Ok(Some(backup_path))
}

/// Derives the backup path for `path` at the instant `now`.
///
/// Pure function; the instant is a parameter so tests can pin it.
fn backup_path_for(path: &Path, now: DateTime<Utc>) -> PathBuf {
    // RFC 3339 with millisecond resolution, then make it filesystem-legal:
    // colons and the fractional-second period become hyphens. The result
    // still sorts lexically in time order.
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "-")
        .replace('.', "-");
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".backup-{stamp}"));
    PathBuf::from(name)
}
