//! # CfgRS Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output (I/O) operations at the
//! heart of CfgRS: idempotent directory creation and the safe file-write
//! protocol used to persist configuration files without clobbering prior
//! state. All operations are async wrappers over `tokio::fs`, executed
//! sequentially with no internal concurrency.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory and any missing ancestors at
//!   an already-expanded path (`mkdir -p` semantics). If the path exists but
//!   is not a directory, an error is returned.
//! - **`ensure_directory` / `ensure_directories`**: Home-expanding wrappers.
//!   The batch form processes entries in input order; a failure aborts the
//!   remaining entries, and directories already created stay in place.
//! - **`write_file`**: The safe write protocol, in order: expand the path,
//!   ensure its parent directory exists, optionally back up a pre-existing
//!   file, write the new content (truncate-and-write), optionally set the
//!   file's permission bits. Each step's failure aborts the rest.
//! - **`write_files` / `write_config_files`**: Batch forms over ordered
//!   `(path, content)` pairs. The config variant defaults to backups on and
//!   owner-only read/write permissions.
//!
//! The parent directory is ensured even when the target file already exists,
//! and before any backup or write attempt, so a brand-new nested file path is
//! recoverable in that step.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io::{self, WriteOptions};
//!
//! let home = crate::common::fs::expand::home_dir()?;
//! let result = io::write_file(
//!     "~/.config/app/app.toml",
//!     "x=1",
//!     WriteOptions { backup: true, permissions: Some(0o600) },
//!     &home,
//! )
//! .await?;
//! if let Some(saved) = &result.backup {
//!     println!("Previous version saved to {}", saved.display());
//! }
//! ```
//!
use crate::common::fs::{backup, expand};
use crate::core::error::{CfgrsError, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Options accepted by the safe file-write protocol.
///
/// `backup` defaults to `false` in the low-level writer; `write_config_files`
/// flips the defaults via [`WriteOptions::for_config`]. Callers wanting a
/// partial override of the config defaults use struct-update syntax:
/// `WriteOptions { backup: false, ..WriteOptions::for_config() }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Snapshot any pre-existing file to a timestamped backup before writing.
    pub backup: bool,
    /// Permission bits to set on the written file, replacing the existing
    /// mode outright. `None` leaves the platform default mode in place.
    pub permissions: Option<u32>,
}

impl WriteOptions {
    /// Defaults for configuration files: backups on, owner-only read/write.
    pub fn for_config() -> Self {
        Self {
            backup: true,
            permissions: Some(0o600),
        }
    }
}

/// Outcome of one safe file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// The expanded absolute path actually written.
    pub path: PathBuf,
    /// Path of the backup created for this write, if any.
    pub backup: Option<PathBuf>,
    /// True when no backup was made. Heuristic for "this is a new file":
    /// accurate only when `backup` was requested in the options, since
    /// without a backup request no existence check is made and the flag is
    /// vacuously true for existing and new files alike.
    pub created: bool,
}

/// Ensures that a directory exists at the specified (already-expanded) path.
///
/// If the path does not exist, it is created along with any missing parent
/// directories. If the path exists but is not a directory (e.g., it's a
/// file), an error is returned.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the directory path to ensure exists.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if the directory exists or was successfully created.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(CfgrsError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Expands `path` and ensures a directory exists there.
///
/// # Returns
///
/// * `Result<PathBuf>` - The expanded path on success.
pub async fn ensure_directory(path: &str, home: &Path) -> Result<PathBuf> {
    let expanded = expand::expand_path(path, home);
    ensure_dir_exists(&expanded).await?;
    Ok(expanded)
}

/// Ensures every directory in `paths`, sequentially, in input order.
///
/// A failure on one entry aborts the remaining entries. Directories created
/// before the failure are left in place; there is no rollback.
pub async fn ensure_directories<S: AsRef<str>>(paths: &[S], home: &Path) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(paths.len());
    for path in paths {
        created.push(ensure_directory(path.as_ref(), home).await?);
    }
    Ok(created)
}

/// Writes `content` to `path` using the safe write protocol.
///
/// The steps run in order, and any step's failure aborts the remaining
/// steps and propagates the error:
///
/// 1. Expand `path` against `home`.
/// 2. Ensure the parent directory of the expanded path exists.
/// 3. If `options.backup` is set, snapshot any pre-existing file.
/// 4. Write `content` as the complete replacement of the file.
/// 5. If `options.permissions` is set, replace the file's permission bits.
///
/// # Arguments
///
/// * `path` - The target file path, possibly starting with `~`.
/// * `content` - The full new content of the file.
/// * `options` - Backup and permission behavior for this write.
/// * `home` - The home directory used for expansion.
///
/// # Returns
///
/// * `Result<WriteResult>` - The expanded path, the backup path (if one was
///   made), and the `created` heuristic.
pub async fn write_file(
    path: &str,
    content: &str,
    options: WriteOptions,
    home: &Path,
) -> Result<WriteResult> {
    let expanded = expand::expand_path(path, home);

    // The parent is ensured unconditionally, before any backup or write, so
    // a brand-new nested file path is recoverable here.
    if let Some(parent) = expanded.parent() {
        ensure_dir_exists(parent).await?;
    }

    let backup = if options.backup {
        backup::backup_existing(&expanded).await?
    } else {
        None
    };

    fs::write(&expanded, content)
        .await
        .with_context(|| format!("Failed to write to file {:?}", expanded))?;
    info!("Wrote content to file: {:?}", expanded);

    if let Some(mode) = options.permissions {
        set_mode(&expanded, mode).await?;
    }

    let created = backup.is_none();
    Ok(WriteResult {
        path: expanded,
        backup,
        created,
    })
}

/// Writes each `(path, content)` pair through [`write_file`], sequentially,
/// in slice order. A failure on one entry aborts the remaining entries;
/// earlier writes keep their effects. Returns one result per processed entry.
pub async fn write_files<P: AsRef<str>, C: AsRef<str>>(
    files: &[(P, C)],
    options: WriteOptions,
    home: &Path,
) -> Result<Vec<WriteResult>> {
    let mut results = Vec::with_capacity(files.len());
    for (path, content) in files {
        results.push(write_file(path.as_ref(), content.as_ref(), options, home).await?);
    }
    Ok(results)
}

/// Configuration-file variant of [`write_files`].
///
/// When `options` is `None`, [`WriteOptions::for_config`] applies: backups
/// on and mode `0o600`. Callers overriding individual fields build their
/// options with struct-update syntax against `for_config()`.
pub async fn write_config_files<P: AsRef<str>, C: AsRef<str>>(
    files: &[(P, C)],
    options: Option<WriteOptions>,
    home: &Path,
) -> Result<Vec<WriteResult>> {
    let options = options.unwrap_or_else(WriteOptions::for_config);
    write_files(files, options, home).await
}

/// Replaces the permission bits of `path` with exactly `mode`.
///
/// Mode bits are a Unix concept; on other platforms the request is ignored.
#[cfg(unix)]
async fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .await
        .with_context(|| format!("Failed to set mode {:o} on {:?}", mode, path))?;
    debug!("Set mode {:o} on {:?}", mode, path);
    Ok(())
}

#[cfg(not(unix))]
async fn set_mode(path: &Path, mode: u32) -> Result<()> {
    debug!("Ignoring mode {:o} for {:?}: not a Unix platform", mode, path);
    Ok(())
}

// --- Unit Tests ---
// Tests for directory creation and the safe write protocol, using temporary
// directories as an injected fake home.
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::tempdir;

    /// Directory creation is idempotent.
    #[tokio::test]
    async fn test_ensure_directory_idempotent() -> Result<()> {
        let home = tempdir()?;
        let first = ensure_directory("~/nested/dir", home.path()).await?;
        let second = ensure_directory("~/nested/dir", home.path()).await?;
        assert_eq!(first, second);
        assert!(first.is_dir());
        Ok(())
    }

    /// All missing ancestor levels are created.
    #[tokio::test]
    async fn test_ensure_directory_nested_creation() -> Result<()> {
        let home = tempdir()?;
        let created = ensure_directory("~/a/b/c", home.path()).await?;
        assert_eq!(created, home.path().join("a/b/c"));
        assert!(home.path().join("a").is_dir());
        assert!(home.path().join("a/b").is_dir());
        assert!(home.path().join("a/b/c").is_dir());
        Ok(())
    }

    /// A file occupying the target path is an error, not silently accepted.
    #[tokio::test]
    async fn test_ensure_directory_path_is_file() -> Result<()> {
        let home = tempdir()?;
        std_fs::write(home.path().join("blocker"), "not a dir")?;
        let result = ensure_directory("~/blocker", home.path()).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    /// Batch creation stops at the first failure and leaves earlier
    /// directories in place.
    #[tokio::test]
    async fn test_ensure_directories_partial_failure() -> Result<()> {
        let home = tempdir()?;
        std_fs::write(home.path().join("blocker"), "occupied")?;
        let paths = ["~/first", "~/blocker/sub", "~/third"];

        let result = ensure_directories(&paths, home.path()).await;
        assert!(result.is_err());
        assert!(home.path().join("first").is_dir());
        assert!(!home.path().join("third").exists());
        Ok(())
    }

    /// Writing a brand-new nested file creates the parent directory first.
    #[tokio::test]
    async fn test_write_file_creates_parents() -> Result<()> {
        let home = tempdir()?;
        let result = write_file("~/deep/nested/app.toml", "x=1", WriteOptions::default(), home.path())
            .await?;
        assert_eq!(result.path, home.path().join("deep/nested/app.toml"));
        assert_eq!(std_fs::read_to_string(&result.path)?, "x=1");
        assert!(result.backup.is_none());
        assert!(result.created);
        Ok(())
    }

    /// With backups requested: a fresh path reports `created` and no backup,
    /// an existing path reports a backup holding the pre-write content.
    #[tokio::test]
    async fn test_write_file_created_flag_with_backup() -> Result<()> {
        let home = tempdir()?;
        let options = WriteOptions {
            backup: true,
            ..WriteOptions::default()
        };

        let first = write_file("~/app.toml", "x=1", options, home.path()).await?;
        assert!(first.created);
        assert!(first.backup.is_none());

        let second = write_file("~/app.toml", "x=2", options, home.path()).await?;
        assert!(!second.created);
        let backup = second.backup.expect("backup expected for existing file");
        assert_eq!(std_fs::read_to_string(&backup)?, "x=1");
        assert_eq!(std_fs::read_to_string(&second.path)?, "x=2");
        Ok(())
    }

    /// Without a backup request the flag is vacuously true even when the
    /// file already existed. Documented heuristic, pinned here.
    #[tokio::test]
    async fn test_write_file_created_flag_without_backup() -> Result<()> {
        let home = tempdir()?;
        write_file("~/app.toml", "x=1", WriteOptions::default(), home.path()).await?;
        let rewrite = write_file("~/app.toml", "x=2", WriteOptions::default(), home.path()).await?;
        assert!(rewrite.created);
        assert!(rewrite.backup.is_none());
        Ok(())
    }

    /// The permission step replaces the mode bits exactly.
    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_file_sets_permissions() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let home = tempdir()?;
        let options = WriteOptions {
            permissions: Some(0o600),
            ..WriteOptions::default()
        };
        let result = write_file("~/secret.toml", "token=abc", options, home.path()).await?;
        let mode = std_fs::metadata(&result.path)?.permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        Ok(())
    }

    /// Batch writes process entries in order and stop at the first failure.
    #[tokio::test]
    async fn test_write_files_partial_failure() -> Result<()> {
        let home = tempdir()?;
        // A file occupying the second entry's parent path makes that write fail.
        std_fs::write(home.path().join("blocker"), "occupied")?;
        let files = [
            ("~/one.toml", "a=1"),
            ("~/blocker/two.toml", "b=2"),
            ("~/three.toml", "c=3"),
        ];

        let result = write_files(&files, WriteOptions::default(), home.path()).await;
        assert!(result.is_err());
        assert_eq!(std_fs::read_to_string(home.path().join("one.toml"))?, "a=1");
        assert!(!home.path().join("three.toml").exists());
        Ok(())
    }

    /// End-to-end config write: first write is fresh, re-write backs up the
    /// previous content and keeps the restrictive mode.
    #[tokio::test]
    async fn test_write_config_files_end_to_end() -> Result<()> {
        let home = tempdir()?;
        let files = [("~/config/app.ini", "x=1")];

        let first = write_config_files(&files, None, home.path()).await?;
        assert_eq!(first.len(), 1);
        assert!(first[0].created);
        assert!(first[0].backup.is_none());
        assert_eq!(std_fs::read_to_string(&first[0].path)?, "x=1");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std_fs::metadata(&first[0].path)?.permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }

        let rewrite = [("~/config/app.ini", "x=2")];
        let second = write_config_files(&rewrite, None, home.path()).await?;
        assert!(!second[0].created);
        let backup = second[0].backup.as_ref().expect("backup expected");
        assert_eq!(std_fs::read_to_string(backup)?, "x=1");
        assert_eq!(std_fs::read_to_string(&second[0].path)?, "x=2");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std_fs::metadata(&second[0].path)?.permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
        Ok(())
    }

    /// Config defaults can be partially overridden with struct-update syntax.
    #[tokio::test]
    async fn test_write_config_files_override() -> Result<()> {
        let home = tempdir()?;
        std_fs::write(home.path().join("app.ini"), "old")?;

        let options = WriteOptions {
            backup: false,
            ..WriteOptions::for_config()
        };
        let results =
            write_config_files(&[("~/app.ini", "new")], Some(options), home.path()).await?;
        assert!(results[0].backup.is_none());
        assert_eq!(std_fs::read_to_string(&results[0].path)?, "new");
        Ok(())
    }
}
