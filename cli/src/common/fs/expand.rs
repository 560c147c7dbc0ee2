//! # CfgRS Path Expansion
//!
//! File: cli/src/common/fs/expand.rs
//!
//! ## Overview
//!
//! This module implements the home-shorthand path expander used by every other
//! filesystem helper in CfgRS. A leading `~` segment is rewritten to the user's
//! home directory; any other path is returned unchanged. Expansion is a pure
//! string-to-path rewrite: it performs no I/O, resolves no symlinks, and never
//! fails.
//!
//! ## Architecture
//!
//! The home directory is an explicit parameter rather than ambient global
//! state. `expand_path` receives the home value from its caller, which makes
//! the function deterministic under test (inject a temp directory as the
//! home). The single ambient lookup lives in `home_dir()`, a thin wrapper over
//! `dirs::home_dir()` that command handlers call exactly once at the CLI
//! boundary before passing the value down.
//!
//! The rewrite itself is delegated to `shellexpand::tilde_with_context`, which
//! implements the exact contract we need:
//! - `"~"` alone expands to the home directory, with no trailing separator
//! - `"~/tail"` expands to the home directory joined with `tail`
//! - anything else (absolute paths, relative paths, `~user` forms) is
//!   returned unchanged
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::expand;
//!
//! let home = expand::home_dir()?;
//! let config = expand::expand_path("~/.config/app/app.toml", &home);
//! let same = expand::expand_path("/etc/app.toml", &home); // unchanged
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Returns the current user's home directory.
///
/// This is the only place CfgRS reads the ambient home-directory value.
/// Command handlers call it once and thread the result through the
/// filesystem helpers, so the helpers themselves stay deterministic.
///
/// # Errors
///
/// Returns an `Err` if the platform reports no home directory for the
/// current user (rare, but possible in stripped-down environments).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine home directory")
}

/// Expands a leading `~` in `path` to the given home directory.
///
/// Pure function: no I/O, no error conditions. Paths that do not start with
/// the home marker are returned unchanged, byte for byte.
///
/// # Arguments
///
/// * `path` - The path string, possibly starting with `~` or `~/`.
/// * `home` - The home directory to substitute for the marker.
///
/// # Returns
///
/// * `PathBuf` - The expanded path.
pub fn expand_path(path: &str, home: &Path) -> PathBuf {
    let home_str = home.to_string_lossy();
    // shellexpand only rewrites a leading bare `~`; `~user` and everything
    // else pass through untouched.
    let expanded = shellexpand::tilde_with_context(path, || Some(&*home_str));
    PathBuf::from(expanded.into_owned())
}
