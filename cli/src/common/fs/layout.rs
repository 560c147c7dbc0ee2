//! # CfgRS Directory Layout Helpers
//!
//! File: cli/src/common/fs/layout.rs
//!
//! ## Overview
//!
//! This module carries the convenience data and adapters sitting on top of
//! the directory ensurer. It knows two input shapes:
//!
//! - **The standard layout**: an ordered list of relative directory paths
//!   describing the directory tree `cfgrs init` lays out. Each entry is
//!   prefixed with a caller-chosen base directory (default `~`) before
//!   creation.
//! - **A paths object**: a mapping from semantic key names to path strings,
//!   as produced by a configuration manifest. Keys naming files (matched
//!   case-insensitively against a fixed marker set) contribute their parent
//!   directory; every other entry contributes itself as a directory.
//!   Duplicate directories are de-duplicated before creation.
//!
//! Both adapters are pure translation layers over `io::ensure_directories`
//! and carry no failure handling of their own.
//!
use crate::common::fs::{expand, io};
use crate::core::error::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The directory tree `cfgrs init` creates, relative to the base directory.
pub const STANDARD_LAYOUT: &[&str] = &[
    ".cfgrs",
    ".cfgrs/profiles",
    ".cfgrs/templates",
    ".cfgrs/logs",
];

/// Semantic key names that refer to files rather than directories.
/// Matched case-insensitively against the keys of a paths object.
const FILE_KEYS: &[&str] = &["config", "env", "credentials", "history"];

/// Ensures every entry of `layout` under `base`, in layout order.
///
/// Each entry is joined to `base` with a single separator; the combined
/// paths go through the usual home expansion, so `base` may be `~`.
pub async fn ensure_layout(base: &str, layout: &[&str], home: &Path) -> Result<Vec<PathBuf>> {
    let prefixed: Vec<String> = layout
        .iter()
        .map(|entry| format!("{}/{}", base.trim_end_matches('/'), entry))
        .collect();
    io::ensure_directories(&prefixed, home).await
}

/// Ensures the directories implied by a paths object.
///
/// File-keyed entries are reduced to their parent directory; directory-keyed
/// entries are taken as-is. The resulting set is de-duplicated and created
/// in sorted order.
///
/// # Returns
///
/// * `Result<Vec<PathBuf>>` - The de-duplicated, expanded directories that
///   were ensured.
pub async fn ensure_paths(paths: &BTreeMap<String, String>, home: &Path) -> Result<Vec<PathBuf>> {
    let mut directories = BTreeSet::new();
    for (key, value) in paths {
        let expanded = expand::expand_path(value, home);
        if is_file_key(key) {
            // The value names a file; its parent is what must exist.
            if let Some(parent) = expanded.parent() {
                directories.insert(parent.to_path_buf());
            }
        } else {
            directories.insert(expanded);
        }
    }
    debug!("Paths object resolved to {} directories", directories.len());

    let mut created = Vec::with_capacity(directories.len());
    for dir in &directories {
        io::ensure_dir_exists(dir).await?;
        created.push(dir.clone());
    }
    Ok(created)
}

fn is_file_key(key: &str) -> bool {
    FILE_KEYS.contains(&key.to_ascii_lowercase().as_str())
}
