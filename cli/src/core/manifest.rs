//! # CfgRS Manifest Model & Loading
//!
//! File: cli/src/core/manifest.rs
//!
//! ## Overview
//!
//! This module defines the TOML manifest consumed by `cfgrs apply`. A
//! manifest describes a configuration tree declaratively: directories to
//! create, a paths object mapping semantic keys to locations, and the
//! configuration files to write with their content.
//!
//! ## Architecture
//!
//! The manifest is deserialized with `serde` + `toml` into plain data:
//!
//! - `dirs`: path strings handed to the directory ensurer, in order.
//! - `paths`: the paths object handed to the layout adapter.
//! - `files`: an ordered array of `{ path, content }` tables, written
//!   through the config-file entry point in manifest order.
//! - `options`: per-field overrides of the config-file write defaults.
//!   Fields left out keep their defaults (backups on, mode `0o600`);
//!   permissions are given as an octal string such as `"600"` or `"0o644"`.
//!
//! ## Examples
//!
//! ```toml
//! dirs = ["~/.config/app"]
//!
//! [paths]
//! config = "~/.config/app/app.toml"
//! data = "~/.local/share/app"
//!
//! [[files]]
//! path = "~/.config/app/app.toml"
//! content = "x=1"
//!
//! [options]
//! backup = true
//! permissions = "600"
//! ```
//!
use crate::common::fs::io::WriteOptions;
use crate::core::error::{CfgrsError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A declarative description of a configuration tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Directories to ensure, in order.
    #[serde(default)]
    pub dirs: Vec<String>,

    /// Paths object: semantic key name to path string.
    #[serde(default)]
    pub paths: BTreeMap<String, String>,

    /// Configuration files to write, in manifest order.
    #[serde(default)]
    pub files: Vec<FileEntry>,

    /// Overrides of the config-file write defaults.
    #[serde(default)]
    pub options: WriteDefaults,
}

/// One file to write: target path and full content.
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub content: String,
}

/// Per-field overrides of [`WriteOptions::for_config`].
///
/// Every field is optional; fields left out keep the config defaults. This
/// is a shallow merge: each present field replaces exactly that field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WriteDefaults {
    pub backup: Option<bool>,
    pub permissions: Option<String>,
}

impl WriteDefaults {
    /// Merges these overrides onto the config-file defaults.
    pub fn resolve(&self) -> Result<WriteOptions> {
        let mut options = WriteOptions::for_config();
        if let Some(backup) = self.backup {
            options.backup = backup;
        }
        if let Some(mode) = &self.permissions {
            options.permissions = Some(parse_mode(mode)?);
        }
        Ok(options)
    }
}

/// Parses an octal permission string. Accepts an optional leading `0` or
/// `0o` prefix, so `"600"`, `"0600"` and `"0o600"` all mean `0o600`.
pub fn parse_mode(mode: &str) -> Result<u32> {
    let stripped = mode
        .strip_prefix("0o")
        .or_else(|| mode.strip_prefix("0O"))
        .unwrap_or(mode);
    u32::from_str_radix(stripped, 8).map_err(|_| {
        CfgrsError::InvalidMode {
            mode: mode.to_string(),
        }
        .into()
    })
}

/// Loads and validates a manifest from `path`.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be read, is not valid TOML for the
/// manifest shape, or contains a file entry with an empty path.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;
    let manifest: Manifest = toml::from_str(&content)
        .map_err(CfgrsError::from)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    validate_manifest(&manifest)?;
    debug!("Loaded manifest: {:?}", manifest);
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest) -> Result<()> {
    for (index, entry) in manifest.files.iter().enumerate() {
        if entry.path.is_empty() {
            anyhow::bail!(CfgrsError::Config(format!(
                "File entry {} has an empty path",
                index + 1
            )));
        }
    }
    // The options block fails fast here rather than midway through a write.
    manifest.options.resolve()?;
    Ok(())
}
