//! # CfgRS Filesystem Utilities Module (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module groups the filesystem helpers at the core of CfgRS: safely
//! creating configuration directories and writing configuration files with
//! backup and permission control, plus the home-shorthand path expansion the
//! other helpers build on.
//!
//! ## Architecture
//!
//! Functionality is organized into submodules by concern:
//!
//! - **`expand`**: Rewrites a leading `~` segment to the home directory.
//!   The home value is passed in explicitly; the single ambient lookup
//!   (`home_dir`) lives here too and is called only at the CLI boundary.
//! - **`io`**: Idempotent directory creation and the safe file-write
//!   protocol (`ensure_directory`, `write_file`, and their batch forms).
//! - **`backup`**: Timestamped copy-before-overwrite snapshots of existing
//!   files, used by the writer when backups are requested.
//! - **`layout`**: The standard directory layout and the paths-object
//!   adapter, thin translation layers over `io`.
//!
//! All multi-item operations run sequentially in input order. A failure on
//! one item aborts the rest; completed side effects are kept, not rolled
//! back. No state is cached between calls and no file handles are held
//! across protocol steps.
//!
// Declare the submodules within the fs module.
pub mod backup; // Timestamped pre-write snapshots.
pub mod expand; // Home-shorthand path expansion.
pub mod io; // Directory creation and the safe write protocol.
pub mod layout; // Standard layout and paths-object adapter.
