//! # CfgRS Common Utilities Module (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module is the parent for shared utilities used across the CfgRS
//! command handlers. Today that is the filesystem layer; utilities that are
//! not command-specific belong here rather than in `commands`.
//!
//! ## Architecture
//!
//! - **`fs`**: Path expansion, directory creation, file backup, and the
//!   safe file-write protocol.
//!
pub mod fs;
