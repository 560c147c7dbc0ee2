//! # CfgRS Commands Module
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module is the parent for all top-level CfgRS commands. Each command
//! lives in its own submodule with a Clap args struct and an async
//! `handle_*` function; `main.rs` routes parsed arguments here.
//!
//! ## Architecture
//!
//! - **`init`**: Lays out the standard configuration directory tree.
//! - **`apply`**: Applies a TOML manifest (directories, paths object,
//!   configuration files).
//!
pub mod apply;
pub mod init;
