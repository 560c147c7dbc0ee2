//! # CfgRS Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the CfgRS application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CfgrsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover various domains:
//! - Configuration errors (missing home directory, bad option values)
//! - Filesystem errors (paths that exist but are not directories, failed writes)
//! - Manifest parsing errors
//!
//! Every fallible filesystem step surfaces its error to the immediate caller.
//! There are no internal retries and no swallowed errors: a failure in any step
//! of a multi-step operation aborts the remaining steps. Callers are expected to
//! wrap calls in their own error-handling scope; partial effects of batch
//! operations (some directories created, some files written) are documented
//! side effects and are never rolled back.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !path.is_dir() {
//!     anyhow::bail!(CfgrsError::FileSystem(format!("Not a directory: {}", path.display())));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the CfgRS application.
#[derive(Error, Debug)]
pub enum CfgrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Manifest parsing failed: {source}")]
    Manifest {
        #[from]
        source: toml::de::Error,
    },

    #[error("Invalid permission mode '{mode}': expected an octal value such as 600 or 0o644")]
    InvalidMode { mode: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
