//! Error types for Toolchest operations.
//!
//! This module defines [`ToolchestError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Registration conflicts and eligibility failures are not errors: they are
//!   logged and recovered locally so one misbehaving plugin never blocks
//!   discovery of the rest
//! - Use `ToolchestError` for conditions that must abort the current
//!   operation (missing default framework, failed download, failed install)
//! - Use `anyhow::Error` (via `ToolchestError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Toolchest operations.
#[derive(Debug, Error)]
pub enum ToolchestError {
    /// Requested category is not in the registry.
    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },

    /// Requested framework is not registered in its category.
    #[error("Unknown framework '{name}' in category '{category}'")]
    UnknownFramework { category: String, name: String },

    /// A category was invoked without a framework and has no default.
    /// This indicates a discovery/registration bug, not a user error.
    #[error("A default framework for category '{category}' was requested where there is none")]
    NoDefaultFramework { category: String },

    /// A requirement name could not be looked up (malformed identifier).
    #[error("Could not look up requirement '{requirement}'")]
    RequirementLookup { requirement: String },

    /// A plugin descriptor failed to build its installer.
    #[error("Invalid download URL '{url}': {message}")]
    InvalidDownloadUrl { url: String, message: String },

    /// Archive download failed.
    #[error("Failed to download {url}: {message}")]
    Download { url: String, message: String },

    /// Archive could not be unpacked into the destination.
    #[error("Failed to unpack archive into {dest}: {message}")]
    ExtractFailed { dest: PathBuf, message: String },

    /// Installation mechanics failed after all pre-checks passed.
    #[error("Installation of '{framework}' failed: {message}")]
    InstallFailed { framework: String, message: String },

    /// Privilege elevation or privilege drop failed.
    #[error("Privilege handling failed: {message}")]
    Privilege { message: String },

    /// Configuration file could not be written back.
    #[error("Failed to write configuration at {path}: {message}")]
    ConfigWrite { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Toolchest operations.
pub type Result<T> = std::result::Result<T, ToolchestError>;
