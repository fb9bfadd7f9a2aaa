//! Error types for rigcheck operations.
//!
//! This module defines [`RigcheckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Numeric parse failures inside a snapshot are not errors: the validator
//!   reports them as deficiency messages
//! - Use `RigcheckError` for failures that stop a command (bad config, a
//!   malformed snapshot file, a failed install)
//! - Use `anyhow::Error` (via `RigcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rigcheck operations.
#[derive(Debug, Error)]
pub enum RigcheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A recorded snapshot could not be read (missing keys, bad syntax).
    #[error("Failed to read snapshot at {path}: {message}")]
    SnapshotParseError { path: PathBuf, message: String },

    /// Requested tier name is not in the catalog.
    #[error("Unknown tier: {name}")]
    UnknownTier { name: String },

    /// External command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A tool needed for bootstrapping is missing.
    #[error("Missing requirement '{requirement}': {message}")]
    RequirementMissing {
        requirement: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RigcheckError {
    /// Process exit code: 2 for usage and input problems, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::ConfigValidationError { .. }
            | Self::SnapshotParseError { .. }
            | Self::UnknownTier { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for rigcheck operations.
pub type Result<T> = std::result::Result<T, RigcheckError>;
