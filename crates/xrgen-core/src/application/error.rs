//! Application layer errors.
//!
//! These errors represent failures in orchestration and filesystem access.
//! The domain layer (identifier derivation, the rewrite table) is made of
//! total functions and produces no errors of its own.
//!
//! Every error here is fatal: the run is strictly linear with no retries
//! and no partial-failure aggregation, so the first failure halts it.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while cloning, cleaning, or rewriting a sample tree.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The base template directory is missing from the samples root.
    #[error("Template not found at {path}")]
    TemplateMissing { path: PathBuf },

    /// The destination sample directory already exists. The clone contract
    /// requires a fresh destination; nothing pre-existing is touched.
    #[error("Destination already exists at {path}")]
    DestinationExists { path: PathBuf },

    /// The tree clone failed for a reason other than the single-file
    /// fallback (permissions, disk full, racing creation of the
    /// destination).
    #[error("Copy failed at {path}: {reason}")]
    CopyFailed { path: PathBuf, reason: String },

    /// A cleanup target is neither a file, a symlink, nor a directory.
    /// Should not occur with an intact template layout.
    #[error("Entry {path} is neither a file nor a directory, refusing to delete")]
    InvalidEntryKind { path: PathBuf },

    /// A read, write, list, or remove failed during cleanup or rewrite.
    #[error("Filesystem error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// File content is not valid UTF-8 text. Binary payloads are expected
    /// to live under an `assets` directory, which the rewrite walk prunes.
    #[error("File {path} is not valid UTF-8 text")]
    Decode { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateMissing { path } => vec![
                format!("Expected the base template at: {}", path.display()),
                "Check the samples root (--samples-root or the config file)".into(),
                "Run the tool from the directory that contains XrAppBase".into(),
            ],
            Self::DestinationExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different app name".into(),
                "Remove the existing directory first if it is stale".into(),
            ],
            Self::CopyFailed { path, .. } => vec![
                format!("Failed while copying: {}", path.display()),
                "Check free disk space and write permissions on the samples root".into(),
            ],
            Self::InvalidEntryKind { path } => vec![
                format!("Unexpected entry in the clone: {}", path.display()),
                "The template layout looks corrupted; restore XrAppBase from source control"
                    .into(),
            ],
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::Decode { path } => vec![
                format!("Not valid UTF-8: {}", path.display()),
                "Binary files belong under an assets directory, which the rewrite skips".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
            Self::DestinationExists { .. } => ErrorCategory::Validation,
            Self::CopyFailed { .. }
            | Self::InvalidEntryKind { .. }
            | Self::Io { .. }
            | Self::Decode { .. } => ErrorCategory::Internal,
        }
    }
}
