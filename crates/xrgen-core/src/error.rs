//! Unified error handling for Xrgen Core.
//!
//! This module provides a unified error type that wraps the application
//! errors, with rich context and user-actionable suggestions. The domain
//! layer is total and contributes no error variants of its own.

use thiserror::Error;

use crate::application::ApplicationError;

/// Root error type for Xrgen Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// xrgen-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum XrgenError {
    /// Errors from the application layer (clone, cleanup, rewrite).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl XrgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in xrgen".into(),
                "Please report this issue at: https://github.com/cosecruz/xrgen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type XrgenResult<T> = Result<T, XrgenError>;
