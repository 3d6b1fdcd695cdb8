//! Unified error handling for Strata Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Strata Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrataError {
    /// Errors from the domain layer (input and catalog rules).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem commit).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StrataError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Strata".into(),
                "Please report this issue at: https://github.com/cosecruz/strata/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` for blank or malformed names rejected before any mutation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidInput { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type StrataResult<T> = Result<T, StrataError>;
