//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not naming or
//! catalog rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while committing a scaffold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A planned directory could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreationFailed { path: PathBuf, reason: String },

    /// A rendered file could not be written.
    #[error("Failed to write {path}: {reason}")]
    FileWriteFailed { path: PathBuf, reason: String },

    /// Any other filesystem operation failed (read, remove).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },

    /// Adapter state lock poisoned.
    #[error("Filesystem adapter lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreationFailed { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions on the base path".into(),
                "Check available disk space".into(),
            ],
            Self::FileWriteFailed { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check that the file is not read-only or locked by another program".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Partial output may remain under {}", path.display()),
                "Remove it manually before retrying".into(),
            ],
            Self::StoreLockError => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryCreationFailed { .. }
            | Self::FileWriteFailed { .. }
            | Self::FilesystemError { .. }
            | Self::RollbackFailed { .. } => ErrorCategory::Filesystem,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_failures_do_not_promise_a_clean_tree() {
        // Rollback is best effort; a failed step is logged, not returned.
        let errors = [
            ApplicationError::DirectoryCreationFailed {
                path: PathBuf::from("/out/user_profile"),
                reason: "permission denied".into(),
            },
            ApplicationError::FileWriteFailed {
                path: PathBuf::from("/out/user_profile/data/x.dart"),
                reason: "read-only".into(),
            },
        ];
        for err in errors {
            let hints = err.suggestions();
            assert!(hints[0].contains("/out/user_profile"));
            assert!(!hints.iter().any(|h| h.contains("left behind")), "{hints:?}");
        }
    }

    #[test]
    fn rollback_failure_points_at_leftovers() {
        let err = ApplicationError::RollbackFailed {
            path: PathBuf::from("/out/user_profile"),
            reason: "busy".into(),
        };
        assert!(err.suggestions().iter().any(|h| h.contains("manually")));
        assert_eq!(err.category(), ErrorCategory::Filesystem);
    }
}
