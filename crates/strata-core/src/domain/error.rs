// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass through report layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    // ========================================================================
    // Staged Scaffold Errors
    // ========================================================================
    #[error("Scaffold for '{feature}' has no content")]
    EmptyScaffold { feature: String },

    #[error("Duplicate path in scaffold: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("File '{path}' is outside every planned directory")]
    UnplannedDirectory { path: String },

    #[error("Unresolved placeholder '{placeholder}' in {path}")]
    UnresolvedPlaceholder { path: String, placeholder: String },

    #[error("Import '{import}' in {path} does not resolve to a generated file")]
    DanglingImport { path: String, import: String },

    #[error("Unknown layer: {0}")]
    UnknownLayer(String),
}

impl DomainError {
    /// Shorthand for a blank-input rejection.
    pub fn blank(field: &'static str) -> Self {
        Self::InvalidInput {
            field,
            reason: "must not be blank".into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { field, .. } => vec![
                format!("Provide a non-blank {field}"),
                "Example: strata new UserProfile --app my_app".into(),
            ],
            Self::UnknownLayer(layer) => vec![
                format!("'{layer}' is not a layer"),
                "Known layers: data, domain, presentation".into(),
            ],
            Self::UnresolvedPlaceholder { .. }
            | Self::DanglingImport { .. }
            | Self::UnplannedDirectory { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::EmptyScaffold { .. } => vec![
                "The built-in template catalog is inconsistent".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::UnknownLayer(_) => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_validation() {
        let err = DomainError::blank("feature name");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "Invalid feature name: must not be blank");
    }

    #[test]
    fn catalog_errors_are_internal() {
        let err = DomainError::DanglingImport {
            path: "a.dart".into(),
            import: "package:x/y.dart".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.suggestions().iter().any(|s| s.contains("report")));
    }
}
