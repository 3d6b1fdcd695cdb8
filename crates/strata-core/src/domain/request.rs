use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, naming::NameVariants};

/// Input of one scaffold invocation, as collected by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    base_path: PathBuf,
    feature_name: String,
    app_name: String,
}

impl ScaffoldRequest {
    pub fn new(
        base_path: impl Into<PathBuf>,
        feature_name: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            feature_name: feature_name.into(),
            app_name: app_name.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Check both names and derive their variants.
    ///
    /// Rejects blank names, and feature names that would not produce a single
    /// directory under the base path.
    pub fn validate(&self) -> Result<NameVariants, DomainError> {
        let names = NameVariants::derive(&self.feature_name, &self.app_name)?;

        let stem = names.snake_case();
        if stem.contains(['/', '\\', '\'']) || stem == "." || stem == ".." {
            return Err(DomainError::InvalidInput {
                field: "feature name",
                reason: format!("'{stem}' is not a valid directory name"),
            });
        }
        if names.app_name_lower().contains(['/', '\\', '\'']) {
            return Err(DomainError::InvalidInput {
                field: "application name",
                reason: "must be a Dart package name".into(),
            });
        }

        Ok(names)
    }

    /// `<base_path>/<snake_case>`
    pub fn feature_root(&self, names: &NameVariants) -> PathBuf {
        self.base_path.join(names.snake_case())
    }
}
