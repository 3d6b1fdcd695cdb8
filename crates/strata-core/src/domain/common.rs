use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// A filesystem path guaranteed to be **relative** to the feature root.
///
/// Staged scaffolds only ever contain relative paths; the feature root is
/// joined on at commit time. A path that escapes the root through `..` is
/// rejected the same way an absolute one is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the provided path is absolute or climbs out of the root.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(is_contained(&path), "RelativePath must stay relative: {path:?}");
        Self(path)
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if is_contained(&path) {
            Ok(Self(path))
        } else {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        }
    }

    /// Join a segment, maintaining the relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        Self::try_new(self.0.join(segment))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Forward-slash rendering, independent of the host platform.
    pub fn to_slash_string(&self) -> String {
        self.0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn is_contained(path: &Path) -> bool {
    !path.is_absolute()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_slash_string())
    }
}
