//! Driven (output) ports - implemented by infrastructure.
//!
//! The `strata-adapters` crate provides implementations.

use std::path::Path;

use crate::error::StrataResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths handed to the port are absolute: the service joins every staged
/// relative path onto the feature root before calling in.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &[u8]) -> StrataResult<()>;

    /// Current raw bytes of a file, `None` if it does not exist.
    ///
    /// Not decoded: a hand-edited file in any encoding must survive a
    /// rollback unchanged.
    fn read_file(&self, path: &Path) -> StrataResult<Option<Vec<u8>>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> StrataResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> StrataResult<()>;
}
