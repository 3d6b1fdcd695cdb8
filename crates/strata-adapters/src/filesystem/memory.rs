//! In-memory filesystem adapter for testing.
//!
//! Besides holding files and directories in maps, it can be told to fail
//! specific operations so commit and rollback paths can be exercised.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StrataError, StrataResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle while the service owns
/// a boxed copy.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
    failing_dirs: HashSet<PathBuf>,
    partial_dirs: HashSet<PathBuf>,
    fail_removals: bool,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create a filesystem where `path` and its ancestors already exist.
    pub fn with_dir(path: impl AsRef<Path>) -> Self {
        let fs = Self::new();
        if let Ok(mut inner) = fs.inner.write() {
            inner.insert_dir_chain(path.as_ref());
        }
        fs
    }

    /// Make every write to `path` fail.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_writes.insert(path.into());
        }
    }

    /// Make `create_dir_all` fail for `path`.
    pub fn fail_dir_creation_at(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing_dirs.insert(path.into());
        }
    }

    /// Make `create_dir_all` for `path` create its ancestors, then fail.
    ///
    /// Mirrors a real `mkdir -p` that dies part way down the chain.
    pub fn fail_dir_creation_after_parents_at(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.partial_dirs.insert(path.into());
        }
    }

    /// Make every removal fail (rollback failure).
    pub fn fail_removals(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.fail_removals = true;
        }
    }

    /// A file's content as text, lossily decoded (testing helper).
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_dirs(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Snapshot of every file and its raw content.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        self.inner
            .read()
            .map(|inner| inner.files.clone())
            .unwrap_or_default()
    }

    /// Clear all contents and injected faults.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            *inner = MemoryFilesystemInner::default();
        }
    }

    fn read(&self) -> StrataResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> StrataResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl MemoryFilesystemInner {
    fn insert_dir_chain(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn injected(path: &Path, reason: &str) -> StrataError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self.write()?;

        if inner.failing_dirs.contains(path) {
            return Err(injected(path, "injected directory failure"));
        }
        if inner.partial_dirs.contains(path) {
            if let Some(parent) = path.parent() {
                inner.insert_dir_chain(parent);
            }
            return Err(injected(path, "injected directory failure"));
        }
        if inner.files.contains_key(path) {
            return Err(injected(path, "a file exists at this path"));
        }

        inner.insert_dir_chain(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> StrataResult<()> {
        let mut inner = self.write()?;

        if inner.failing_writes.contains(path) {
            return Err(injected(path, "injected write failure"));
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(injected(path, "Parent directory does not exist"));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> StrataResult<Option<Vec<u8>>> {
        let inner = self.read()?;
        if inner.directories.contains(path) {
            return Err(injected(path, "is a directory"));
        }
        Ok(inner.files.get(path).cloned())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_file(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self.write()?;
        if inner.fail_removals {
            return Err(injected(path, "injected removal failure"));
        }
        inner
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| injected(path, "No such file"))
    }

    fn remove_dir_all(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self.write()?;
        if inner.fail_removals {
            return Err(injected(path, "injected removal failure"));
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}
