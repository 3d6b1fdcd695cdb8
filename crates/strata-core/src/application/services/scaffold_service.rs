//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the request and derive name variants
//! 2. Stage the directory plan and rendered catalog in memory
//! 3. Validate the staged tree
//! 4. Commit to the filesystem, rolling back this run's changes on failure

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainValidator as validator, FeatureScaffold, FsEntry, ScaffoldRequest},
    error::{StrataError, StrataResult},
};

/// What a successful commit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// `<base_path>/<snake_case>`
    pub root: PathBuf,
    /// Directories that did not exist before this run.
    pub directories_created: Vec<PathBuf>,
    /// Every file written, in catalog order.
    pub files_written: Vec<PathBuf>,
    /// Files that already existed and were replaced.
    pub files_overwritten: Vec<PathBuf>,
}

impl ScaffoldReport {
    fn new(root: PathBuf) -> Self {
        Self {
            root,
            directories_created: Vec::new(),
            files_written: Vec::new(),
            files_overwritten: Vec::new(),
        }
    }
}

/// Changes made by one commit, in the order they happened.
#[derive(Debug, Default)]
struct Journal {
    created_dirs: Vec<PathBuf>,
    seen_dirs: HashSet<PathBuf>,
    files: Vec<FileChange>,
}

#[derive(Debug)]
enum FileChange {
    Created(PathBuf),
    Overwritten { path: PathBuf, previous: Vec<u8> },
}

impl Journal {
    fn record_dir(&mut self, path: PathBuf) {
        if self.seen_dirs.insert(path.clone()) {
            self.created_dirs.push(path);
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use strata_core::application::{ScaffoldService, ports::Filesystem};
    /// use strata_core::domain::ScaffoldRequest;
    ///
    /// fn run(filesystem: Box<dyn Filesystem>) {
    ///     let service = ScaffoldService::new(filesystem);
    ///     let request = ScaffoldRequest::new("lib/features", "UserProfile", "MyApp");
    ///     let report = service.scaffold(&request).unwrap();
    ///     assert_eq!(report.files_written.len(), 13);
    /// }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Stage and validate a feature without touching the filesystem.
    ///
    /// Backs `--dry-run`; `scaffold` commits exactly what this returns.
    #[instrument(
        skip_all,
        fields(
            feature = %request.feature_name(),
            app = %request.app_name(),
            base_path = %request.base_path().display()
        )
    )]
    pub fn plan(&self, request: &ScaffoldRequest) -> StrataResult<FeatureScaffold> {
        let names = validator::validate_request(request)?;
        debug!(names = %names, "Names derived");

        let scaffold = FeatureScaffold::stage(request.feature_root(&names), names)?;
        validator::validate_scaffold(&scaffold)?;

        info!(
            root = %scaffold.root().display(),
            directories = scaffold.directories().count(),
            files = scaffold.files().count(),
            "Scaffold staged"
        );
        Ok(scaffold)
    }

    /// Generate a feature under the request's base path.
    ///
    /// Existing files are overwritten. If any directory or file operation
    /// fails, everything this call changed is undone before the error is
    /// returned.
    #[instrument(
        skip_all,
        fields(
            feature = %request.feature_name(),
            app = %request.app_name()
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> StrataResult<ScaffoldReport> {
        let scaffold = self.plan(request)?;

        let mut journal = Journal::default();
        let mut report = ScaffoldReport::new(scaffold.root().to_path_buf());

        match self.commit(&scaffold, &mut journal, &mut report) {
            Ok(()) => {
                info!(
                    directories_created = report.directories_created.len(),
                    files_written = report.files_written.len(),
                    files_overwritten = report.files_overwritten.len(),
                    "Scaffold completed successfully"
                );
                Ok(report)
            }
            Err(e) => {
                warn!(error = %e, "Commit failed, attempting rollback");
                self.rollback(journal);
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn commit(
        &self,
        scaffold: &FeatureScaffold,
        journal: &mut Journal,
        report: &mut ScaffoldReport,
    ) -> StrataResult<()> {
        self.ensure_dir(scaffold.root(), journal)?;

        for entry in scaffold.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = scaffold.absolute(&dir.path);
                    debug!(path = %path.display(), layer = %dir.layer, "Creating directory");
                    self.ensure_dir(&path, journal)?;
                }
                FsEntry::File(file) => {
                    let path = scaffold.absolute(&file.path);
                    debug!(path = %path.display(), role = %file.role, bytes = file.size(), "Writing file");

                    let previous = self.filesystem.read_file(&path);
                    if let Err(e) = &previous {
                        warn!(
                            path = %path.display(),
                            error = %e,
                            "Existing file unreadable, it will not be restored on rollback"
                        );
                    }

                    self.filesystem
                        .write_file(&path, file.content.as_bytes())
                        .map_err(|e| ApplicationError::FileWriteFailed {
                            path: path.clone(),
                            reason: reason_of(e),
                        })?;

                    match previous {
                        Ok(None) => journal.files.push(FileChange::Created(path.clone())),
                        Ok(Some(previous)) => {
                            report.files_overwritten.push(path.clone());
                            journal.files.push(FileChange::Overwritten {
                                path: path.clone(),
                                previous,
                            });
                        }
                        Err(_) => report.files_overwritten.push(path.clone()),
                    }
                    report.files_written.push(path);
                }
            }
        }

        report.directories_created = journal.created_dirs.clone();
        Ok(())
    }

    /// Create `path` recursively, journaling every ancestor that was missing.
    ///
    /// On failure, the ancestors that did get created are journaled too.
    fn ensure_dir(&self, path: &Path, journal: &mut Journal) -> StrataResult<()> {
        let mut missing: Vec<PathBuf> = path
            .ancestors()
            .take_while(|p| !p.as_os_str().is_empty() && !self.filesystem.exists(p))
            .map(Path::to_path_buf)
            .collect();
        missing.reverse();

        if let Err(e) = self.filesystem.create_dir_all(path) {
            for dir in missing {
                if self.filesystem.exists(&dir) {
                    journal.record_dir(dir);
                }
            }
            return Err(ApplicationError::DirectoryCreationFailed {
                path: path.to_path_buf(),
                reason: reason_of(e),
            }
            .into());
        }

        for dir in missing {
            journal.record_dir(dir);
        }
        Ok(())
    }

    /// Best-effort undo of a failed commit.
    ///
    /// Files are handled newest first, then created directories deepest first.
    fn rollback(&self, journal: Journal) {
        let mut failures = 0usize;

        for change in journal.files.into_iter().rev() {
            let result = match &change {
                FileChange::Created(path) => self.filesystem.remove_file(path),
                FileChange::Overwritten { path, previous } => {
                    self.filesystem.write_file(path, previous)
                }
            };
            if let Err(e) = result {
                failures += 1;
                let path = match change {
                    FileChange::Created(path) | FileChange::Overwritten { path, .. } => path,
                };
                log_rollback_failure(path, e);
            }
        }

        for dir in journal.created_dirs.into_iter().rev() {
            if let Err(e) = self.filesystem.remove_dir_all(&dir) {
                failures += 1;
                log_rollback_failure(dir, e);
            }
        }

        if failures == 0 {
            info!("Rollback successful");
        } else {
            warn!(failures, "Rollback incomplete");
        }
    }
}

fn log_rollback_failure(path: PathBuf, err: StrataError) {
    let err = ApplicationError::RollbackFailed {
        path,
        reason: reason_of(err),
    };
    warn!(error = %err, "Rollback step failed");
}

/// The adapter's own message, without a second "at <path>" prefix.
fn reason_of(err: StrataError) -> String {
    match err {
        StrataError::Application(
            ApplicationError::FilesystemError { reason, .. }
            | ApplicationError::DirectoryCreationFailed { reason, .. }
            | ApplicationError::FileWriteFailed { reason, .. },
        ) => reason,
        other => other.to_string(),
    }
}
