use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    catalog::{self, FileRole},
    common::RelativePath,
    error::DomainError,
    naming::NameVariants,
    plan::{self, Layer},
};

/// A fully rendered feature, staged in memory and ready for commit.
///
/// Contains no I/O. Directories come first in plan order, then files in
/// catalog order, so committing entries front to back always creates a
/// directory before anything is written into it.
#[derive(Debug, Clone)]
pub struct FeatureScaffold {
    pub(crate) root: PathBuf,
    names: NameVariants,
    pub(crate) entries: Vec<FsEntry>,
}

impl FeatureScaffold {
    pub fn new(root: impl Into<PathBuf>, names: NameVariants) -> Self {
        Self {
            root: root.into(),
            names,
            entries: Vec::new(),
        }
    }

    /// Stage the whole directory plan and every catalog template.
    pub fn stage(root: impl Into<PathBuf>, names: NameVariants) -> Result<Self, DomainError> {
        let mut scaffold = Self::new(root, names);

        for dir in plan::directories() {
            scaffold.add_directory(dir.relative_path(), dir.layer);
        }

        for spec in catalog::templates() {
            let path = spec.relative_path(&scaffold.names)?;
            let content = spec.render_strict(&scaffold.names)?;
            scaffold.add_file(path, spec.role, content);
        }

        Ok(scaffold)
    }

    pub fn add_directory(&mut self, path: RelativePath, layer: Layer) {
        self.entries
            .push(FsEntry::Directory(DirectoryToCreate { path, layer }));
    }

    pub fn add_file(&mut self, path: RelativePath, role: FileRole, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path,
            role,
            content,
        }));
    }

    #[cfg(test)]
    pub fn with_directory(mut self, path: impl Into<RelativePath>, layer: Layer) -> Self {
        self.add_directory(path.into(), layer);
        self
    }

    #[cfg(test)]
    pub fn with_file(
        mut self,
        path: impl Into<RelativePath>,
        role: FileRole,
        content: impl Into<String>,
    ) -> Self {
        self.add_file(path.into(), role, content.into());
        self
    }

    /// Check the staged tree before anything touches the filesystem.
    ///
    /// 1. Not empty
    /// 2. No path staged twice
    /// 3. Every file sits directly in a staged, planned directory
    /// 4. Every feature-local import names a staged file
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyScaffold {
                feature: self.names.snake_case().to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path().to_string();
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path });
            }
        }

        let staged_dirs: HashSet<String> =
            self.directories().map(|d| d.path.to_string()).collect();
        for file in self.files() {
            let parent = file
                .path
                .as_path()
                .parent()
                .map(|p| RelativePath::new(p).to_string())
                .unwrap_or_default();
            if !plan::is_planned(&parent) || !staged_dirs.contains(&parent) {
                return Err(DomainError::UnplannedDirectory {
                    path: file.path.to_string(),
                });
            }
        }

        let prefix = catalog::feature_import_prefix(&self.names);
        let targets: HashSet<String> = self
            .files()
            .map(|f| format!("{prefix}{}", f.path))
            .collect();
        for file in self.files() {
            for import in catalog::feature_imports(&file.content, &self.names) {
                if !targets.contains(import) {
                    return Err(DomainError::DanglingImport {
                        path: file.path.to_string(),
                        import: import.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn names(&self) -> &NameVariants {
        &self.names
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn file(&self, role: FileRole) -> Option<&FileToWrite> {
        self.files().find(|f| f.role == role)
    }

    /// Absolute (root-joined) location of a staged entry.
    pub fn absolute(&self, path: &RelativePath) -> PathBuf {
        self.root.join(path.as_path())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub role: FileRole,
    pub content: String,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
    pub layer: Layer,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> NameVariants {
        NameVariants::derive("UserProfile", "MyApp").unwrap()
    }

    #[test]
    fn stage_builds_plan_and_catalog() {
        let scaffold = FeatureScaffold::stage("/out/user_profile", names()).unwrap();
        assert_eq!(scaffold.directories().count(), 11);
        assert_eq!(scaffold.files().count(), 13);
        assert_eq!(scaffold.entry_count(), 24);
        scaffold.validate().unwrap();
    }

    #[test]
    fn directories_precede_files() {
        let scaffold = FeatureScaffold::stage("/out/x", names()).unwrap();
        let first_file = scaffold
            .entries()
            .iter()
            .position(|e| matches!(e, FsEntry::File(_)))
            .unwrap();
        assert!(
            scaffold.entries()[first_file..]
                .iter()
                .all(|e| matches!(e, FsEntry::File(_)))
        );
    }

    #[test]
    fn empty_scaffold_is_invalid() {
        let scaffold = FeatureScaffold::new("/out/x", names());
        assert!(matches!(
            scaffold.validate(),
            Err(DomainError::EmptyScaffold { .. })
        ));
    }

    #[test]
    fn duplicate_paths_are_invalid() {
        let scaffold = FeatureScaffold::new("/out/x", names())
            .with_directory("domain/entities", Layer::Domain)
            .with_directory("domain/entities", Layer::Domain);
        assert!(matches!(
            scaffold.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn file_outside_plan_is_invalid() {
        let scaffold = FeatureScaffold::new("/out/x", names())
            .with_directory("domain/entities", Layer::Domain)
            .with_file("domain/stray.dart", FileRole::Model, "");
        assert!(matches!(
            scaffold.validate(),
            Err(DomainError::UnplannedDirectory { .. })
        ));
    }

    #[test]
    fn dangling_import_is_invalid() {
        let content = "import 'package:myapp/features/user_profile/domain/entities/nope.dart';\n";
        let scaffold = FeatureScaffold::new("/out/x", names())
            .with_directory("domain/usecases", Layer::Domain)
            .with_file("domain/usecases/user_profile_usecase.dart", FileRole::UseCase, content);
        assert!(matches!(
            scaffold.validate(),
            Err(DomainError::DanglingImport { .. })
        ));
    }

    #[test]
    fn absolute_joins_root() {
        let scaffold = FeatureScaffold::stage("/out/user_profile", names()).unwrap();
        let file = scaffold.file(FileRole::Api).unwrap();
        assert_eq!(
            scaffold.absolute(&file.path),
            PathBuf::from("/out/user_profile/data/network/user_profile_api.dart")
        );
    }
}
