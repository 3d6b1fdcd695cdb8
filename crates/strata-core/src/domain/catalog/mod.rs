//! The template catalog: one record per generated file.
//!
//! Each [`TemplateSpec`] pairs a planned directory and a file role with a
//! static body. Everything that depends on the feature (file name, import URI,
//! rendered content) is computed from the same [`NameVariants`], which is what
//! keeps the thirteen files pointing at each other correctly.
//!
//! ```text
//! TemplateSpec { role: Api, directory: data/network, body }
//!     file_name(names)   -> user_profile_api.dart
//!     relative_path      -> data/network/user_profile_api.dart
//!     import_uri         -> package:myapp/features/user_profile/data/network/user_profile_api.dart
//!     render(names)      -> "import 'package:dio/dio.dart'; class UserProfileApi { ... }"
//! ```

mod data;
mod domain;
mod presentation;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    common::RelativePath,
    error::DomainError,
    naming::NameVariants,
    plan::{self, Layer, PlannedDirectory},
    render::RenderContext,
};

/// Extension of every generated file.
pub const EXTENSION: &str = "dart";

/// Root under which generated features are imported from.
const FEATURES_DIR: &str = "features";

// ── FileRole ──────────────────────────────────────────────────────────────────

/// What a generated file is for. Also determines its file-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileRole {
    DataStore,
    Request,
    Response,
    Api,
    RepositoryImpl,
    Model,
    Repository,
    UseCase,
    Event,
    UiState,
    ViewModel,
    Screen,
    ScreenContent,
}

impl FileRole {
    /// Suffix appended to the snake-case feature name.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::DataStore => "data_store",
            Self::Request => "request",
            Self::Response => "response",
            Self::Api => "api",
            Self::RepositoryImpl => "repository_impl",
            Self::Model => "model",
            Self::Repository => "repository",
            Self::UseCase => "usecase",
            Self::Event => "event",
            Self::UiState => "ui_state",
            Self::ViewModel => "view_model",
            Self::Screen => "screen",
            Self::ScreenContent => "screen_content",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::DataStore => "Key-value persistence wrapper",
            Self::Request => "Request transfer object",
            Self::Response => "Response transfer object with domain conversion",
            Self::Api => "Network client",
            Self::RepositoryImpl => "Repository implementation",
            Self::Model => "Domain model",
            Self::Repository => "Domain repository contract",
            Self::UseCase => "Use case",
            Self::Event => "UI events (sealed)",
            Self::UiState => "UI states (sealed)",
            Self::ViewModel => "View-model",
            Self::Screen => "Screen widget",
            Self::ScreenContent => "Screen content builder",
        }
    }

    /// The symbol the generated file declares, as a template.
    const fn symbol_template(&self) -> &'static str {
        match self {
            Self::DataStore => "{{FEATURE_PASCAL}}DataStore",
            Self::Request => "{{FEATURE_PASCAL}}Request",
            Self::Response => "{{FEATURE_PASCAL}}Response",
            Self::Api => "{{FEATURE_PASCAL}}Api",
            Self::RepositoryImpl => "{{FEATURE_PASCAL}}RepositoryImpl",
            Self::Model => "{{FEATURE_PASCAL}}Model",
            Self::Repository => "{{FEATURE_PASCAL}}Repository",
            Self::UseCase => "{{FEATURE_PASCAL}}UseCase",
            Self::Event => "{{FEATURE_PASCAL}}Event",
            Self::UiState => "{{FEATURE_PASCAL}}UiState",
            Self::ViewModel => "{{FEATURE_PASCAL}}ViewModel",
            Self::Screen => "{{FEATURE_PASCAL}}Screen",
            Self::ScreenContent => "{{FEATURE_SNAKE}}ScreenContent",
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

// ── TemplateSpec ──────────────────────────────────────────────────────────────

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSpec {
    pub role: FileRole,
    pub directory: PlannedDirectory,
    body: &'static str,
}

impl TemplateSpec {
    const fn new(role: FileRole, directory: PlannedDirectory, body: &'static str) -> Self {
        Self {
            role,
            directory,
            body,
        }
    }

    pub fn layer(&self) -> Layer {
        self.directory.layer
    }

    /// Unrendered body, placeholders included.
    pub fn body(&self) -> &'static str {
        self.body
    }

    /// `<feature>_<suffix>.dart`
    pub fn file_name(&self, names: &NameVariants) -> String {
        format!("{}_{}.{EXTENSION}", names.snake_case(), self.role.suffix())
    }

    /// File-name pattern for listings, e.g. `<feature>_api.dart`.
    pub fn file_name_pattern(&self) -> String {
        format!("<feature>_{}.{EXTENSION}", self.role.suffix())
    }

    /// Path relative to the feature root.
    pub fn relative_path(&self, names: &NameVariants) -> Result<RelativePath, DomainError> {
        self.directory.relative_path().join(self.file_name(names))
    }

    /// `package:` URI other generated files import this one by.
    pub fn import_uri(&self, names: &NameVariants) -> String {
        format!(
            "{}{}/{}",
            feature_import_prefix(names),
            self.directory.path,
            self.file_name(names)
        )
    }

    /// Name of the primary class (or function) this file declares.
    pub fn declared_symbol(&self, names: &NameVariants) -> String {
        RenderContext::new(names).render(self.role.symbol_template())
    }

    /// Render the file content. Total: unknown placeholders stay literal.
    pub fn render(&self, names: &NameVariants) -> String {
        RenderContext::new(names).render(self.body)
    }

    /// Render, failing on any placeholder the context does not define.
    pub fn render_strict(&self, names: &NameVariants) -> Result<String, DomainError> {
        let path = self.file_name_pattern();
        RenderContext::new(names)
            .render_strict(self.body)
            .map_err(|placeholder| DomainError::UnresolvedPlaceholder { path, placeholder })
    }
}

static CATALOG: [TemplateSpec; 13] = [
    TemplateSpec::new(FileRole::DataStore, plan::DATA_STORE, data::DATA_STORE),
    TemplateSpec::new(FileRole::Request, plan::DATA_ENTITIES, data::REQUEST),
    TemplateSpec::new(FileRole::Response, plan::DATA_ENTITIES, data::RESPONSE),
    TemplateSpec::new(FileRole::Api, plan::DATA_NETWORK, data::API),
    TemplateSpec::new(
        FileRole::RepositoryImpl,
        plan::DATA_REPOSITORIES,
        data::REPOSITORY_IMPL,
    ),
    TemplateSpec::new(FileRole::Model, plan::DOMAIN_ENTITIES, domain::MODEL),
    TemplateSpec::new(
        FileRole::Repository,
        plan::DOMAIN_REPOSITORY,
        domain::REPOSITORY,
    ),
    TemplateSpec::new(FileRole::UseCase, plan::DOMAIN_USECASES, domain::USECASE),
    TemplateSpec::new(
        FileRole::Event,
        plan::PRESENTATION_EVENT,
        presentation::EVENT,
    ),
    TemplateSpec::new(
        FileRole::UiState,
        plan::PRESENTATION_STATE,
        presentation::UI_STATE,
    ),
    TemplateSpec::new(
        FileRole::ViewModel,
        plan::PRESENTATION_VIEWMODEL,
        presentation::VIEW_MODEL,
    ),
    TemplateSpec::new(
        FileRole::Screen,
        plan::PRESENTATION_WIDGETS,
        presentation::SCREEN,
    ),
    TemplateSpec::new(
        FileRole::ScreenContent,
        plan::PRESENTATION_WIDGETS,
        presentation::SCREEN_CONTENT,
    ),
];

/// All catalog entries, in emission order.
pub fn templates() -> &'static [TemplateSpec] {
    &CATALOG
}

pub fn find(role: FileRole) -> Option<&'static TemplateSpec> {
    CATALOG.iter().find(|t| t.role == role)
}

/// `package:<app>/features/<feature>/`
pub fn feature_import_prefix(names: &NameVariants) -> String {
    format!(
        "package:{}/{FEATURES_DIR}/{}/",
        names.app_name_lower(),
        names.snake_case()
    )
}

/// Every `package:` URI in `content` that points into the feature.
pub fn feature_imports<'a>(content: &'a str, names: &NameVariants) -> Vec<&'a str> {
    let prefix = feature_import_prefix(names);
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let rest = line.strip_prefix("import '")?;
            let uri = &rest[..rest.find('\'')?];
            uri.starts_with(&prefix).then_some(uri)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names() -> NameVariants {
        NameVariants::derive("UserProfile", "MyApp").unwrap()
    }

    #[test]
    fn catalog_has_thirteen_distinct_roles() {
        let roles: HashSet<_> = templates().iter().map(|t| t.role).collect();
        assert_eq!(templates().len(), 13);
        assert_eq!(roles.len(), 13);
    }

    #[test]
    fn every_template_lives_in_a_planned_directory() {
        for t in templates() {
            assert!(plan::is_planned(t.directory.path), "{}", t.role);
        }
    }

    #[test]
    fn every_body_renders_strictly() {
        let names = names();
        for t in templates() {
            let out = t.render_strict(&names).unwrap();
            assert!(!out.contains("{{"), "{} left a placeholder", t.role);
        }
    }

    #[test]
    fn data_store_path_and_symbol() {
        let names = names();
        let spec = find(FileRole::DataStore).unwrap();
        assert_eq!(
            spec.relative_path(&names).unwrap().to_string(),
            "data/data_store/user_profile_data_store.dart"
        );
        assert!(spec.render(&names).contains("class UserProfileDataStore"));
    }

    #[test]
    fn file_names_follow_role_suffixes() {
        let names = names();
        let got: Vec<_> = templates().iter().map(|t| t.file_name(&names)).collect();
        let want: Vec<_> = [
            "data_store",
            "request",
            "response",
            "api",
            "repository_impl",
            "model",
            "repository",
            "usecase",
            "event",
            "ui_state",
            "view_model",
            "screen",
            "screen_content",
        ]
        .iter()
        .map(|s| format!("user_profile_{s}.dart"))
        .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn every_file_declares_its_symbol() {
        let names = names();
        for t in templates() {
            let symbol = t.declared_symbol(&names);
            let content = t.render(&names);
            assert!(
                content.contains(&format!("class {symbol}"))
                    || content.contains(&format!("Widget {symbol}(")),
                "{} does not declare {symbol}",
                t.role
            );
        }
    }

    #[test]
    fn feature_imports_resolve_within_catalog() {
        for (feature, app) in [("UserProfile", "MyApp"), ("settings", "shop"), ("myABCFeature", "X")] {
            let names = NameVariants::derive(feature, app).unwrap();
            let known: HashSet<_> = templates().iter().map(|t| t.import_uri(&names)).collect();
            for t in templates() {
                for uri in feature_imports(&t.render(&names), &names) {
                    assert!(known.contains(uri), "{} imports unknown {uri}", t.role);
                }
            }
        }
    }

    #[test]
    fn repository_impl_imports_its_collaborators() {
        let names = names();
        let content = find(FileRole::RepositoryImpl).unwrap().render(&names);
        let imports = feature_imports(&content, &names);
        for role in [FileRole::Model, FileRole::Response, FileRole::Api, FileRole::Repository] {
            let uri = find(role).unwrap().import_uri(&names);
            assert!(imports.contains(&uri.as_str()), "missing {uri}");
        }
        assert!(content.contains("class UserProfileRepositoryImpl implements UserProfileRepository"));
    }

    #[test]
    fn api_gets_snake_case_path() {
        let content = find(FileRole::Api).unwrap().render(&names());
        assert!(content.contains("_dio.get('/user_profile')"));
    }

    #[test]
    fn states_and_events_are_sealed() {
        let names = names();
        let state = find(FileRole::UiState).unwrap().render(&names);
        assert!(state.contains("sealed class UserProfileUiState"));
        for variant in ["UserProfileLoading", "UserProfileSuccess", "UserProfileError"] {
            assert!(state.contains(&format!("final class {variant} extends UserProfileUiState")));
        }

        let event = find(FileRole::Event).unwrap().render(&names);
        assert!(event.contains("sealed class UserProfileEvent"));
        assert!(event.contains("final class LoadUserProfileData extends UserProfileEvent"));
        assert!(event.contains("final class RefreshUserProfileData extends UserProfileEvent"));
    }

    #[test]
    fn view_model_moves_loading_then_result() {
        let content = find(FileRole::ViewModel).unwrap().render(&names());
        let loading = content.find("_stateSubject.add(UserProfileLoading())").unwrap();
        let success = content.find("_stateSubject.add(UserProfileSuccess(result))").unwrap();
        let error = content.find("_stateSubject.add(UserProfileError(").unwrap();
        assert!(loading < success && success < error);
        assert!(content.contains("_stateSubject.close();"));
        assert!(content.contains("_navigationSubject.close();"));
        assert!(!content.contains("default:"), "switch over sealed events must be exhaustive");
    }

    #[test]
    fn dart_interpolation_sigils_survive() {
        let content = find(FileRole::Request).unwrap().render(&names());
        assert!(content.contains("_$UserProfileRequestFromJson(json)"));
        assert!(content.contains("part 'user_profile_request.g.dart';"));
    }

    #[test]
    fn hostile_feature_name_cannot_escape_root() {
        let names = NameVariants::derive("../evil", "app").unwrap();
        let spec = find(FileRole::Model).unwrap();
        assert!(matches!(
            spec.relative_path(&names),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }
}
