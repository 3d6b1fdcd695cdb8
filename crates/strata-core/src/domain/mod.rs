//! Core domain layer for Strata.
//!
//! Pure logic only: naming rules, the directory plan, the template catalog
//! and the staged scaffold. All I/O is reached through ports defined in the
//! application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem or external calls
//! - **Immutable values**: names, plan and catalog never change after creation

pub mod catalog;
pub mod common;
pub mod error;
pub mod naming;
pub mod plan;
pub mod render;
pub mod request;
pub mod scaffold;

mod validation;

pub use catalog::{FileRole, TemplateSpec};
pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use naming::NameVariants;
pub use plan::{Layer, PlannedDirectory};
pub use render::RenderContext;
pub use request::ScaffoldRequest;
pub use scaffold::{DirectoryToCreate, FeatureScaffold, FileToWrite, FsEntry};
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module properties
    // ========================================================================

    fn stage(feature: &str, app: &str) -> FeatureScaffold {
        let request = ScaffoldRequest::new("/out", feature, app);
        let names = DomainValidator::validate_request(&request).unwrap();
        FeatureScaffold::stage(request.feature_root(&names), names).unwrap()
    }

    #[test]
    fn pascal_case_is_the_only_class_stem() {
        let scaffold = stage("orderHistory", "Shop");
        for file in scaffold.files() {
            for line in file.content.lines() {
                let line = line.trim_start();
                let Some(rest) = line
                    .strip_prefix("class ")
                    .or_else(|| line.strip_prefix("final class "))
                    .or_else(|| line.strip_prefix("sealed class "))
                    .or_else(|| line.strip_prefix("abstract class "))
                else {
                    continue;
                };
                let rest = rest.trim_start_matches('_');
                let rest = rest
                    .strip_prefix("Load")
                    .or_else(|| rest.strip_prefix("Refresh"))
                    .unwrap_or(rest);
                assert!(
                    rest.starts_with("OrderHistory"),
                    "{} declares `{line}`",
                    file.path
                );
            }
        }
    }

    #[test]
    fn snake_case_is_the_only_path_stem() {
        let scaffold = stage("orderHistory", "Shop");
        for file in scaffold.files() {
            let name = file.path.as_path().file_name().unwrap().to_string_lossy();
            assert!(name.starts_with("order_history_"), "{name}");
            for line in file.content.lines().filter(|l| l.starts_with("import 'package:shop/features/")) {
                assert!(line.contains("/features/order_history/"), "{line}");
            }
        }
    }

    #[test]
    fn staging_is_deterministic() {
        let a = stage("UserProfile", "MyApp");
        let b = stage("UserProfile", "MyApp");
        let a: Vec<_> = a.files().map(|f| (f.path.clone(), f.content.clone())).collect();
        let b: Vec<_> = b.files().map(|f| (f.path.clone(), f.content.clone())).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn staged_scaffold_validates_for_varied_names() {
        for (feature, app) in [
            ("UserProfile", "MyApp"),
            ("settings", "shop"),
            ("myABCFeature", "Acme"),
            ("order history", "store"),
        ] {
            let scaffold = stage(feature, app);
            DomainValidator::validate_scaffold(&scaffold).unwrap();
        }
    }
}
