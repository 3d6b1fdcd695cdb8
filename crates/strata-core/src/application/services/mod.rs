//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a feature" or "list the catalog".

pub mod catalog_service;
pub mod scaffold_service;

pub use catalog_service::{CatalogService, DirectoryInfo, TemplateInfo};
pub use scaffold_service::{ScaffoldReport, ScaffoldService};
