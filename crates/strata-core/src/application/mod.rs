//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All naming and catalog rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{CatalogService, DirectoryInfo, ScaffoldReport, ScaffoldService, TemplateInfo};

pub use ports::Filesystem;

pub use error::ApplicationError;
