//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strata
//! feature scaffolding tool, following hexagonal (ports and adapters)
//! architecture. A feature name and an application name go in; a layered
//! Flutter feature (11 directories, 13 Dart files) comes out.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strata-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, CatalogService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Driven: Filesystem)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      strata-adapters (Infrastructure)   │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (NameVariants, plan, catalog, scaffold) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use strata_core::prelude::*;
//!
//! fn generate(filesystem: Box<dyn Filesystem>) -> StrataResult<()> {
//!     let service = ScaffoldService::new(filesystem);
//!     let request = ScaffoldRequest::new("lib/features", "UserProfile", "MyApp");
//!     let report = service.scaffold(&request)?;
//!     println!("{} files under {}", report.files_written.len(), report.root.display());
//!     Ok(())
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, ScaffoldReport, ScaffoldService, TemplateInfo, ports::Filesystem,
    };
    pub use crate::domain::{
        FeatureScaffold, FileRole, Layer, NameVariants, RenderContext, ScaffoldRequest,
    };
    pub use crate::error::{StrataError, StrataResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
