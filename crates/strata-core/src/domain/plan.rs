//! The fixed directory plan every feature is laid out in.
//!
//! Eleven directories across three layers. The table is static: it does not
//! depend on the feature name, only the feature root it is joined onto does.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{common::RelativePath, error::DomainError};

// ── Layer ─────────────────────────────────────────────────────────────────────

/// One of the three architectural layers of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Data,
    Domain,
    Presentation,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Data, Layer::Domain, Layer::Presentation];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Domain => "domain",
            Self::Presentation => "presentation",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "data" => Ok(Self::Data),
            "domain" => Ok(Self::Domain),
            "presentation" | "ui" => Ok(Self::Presentation),
            other => Err(DomainError::UnknownLayer(other.to_string())),
        }
    }
}

// ── PlannedDirectory ──────────────────────────────────────────────────────────

/// One entry of the directory plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlannedDirectory {
    pub layer: Layer,
    /// Path relative to the feature root, always `layer/leaf`.
    pub path: &'static str,
}

impl PlannedDirectory {
    const fn new(layer: Layer, path: &'static str) -> Self {
        Self { layer, path }
    }

    pub fn relative_path(&self) -> RelativePath {
        RelativePath::new(self.path)
    }
}

impl fmt::Display for PlannedDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

// Named entries, referenced by the template catalog.
pub const DATA_STORE: PlannedDirectory = PlannedDirectory::new(Layer::Data, "data/data_store");
pub const DATA_ENTITIES: PlannedDirectory = PlannedDirectory::new(Layer::Data, "data/entities");
pub const DATA_NETWORK: PlannedDirectory = PlannedDirectory::new(Layer::Data, "data/network");
pub const DATA_REPOSITORIES: PlannedDirectory =
    PlannedDirectory::new(Layer::Data, "data/repositories");
pub const DOMAIN_ENTITIES: PlannedDirectory =
    PlannedDirectory::new(Layer::Domain, "domain/entities");
pub const DOMAIN_REPOSITORY: PlannedDirectory =
    PlannedDirectory::new(Layer::Domain, "domain/repository");
pub const DOMAIN_USECASES: PlannedDirectory =
    PlannedDirectory::new(Layer::Domain, "domain/usecases");
pub const PRESENTATION_EVENT: PlannedDirectory =
    PlannedDirectory::new(Layer::Presentation, "presentation/event");
pub const PRESENTATION_STATE: PlannedDirectory =
    PlannedDirectory::new(Layer::Presentation, "presentation/state");
pub const PRESENTATION_VIEWMODEL: PlannedDirectory =
    PlannedDirectory::new(Layer::Presentation, "presentation/viewmodel");
pub const PRESENTATION_WIDGETS: PlannedDirectory =
    PlannedDirectory::new(Layer::Presentation, "presentation/widgets");

static DIRECTORY_PLAN: [PlannedDirectory; 11] = [
    DATA_STORE,
    DATA_ENTITIES,
    DATA_NETWORK,
    DATA_REPOSITORIES,
    DOMAIN_ENTITIES,
    DOMAIN_REPOSITORY,
    DOMAIN_USECASES,
    PRESENTATION_EVENT,
    PRESENTATION_STATE,
    PRESENTATION_VIEWMODEL,
    PRESENTATION_WIDGETS,
];

/// All planned directories, in creation order.
pub fn directories() -> &'static [PlannedDirectory] {
    &DIRECTORY_PLAN
}

/// Planned directories belonging to one layer.
pub fn directories_in(layer: Layer) -> impl Iterator<Item = &'static PlannedDirectory> {
    DIRECTORY_PLAN.iter().filter(move |d| d.layer == layer)
}

/// Whether `path` (relative, forward-slash) is one of the planned directories.
pub fn is_planned(path: &str) -> bool {
    DIRECTORY_PLAN.iter().any(|d| d.path == path)
}
