//! Catalog Service - read-only queries over the template catalog.
//!
//! Separated from ScaffoldService for single responsibility. Backs
//! `strata list`.

use serde::Serialize;

use crate::domain::{Layer, catalog, plan};

/// Information about a catalog entry for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub role: String,
    pub layer: Layer,
    pub directory: String,
    pub file_pattern: String,
    pub description: String,
}

/// One directory of the plan, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryInfo {
    pub layer: Layer,
    pub path: String,
}

/// Service for catalog queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Every template, in generation order.
    pub fn list(&self) -> Vec<TemplateInfo> {
        catalog::templates()
            .iter()
            .map(|t| TemplateInfo {
                role: t.role.to_string(),
                layer: t.layer(),
                directory: t.directory.path.to_string(),
                file_pattern: t.file_name_pattern(),
                description: t.role.description().to_string(),
            })
            .collect()
    }

    /// Templates belonging to one layer.
    pub fn list_layer(&self, layer: Layer) -> Vec<TemplateInfo> {
        self.list().into_iter().filter(|t| t.layer == layer).collect()
    }

    /// The directory plan, in creation order.
    pub fn directories(&self) -> Vec<DirectoryInfo> {
        plan::directories()
            .iter()
            .map(|d| DirectoryInfo {
                layer: d.layer,
                path: d.path.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_whole_catalog_in_order() {
        let list = CatalogService::new().list();
        assert_eq!(list.len(), 13);
        assert_eq!(list[0].role, "data_store");
        assert_eq!(list[0].directory, "data/data_store");
        assert_eq!(list[0].file_pattern, "<feature>_data_store.dart");
        assert_eq!(list[12].role, "screen_content");
    }

    #[test]
    fn filters_by_layer() {
        let service = CatalogService::new();
        assert_eq!(service.list_layer(Layer::Data).len(), 5);
        assert_eq!(service.list_layer(Layer::Domain).len(), 3);
        assert_eq!(service.list_layer(Layer::Presentation).len(), 5);
    }

    #[test]
    fn directories_match_plan() {
        let dirs = CatalogService::new().directories();
        assert_eq!(dirs.len(), 11);
        assert_eq!(dirs[10].path, "presentation/widgets");
        assert_eq!(dirs[10].layer, Layer::Presentation);
    }
}
