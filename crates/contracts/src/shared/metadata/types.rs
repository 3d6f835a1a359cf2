//! Core metadata types for aggregates and dashboards
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

/// Metadata for an entity (aggregate or dashboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    pub entity_type: EntityType,
    /// Registry key, e.g. "a001_asset_category"
    pub entity_index: &'static str,
    /// REST collection path without the api prefix, e.g. "/asset-categories"
    pub collection_path: &'static str,
    pub ui: EntityUiMetadata,
}

/// Type of entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Aggregate,
    Dashboard,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aggregate => "aggregate",
            Self::Dashboard => "dashboard",
        }
    }
}

/// UI metadata for entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    pub element_name: &'static str,
    pub list_name: &'static str,
    pub icon: &'static str,
}
