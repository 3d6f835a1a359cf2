//! Asset components: the parts (RAM sticks, drives, monitors, ...) attached to an asset
//!
//! - `aggregate` — wire types, transfer request
//! - `specifications` — free-form key→scalar bag and its submit normalization
//! - `naming` — derived `component_name`
//! - `form` — add/edit form state, reconciliation and validation

pub mod aggregate;
pub mod form;
pub mod naming;
pub mod specifications;

use crate::shared::metadata::{EntityMetadataInfo, EntityType, EntityUiMetadata};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_index: "a007_asset_component",
    collection_path: "/asset-components",
    ui: EntityUiMetadata {
        element_name: "Component",
        list_name: "Asset components",
        icon: "cpu",
    },
};
