pub mod aggregate;

use crate::shared::metadata::{EntityMetadataInfo, EntityType, EntityUiMetadata};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_index: "a002_asset_subcategory",
    collection_path: "/asset-subcategories",
    ui: EntityUiMetadata {
        element_name: "Subcategory",
        list_name: "Subcategories",
        icon: "list",
    },
};
