pub mod aggregate;

use crate::shared::metadata::{EntityMetadataInfo, EntityType, EntityUiMetadata};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_index: "a001_asset_category",
    collection_path: "/asset-categories",
    ui: EntityUiMetadata {
        element_name: "Asset category",
        list_name: "Asset categories",
        icon: "layers",
    },
};
