pub mod aggregate;

use crate::shared::metadata::{EntityMetadataInfo, EntityType, EntityUiMetadata};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_index: "a008_asset",
    collection_path: "/assets",
    ui: EntityUiMetadata {
        element_name: "Asset",
        list_name: "Assets",
        icon: "package",
    },
};
