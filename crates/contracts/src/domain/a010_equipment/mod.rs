pub mod aggregate;

use crate::shared::metadata::{EntityMetadataInfo, EntityType, EntityUiMetadata};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_index: "a010_equipment",
    collection_path: "/equipment",
    ui: EntityUiMetadata {
        element_name: "Equipment",
        list_name: "Equipment",
        icon: "monitor",
    },
};
