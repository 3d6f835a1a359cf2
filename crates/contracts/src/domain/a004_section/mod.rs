pub mod aggregate;

use crate::shared::metadata::{EntityMetadataInfo, EntityType, EntityUiMetadata};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_index: "a004_section",
    collection_path: "/sections",
    ui: EntityUiMetadata {
        element_name: "Section",
        list_name: "Sections",
        icon: "grid",
    },
};
