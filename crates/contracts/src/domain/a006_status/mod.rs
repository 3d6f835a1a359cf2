pub mod aggregate;

use crate::shared::metadata::{EntityMetadataInfo, EntityType, EntityUiMetadata};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_index: "a006_status",
    collection_path: "/statuses",
    ui: EntityUiMetadata {
        element_name: "Status",
        list_name: "Statuses",
        icon: "tag",
    },
};
