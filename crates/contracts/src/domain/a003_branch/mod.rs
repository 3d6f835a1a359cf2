pub mod aggregate;

use crate::shared::metadata::{EntityMetadataInfo, EntityType, EntityUiMetadata};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_index: "a003_branch",
    collection_path: "/branches",
    ui: EntityUiMetadata {
        element_name: "Branch",
        list_name: "Branches",
        icon: "building",
    },
};
