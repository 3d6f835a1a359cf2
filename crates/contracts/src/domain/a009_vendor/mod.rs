pub mod aggregate;

use crate::shared::metadata::{EntityMetadataInfo, EntityType, EntityUiMetadata};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_index: "a009_vendor",
    collection_path: "/vendors",
    ui: EntityUiMetadata {
        element_name: "Vendor",
        list_name: "Vendors",
        icon: "truck",
    },
};
