pub mod aggregate;

use crate::shared::metadata::{EntityMetadataInfo, EntityType, EntityUiMetadata};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_index: "a005_employee",
    collection_path: "/employees",
    ui: EntityUiMetadata {
        element_name: "Employee",
        list_name: "Employees",
        icon: "users",
    },
};
