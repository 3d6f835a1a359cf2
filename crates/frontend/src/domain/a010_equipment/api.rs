use contracts::domain::a010_equipment::aggregate::Equipment;
use contracts::domain::a010_equipment::ENTITY_METADATA;

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_equipment() -> Result<Vec<Equipment>, ApiError> {
    api_utils::get_list(ENTITY_METADATA.collection_path).await
}
