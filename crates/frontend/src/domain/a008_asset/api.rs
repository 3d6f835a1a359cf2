use contracts::domain::a008_asset::aggregate::Asset;
use contracts::domain::a008_asset::ENTITY_METADATA;

use crate::shared::api_utils::{self, ApiError};

/// Header of the components page
pub async fn fetch_asset(id: i64) -> Result<Asset, ApiError> {
    api_utils::get_one(&format!("{}/{}", ENTITY_METADATA.collection_path, id)).await
}
