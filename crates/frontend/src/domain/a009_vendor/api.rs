use contracts::domain::a009_vendor::aggregate::Vendor;
use contracts::domain::a009_vendor::ENTITY_METADATA;

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_vendors() -> Result<Vec<Vendor>, ApiError> {
    api_utils::get_list(ENTITY_METADATA.collection_path).await
}
