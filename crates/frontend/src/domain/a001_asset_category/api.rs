use async_trait::async_trait;
use contracts::domain::a001_asset_category::aggregate::{AssetCategory, AssetCategoryPayload};
use contracts::domain::a001_asset_category::ENTITY_METADATA;
use contracts::domain::a002_asset_subcategory::aggregate::AssetSubcategory;

use crate::shared::api_utils::{self, ApiError};
use crate::shared::crud::CrudService;

const PATH: &str = ENTITY_METADATA.collection_path;

#[derive(Debug, Clone, Copy, Default)]
pub struct AssetCategoryApi;

#[async_trait(?Send)]
impl CrudService for AssetCategoryApi {
    type Item = AssetCategory;
    type Payload = AssetCategoryPayload;

    async fn list(&self) -> Result<Vec<AssetCategory>, ApiError> {
        fetch_categories().await
    }

    async fn create(&self, payload: &AssetCategoryPayload) -> Result<(), ApiError> {
        api_utils::post(PATH, payload).await
    }

    async fn update(&self, id: i64, payload: &AssetCategoryPayload) -> Result<(), ApiError> {
        api_utils::put(&format!("{}/{}", PATH, id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        api_utils::delete(&format!("{}/{}", PATH, id)).await
    }
}

/// Все категории (для выпадающих списков)
pub async fn fetch_categories() -> Result<Vec<AssetCategory>, ApiError> {
    api_utils::get_list(PATH).await
}

/// Subcategories of one category, used by the cascading select
pub async fn fetch_subcategories_of(category_id: &str) -> Result<Vec<AssetSubcategory>, ApiError> {
    api_utils::get_list(&format!("{}/{}/subcategories", PATH, category_id.trim())).await
}
