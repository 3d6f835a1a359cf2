use async_trait::async_trait;
use contracts::domain::a002_asset_subcategory::aggregate::{AssetSubcategory, AssetSubcategoryPayload};
use contracts::domain::a002_asset_subcategory::ENTITY_METADATA;
use leptos::prelude::*;

use crate::shared::api_utils::{self, ApiError};
use crate::shared::crud::CrudService;

const PATH: &str = ENTITY_METADATA.collection_path;

/// Subcategories, optionally narrowed to the category selected in the list filter
#[derive(Clone, Copy)]
pub struct AssetSubcategoryApi {
    pub category_filter: RwSignal<String>,
}

impl AssetSubcategoryApi {
    pub fn new() -> Self {
        Self {
            category_filter: RwSignal::new(String::new()),
        }
    }
}

#[async_trait(?Send)]
impl CrudService for AssetSubcategoryApi {
    type Item = AssetSubcategory;
    type Payload = AssetSubcategoryPayload;

    async fn list(&self) -> Result<Vec<AssetSubcategory>, ApiError> {
        let category_id = self.category_filter.get_untracked();
        api_utils::get_list(&api_utils::with_query(PATH, "category_id", Some(&category_id))).await
    }

    async fn create(&self, payload: &AssetSubcategoryPayload) -> Result<(), ApiError> {
        api_utils::post(PATH, payload).await
    }

    async fn update(&self, id: i64, payload: &AssetSubcategoryPayload) -> Result<(), ApiError> {
        api_utils::put(&format!("{}/{}", PATH, id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        api_utils::delete(&format!("{}/{}", PATH, id)).await
    }
}
