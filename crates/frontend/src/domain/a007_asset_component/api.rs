//! Components of one asset
//!
//! The list and create endpoints hang off the asset
//! (`/assets/{id}/components`), update/delete/transfer off the component.

use async_trait::async_trait;
use contracts::domain::a007_asset_component::aggregate::{AssetComponent, ComponentPayload, TransferPayload};
use contracts::domain::a007_asset_component::ENTITY_METADATA;
use contracts::domain::a008_asset::ENTITY_METADATA as ASSET_METADATA;

use crate::shared::api_utils::{self, ApiError};
use crate::shared::crud::CrudService;

const PATH: &str = ENTITY_METADATA.collection_path;

#[derive(Debug, Clone, Copy)]
pub struct AssetComponentApi {
    pub asset_id: i64,
}

impl AssetComponentApi {
    pub fn new(asset_id: i64) -> Self {
        Self { asset_id }
    }

    fn asset_components_path(&self) -> String {
        format!("{}/{}/components", ASSET_METADATA.collection_path, self.asset_id)
    }
}

#[async_trait(?Send)]
impl CrudService for AssetComponentApi {
    type Item = AssetComponent;
    type Payload = ComponentPayload;

    async fn list(&self) -> Result<Vec<AssetComponent>, ApiError> {
        api_utils::get_list(&self.asset_components_path()).await
    }

    async fn create(&self, payload: &ComponentPayload) -> Result<(), ApiError> {
        api_utils::post(&self.asset_components_path(), payload).await
    }

    async fn update(&self, id: i64, payload: &ComponentPayload) -> Result<(), ApiError> {
        api_utils::put(&format!("{}/{}", PATH, id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        api_utils::delete(&format!("{}/{}", PATH, id)).await
    }
}

/// Hand the component over to another employee
pub async fn transfer_component(id: i64, payload: &TransferPayload) -> Result<(), ApiError> {
    api_utils::post(&format!("{}/{}/transfer", PATH, id), payload).await
}
