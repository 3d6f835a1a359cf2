use async_trait::async_trait;
use contracts::domain::a006_status::aggregate::{Status, StatusPayload};
use contracts::domain::a006_status::ENTITY_METADATA;

use crate::shared::api_utils::{self, ApiError};
use crate::shared::crud::CrudService;

const PATH: &str = ENTITY_METADATA.collection_path;

#[derive(Debug, Clone, Copy, Default)]
pub struct StatusApi;

#[async_trait(?Send)]
impl CrudService for StatusApi {
    type Item = Status;
    type Payload = StatusPayload;

    async fn list(&self) -> Result<Vec<Status>, ApiError> {
        fetch_statuses().await
    }

    async fn create(&self, payload: &StatusPayload) -> Result<(), ApiError> {
        api_utils::post(PATH, payload).await
    }

    async fn update(&self, id: i64, payload: &StatusPayload) -> Result<(), ApiError> {
        api_utils::put(&format!("{}/{}", PATH, id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        api_utils::delete(&format!("{}/{}", PATH, id)).await
    }
}

pub async fn fetch_statuses() -> Result<Vec<Status>, ApiError> {
    api_utils::get_list(PATH).await
}
