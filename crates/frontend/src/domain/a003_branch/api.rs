use async_trait::async_trait;
use contracts::domain::a003_branch::aggregate::{Branch, BranchPayload};
use contracts::domain::a003_branch::ENTITY_METADATA;

use crate::shared::api_utils::{self, ApiError};
use crate::shared::crud::CrudService;

const PATH: &str = ENTITY_METADATA.collection_path;

#[derive(Debug, Clone, Copy, Default)]
pub struct BranchApi;

#[async_trait(?Send)]
impl CrudService for BranchApi {
    type Item = Branch;
    type Payload = BranchPayload;

    async fn list(&self) -> Result<Vec<Branch>, ApiError> {
        fetch_branches().await
    }

    async fn create(&self, payload: &BranchPayload) -> Result<(), ApiError> {
        api_utils::post(PATH, payload).await
    }

    async fn update(&self, id: i64, payload: &BranchPayload) -> Result<(), ApiError> {
        api_utils::put(&format!("{}/{}", PATH, id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        api_utils::delete(&format!("{}/{}", PATH, id)).await
    }
}

/// Used by the employee filter and the license report
pub async fn fetch_branches() -> Result<Vec<Branch>, ApiError> {
    api_utils::get_list(PATH).await
}
