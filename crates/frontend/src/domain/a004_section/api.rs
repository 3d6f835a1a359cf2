use async_trait::async_trait;
use contracts::domain::a004_section::aggregate::{Section, SectionPayload};
use contracts::domain::a004_section::ENTITY_METADATA;

use crate::shared::api_utils::{self, ApiError};
use crate::shared::crud::CrudService;

const PATH: &str = ENTITY_METADATA.collection_path;

#[derive(Debug, Clone, Copy, Default)]
pub struct SectionApi;

#[async_trait(?Send)]
impl CrudService for SectionApi {
    type Item = Section;
    type Payload = SectionPayload;

    async fn list(&self) -> Result<Vec<Section>, ApiError> {
        fetch_sections().await
    }

    async fn create(&self, payload: &SectionPayload) -> Result<(), ApiError> {
        api_utils::post(PATH, payload).await
    }

    async fn update(&self, id: i64, payload: &SectionPayload) -> Result<(), ApiError> {
        api_utils::put(&format!("{}/{}", PATH, id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        api_utils::delete(&format!("{}/{}", PATH, id)).await
    }
}

/// Sections double as employee departments
pub async fn fetch_sections() -> Result<Vec<Section>, ApiError> {
    api_utils::get_list(PATH).await
}
