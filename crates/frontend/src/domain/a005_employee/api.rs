use async_trait::async_trait;
use contracts::domain::a005_employee::aggregate::{Employee, EmployeePayload};
use contracts::domain::a005_employee::ENTITY_METADATA;

use crate::shared::api_utils::{self, ApiError};
use crate::shared::crud::CrudService;

const PATH: &str = ENTITY_METADATA.collection_path;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeApi;

#[async_trait(?Send)]
impl CrudService for EmployeeApi {
    type Item = Employee;
    type Payload = EmployeePayload;

    async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        fetch_employees().await
    }

    async fn create(&self, payload: &EmployeePayload) -> Result<(), ApiError> {
        api_utils::post(PATH, payload).await
    }

    async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<(), ApiError> {
        api_utils::put(&format!("{}/{}", PATH, id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        api_utils::delete(&format!("{}/{}", PATH, id)).await
    }
}

/// Targets of a component transfer
pub async fn fetch_employees() -> Result<Vec<Employee>, ApiError> {
    api_utils::get_list(PATH).await
}
