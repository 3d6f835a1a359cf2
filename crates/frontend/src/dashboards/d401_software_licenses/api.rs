use contracts::dashboards::d401_software_licenses::SoftwareLicense;

use crate::shared::api_utils::{get_list, with_query, ApiError};

/// Лицензии филиала; пустой `branch_id` означает все филиалы
pub async fn fetch_licenses(branch_id: &str) -> Result<Vec<SoftwareLicense>, ApiError> {
    get_list(&with_query("/software-licenses", "branch_id", Some(branch_id))).await
}
