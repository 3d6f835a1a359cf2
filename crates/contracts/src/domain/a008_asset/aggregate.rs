use serde::{Deserialize, Serialize};

/// Header of the asset whose components are being managed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub asset_name: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub branch_id: Option<i64>,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub status_id: Option<i64>,
}
