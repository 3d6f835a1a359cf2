use serde::{Deserialize, Serialize};

/// Row of the read-only equipment register; `id` is the asset id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}
