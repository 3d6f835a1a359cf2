use serde::{Deserialize, Serialize};

/// Поставщик (только чтение, используется в выпадающих списках)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
}
