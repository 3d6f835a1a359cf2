use serde::{Deserialize, Serialize};

use crate::shared::validation::{optional_text, required_text, ValidationError};

// ============================================================================
// Aggregate
// ============================================================================

/// Категория актива (Laptop, Memory, Monitor, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ============================================================================
// Form / payload
// ============================================================================

/// Editable state of the category modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetCategoryForm {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

/// Body of `POST /asset-categories` and `PUT /asset-categories/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCategoryPayload {
    pub name: String,
    pub description: Option<String>,
}

impl From<&AssetCategory> for AssetCategoryForm {
    fn from(c: &AssetCategory) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            description: c.description.clone().unwrap_or_default(),
        }
    }
}

impl AssetCategoryForm {
    pub fn to_payload(&self) -> Result<AssetCategoryPayload, ValidationError> {
        Ok(AssetCategoryPayload {
            name: required_text("Category name", &self.name)?,
            description: optional_text(&self.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_trims_and_nulls_description() {
        let form = AssetCategoryForm {
            id: None,
            name: "  Laptop ".into(),
            description: "   ".into(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.name, "Laptop");
        assert_eq!(payload.description, None);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"name": "Laptop", "description": null})
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let form = AssetCategoryForm::default();
        assert_eq!(form.to_payload(), Err(ValidationError::Required("Category name")));
    }
}
