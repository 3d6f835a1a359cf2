use serde::{Deserialize, Serialize};

use crate::shared::validation::{optional_text, required_id, required_text, ValidationError};

/// Name of the owning category as embedded by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// Подкатегория, принадлежит ровно одной категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSubcategory {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl AssetSubcategory {
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetSubcategoryForm {
    pub id: Option<i64>,
    pub category_id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSubcategoryPayload {
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<&AssetSubcategory> for AssetSubcategoryForm {
    fn from(s: &AssetSubcategory) -> Self {
        Self {
            id: Some(s.id),
            category_id: s.category_id.to_string(),
            name: s.name.clone(),
            description: s.description.clone().unwrap_or_default(),
        }
    }
}

impl AssetSubcategoryForm {
    pub fn to_payload(&self) -> Result<AssetSubcategoryPayload, ValidationError> {
        Ok(AssetSubcategoryPayload {
            category_id: required_id("Category", &self.category_id)?,
            name: required_text("Subcategory name", &self.name)?,
            description: optional_text(&self.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_is_checked_first() {
        let form = AssetSubcategoryForm {
            name: String::new(),
            ..Default::default()
        };
        assert_eq!(form.to_payload(), Err(ValidationError::Required("Category")));
    }

    #[test]
    fn test_valid_payload() {
        let form = AssetSubcategoryForm {
            id: Some(3),
            category_id: "2".into(),
            name: " DDR4 ".into(),
            description: String::new(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.category_id, 2);
        assert_eq!(payload.name, "DDR4");
        assert!(payload.description.is_none());
    }

    #[test]
    fn test_deserialize_with_embedded_category() {
        let json = r#"{"id": 5, "category_id": 1, "name": "Gaming", "category": {"name": "Laptop"}}"#;
        let sub: AssetSubcategory = serde_json::from_str(json).unwrap();
        assert_eq!(sub.category_name(), "Laptop");
        assert_eq!(sub.description, None);
    }
}
