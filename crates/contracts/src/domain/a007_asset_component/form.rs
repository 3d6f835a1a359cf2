//! Add/edit form of an asset component
//!
//! Every change goes through [`ComponentForm::apply`], which keeps dependent
//! fields consistent:
//! - a new category invalidates the selected subcategory;
//! - category, subcategory, brand, model and specification changes re-derive
//!   `component_name` (an empty derivation keeps the previous name).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::aggregate::{AssetComponent, ComponentPayload};
use super::naming::{build_component_name, NamingLookup};
use super::specifications::{normalize_specifications, Specifications};
use crate::shared::validation::{
    optional_amount, optional_id, optional_text, parse_positive_id, ValidationError,
};

/// Raw form state; ids are kept as select values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentForm {
    pub id: Option<i64>,
    pub category_id: String,
    pub subcategory_id: String,
    pub component_name: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub specifications: Specifications,
    pub acq_cost: String,
    pub vendor_id: String,
    pub status_id: String,
    pub remarks: String,
}

/// A single edit made by the operator
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentField {
    CategoryId(String),
    SubcategoryId(String),
    ComponentName(String),
    Brand(String),
    Model(String),
    SerialNumber(String),
    Specification { key: String, value: String },
    AcqCost(String),
    VendorId(String),
    StatusId(String),
    Remarks(String),
}

impl ComponentField {
    /// Changes that feed the derived name
    pub fn is_tracked(&self) -> bool {
        matches!(
            self,
            Self::CategoryId(_)
                | Self::SubcategoryId(_)
                | Self::Brand(_)
                | Self::Model(_)
                | Self::Specification { .. }
        )
    }
}

fn id_text(id: Option<i64>) -> String {
    id.map(|v| v.to_string()).unwrap_or_default()
}

impl From<&AssetComponent> for ComponentForm {
    fn from(c: &AssetComponent) -> Self {
        Self {
            id: Some(c.id),
            category_id: c.category_id.to_string(),
            subcategory_id: id_text(c.subcategory_id),
            component_name: c.component_name.clone(),
            brand: c.brand.clone().unwrap_or_default(),
            model: c.model.clone().unwrap_or_default(),
            serial_number: c.serial_number.clone().unwrap_or_default(),
            specifications: c.specifications.clone(),
            acq_cost: c.acq_cost.map(|v| v.to_string()).unwrap_or_default(),
            vendor_id: id_text(c.vendor_id),
            status_id: c.status_id.to_string(),
            remarks: c.remarks.clone().unwrap_or_default(),
        }
    }
}

impl ComponentForm {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Apply one change and reconcile dependent fields in the same update
    pub fn apply(&mut self, change: ComponentField, lookup: NamingLookup<'_>) {
        let tracked = change.is_tracked();

        match change {
            ComponentField::CategoryId(v) => {
                self.category_id = v;
                self.subcategory_id.clear();
            }
            ComponentField::SubcategoryId(v) => self.subcategory_id = v,
            ComponentField::ComponentName(v) => self.component_name = v,
            ComponentField::Brand(v) => self.brand = v,
            ComponentField::Model(v) => self.model = v,
            ComponentField::SerialNumber(v) => self.serial_number = v,
            ComponentField::Specification { key, value } => {
                self.specifications.insert(key, Value::String(value));
            }
            ComponentField::AcqCost(v) => self.acq_cost = v,
            ComponentField::VendorId(v) => self.vendor_id = v,
            ComponentField::StatusId(v) => self.status_id = v,
            ComponentField::Remarks(v) => self.remarks = v,
        }

        if tracked {
            self.refresh_name(lookup);
        }
    }

    /// Overwrite `component_name` with the derived one unless it is empty
    pub fn refresh_name(&mut self, lookup: NamingLookup<'_>) {
        let derived = build_component_name(self, lookup);
        if !derived.is_empty() {
            self.component_name = derived;
        }
    }

    /// Validate and build the body of `PUT /asset-components/{id}`
    pub fn to_update_payload(&self) -> Result<ComponentPayload, ValidationError> {
        self.to_payload(None)
    }

    /// Validate and build the body of `POST /assets/{asset_id}/components`
    pub fn to_create_payload(&self, asset_id: i64) -> Result<ComponentPayload, ValidationError> {
        self.to_payload(Some(asset_id))
    }

    fn to_payload(&self, asset_id: Option<i64>) -> Result<ComponentPayload, ValidationError> {
        if self.category_id.trim().is_empty() {
            return Err(ValidationError::Required("Category"));
        }
        if self.component_name.trim().is_empty() {
            return Err(ValidationError::Required("Component name"));
        }
        if self.status_id.trim().is_empty() {
            return Err(ValidationError::Required("Status"));
        }
        let category_id = parse_positive_id("Category", &self.category_id)?;
        let status_id = parse_positive_id("Status", &self.status_id)?;

        Ok(ComponentPayload {
            asset_id,
            category_id,
            subcategory_id: optional_id("Subcategory", &self.subcategory_id)?,
            component_name: self.component_name.trim().to_string(),
            brand: optional_text(&self.brand),
            model: optional_text(&self.model),
            serial_number: optional_text(&self.serial_number),
            specifications: normalize_specifications(&self.specifications),
            acq_cost: optional_amount("Acquisition cost", &self.acq_cost)?,
            vendor_id: optional_id("Vendor", &self.vendor_id)?,
            status_id,
            remarks: optional_text(&self.remarks),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset_category::aggregate::AssetCategory;
    use crate::domain::a002_asset_subcategory::aggregate::AssetSubcategory;
    use serde_json::json;

    fn categories() -> Vec<AssetCategory> {
        vec![
            AssetCategory { id: 1, name: "Laptop".into(), description: None },
            AssetCategory { id: 2, name: "Memory".into(), description: None },
        ]
    }

    fn subcategories() -> Vec<AssetSubcategory> {
        vec![AssetSubcategory {
            id: 7,
            category_id: 1,
            name: "Ultrabook".into(),
            description: None,
            category: None,
        }]
    }

    fn valid_form() -> ComponentForm {
        ComponentForm {
            id: Some(42),
            category_id: "2".into(),
            component_name: "  Memory Kingston (8GB RAM)  ".into(),
            brand: " Kingston ".into(),
            model: " KVR32 ".into(),
            serial_number: String::new(),
            status_id: "1".into(),
            remarks: String::new(),
            ..Default::default()
        }
    }

    #[test]
    fn test_category_change_clears_subcategory() {
        let cats = categories();
        let subs = subcategories();
        let lookup = NamingLookup::new(&cats, &subs);
        let mut form = ComponentForm::default();
        form.apply(ComponentField::CategoryId("1".into()), lookup);
        form.apply(ComponentField::SubcategoryId("7".into()), lookup);
        assert_eq!(form.component_name, "Laptop Ultrabook");

        form.apply(ComponentField::CategoryId("2".into()), lookup);
        assert_eq!(form.subcategory_id, "");
        assert_eq!(form.component_name, "Memory (RAM)");
    }

    #[test]
    fn test_tracked_change_overwrites_manual_name() {
        let cats = categories();
        let lookup = NamingLookup::new(&cats, &[]);
        let mut form = ComponentForm::default();
        form.apply(ComponentField::CategoryId("1".into()), lookup);
        form.apply(ComponentField::ComponentName("My laptop".into()), lookup);
        assert_eq!(form.component_name, "My laptop");

        form.apply(ComponentField::SerialNumber("SN-1".into()), lookup);
        assert_eq!(form.component_name, "My laptop");

        form.apply(ComponentField::Brand("Lenovo".into()), lookup);
        assert_eq!(form.component_name, "Laptop Lenovo");
    }

    #[test]
    fn test_empty_derivation_keeps_previous_name() {
        let lookup = NamingLookup::new(&[], &[]);
        let mut form = ComponentForm {
            component_name: "Legacy name".into(),
            ..Default::default()
        };
        form.apply(ComponentField::Model("X1".into()), lookup);
        assert_eq!(form.component_name, "Legacy name");
    }

    #[test]
    fn test_specification_change_rederives() {
        let cats = categories();
        let lookup = NamingLookup::new(&cats, &[]);
        let mut form = ComponentForm::default();
        form.apply(ComponentField::CategoryId("1".into()), lookup);
        form.apply(
            ComponentField::Specification { key: "processor".into(), value: "i7".into() },
            lookup,
        );
        form.apply(
            ComponentField::Specification { key: "ram".into(), value: "16".into() },
            lookup,
        );
        assert_eq!(form.component_name, "Laptop (i7 / 16GB RAM)");
    }

    #[test]
    fn test_edit_rejects_empty_category() {
        let form = ComponentForm {
            category_id: String::new(),
            ..valid_form()
        };
        assert_eq!(form.to_update_payload(), Err(ValidationError::Required("Category")));
    }

    #[test]
    fn test_edit_rejects_blank_name_and_status() {
        let form = ComponentForm {
            component_name: "   ".into(),
            ..valid_form()
        };
        assert_eq!(form.to_update_payload(), Err(ValidationError::Required("Component name")));

        let form = ComponentForm {
            status_id: String::new(),
            ..valid_form()
        };
        assert_eq!(form.to_update_payload(), Err(ValidationError::Required("Status")));
    }

    #[test]
    fn test_edit_rejects_non_positive_ids() {
        let form = ComponentForm {
            category_id: "0".into(),
            ..valid_form()
        };
        assert_eq!(form.to_update_payload(), Err(ValidationError::InvalidId("Category")));

        let form = ComponentForm {
            status_id: "active".into(),
            ..valid_form()
        };
        assert_eq!(form.to_update_payload(), Err(ValidationError::InvalidId("Status")));
    }

    #[test]
    fn test_edit_payload_is_trimmed_and_nulls_blanks() {
        let payload = valid_form().to_update_payload().unwrap();
        let value = serde_json::to_value(&payload).unwrap();

        assert!(value.get("id").is_none());
        assert!(value.get("asset_id").is_none());
        assert_eq!(value["component_name"], json!("Memory Kingston (8GB RAM)"));
        assert_eq!(value["brand"], json!("Kingston"));
        assert_eq!(value["model"], json!("KVR32"));
        assert_eq!(value["serial_number"], json!(null));
        assert_eq!(value["remarks"], json!(null));
        assert_eq!(value["category_id"], json!(2));
        assert_eq!(value["status_id"], json!(1));
    }

    #[test]
    fn test_blank_brand_and_model_become_null() {
        let form = ComponentForm {
            brand: "  ".into(),
            model: String::new(),
            ..valid_form()
        };
        let payload = form.to_update_payload().unwrap();
        assert_eq!(payload.brand, None);
        assert_eq!(payload.model, None);
    }

    #[test]
    fn test_payload_normalizes_speed() {
        let mut form = valid_form();
        form.specifications.insert("speed".into(), json!("2133.7"));
        let payload = form.to_update_payload().unwrap();
        assert_eq!(payload.specifications["speed"], json!(2134));
    }

    #[test]
    fn test_create_payload_carries_asset() {
        let form = ComponentForm {
            id: None,
            ..valid_form()
        };
        let payload = form.to_create_payload(5).unwrap();
        assert_eq!(payload.asset_id, Some(5));
        assert_eq!(serde_json::to_value(&payload).unwrap()["asset_id"], json!(5));
    }

    #[test]
    fn test_form_from_component() {
        let component: AssetComponent = serde_json::from_value(json!({
            "id": 3, "category_id": 1, "subcategory_id": 7, "component_name": "Laptop Ultrabook",
            "status_id": 2, "vendor_id": null, "acq_cost": 1200.5
        }))
        .unwrap();
        let form = ComponentForm::from(&component);
        assert!(form.is_edit());
        assert_eq!(form.subcategory_id, "7");
        assert_eq!(form.vendor_id, "");
        assert_eq!(form.acq_cost, "1200.5");
    }
}
