use serde::{Deserialize, Serialize};

use super::specifications::Specifications;
use crate::shared::amount::deserialize_optional_amount;
use crate::shared::validation::{optional_text, required_id, required_text, ValidationError};

// ============================================================================
// Embedded display objects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: i64,
    pub fullname: String,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Компонент актива
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetComponent {
    pub id: i64,
    #[serde(default)]
    pub asset_id: Option<i64>,
    pub category_id: i64,
    #[serde(default)]
    pub subcategory_id: Option<i64>,
    pub component_name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub acq_cost: Option<f64>,
    #[serde(default)]
    pub vendor_id: Option<i64>,
    pub status_id: i64,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub remarks: Option<String>,

    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub subcategory: Option<NamedRef>,
    #[serde(default)]
    pub status: Option<StatusRef>,
    #[serde(default)]
    pub vendor: Option<NamedRef>,
    #[serde(default)]
    pub employee: Option<EmployeeRef>,
}

impl AssetComponent {
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn status_name(&self) -> &str {
        self.status.as_ref().map(|s| s.name.as_str()).unwrap_or("")
    }

    pub fn assigned_to(&self) -> &str {
        self.employee.as_ref().map(|e| e.fullname.as_str()).unwrap_or("")
    }
}

/// Body of `POST /assets/{id}/components` and `PUT /asset-components/{id}`.
///
/// Never carries the component id; `asset_id` is only sent on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentPayload {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub asset_id: Option<i64>,
    pub category_id: i64,
    pub subcategory_id: Option<i64>,
    pub component_name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub specifications: Specifications,
    pub acq_cost: Option<f64>,
    pub vendor_id: Option<i64>,
    pub status_id: i64,
    pub remarks: Option<String>,
}

// ============================================================================
// Transfer
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferForm {
    pub to_employee_id: String,
    pub reason: String,
    pub remarks: String,
}

/// Body of `POST /asset-components/{id}/transfer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferPayload {
    pub to_employee_id: i64,
    pub reason: String,
    pub remarks: Option<String>,
}

impl TransferForm {
    pub fn to_payload(&self) -> Result<TransferPayload, ValidationError> {
        Ok(TransferPayload {
            to_employee_id: required_id("Target employee", &self.to_employee_id)?,
            reason: required_text("Reason", &self.reason)?,
            remarks: optional_text(&self.remarks),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_from_backend() {
        let json = r##"{
            "id": 11, "asset_id": 3, "category_id": 1, "subcategory_id": null,
            "component_name": "Memory Kingston (8GB DDR4 RAM)",
            "brand": "Kingston", "specifications": {"capacity": 8, "memory_type": "DDR4"},
            "acq_cost": "2500.00", "status_id": 2,
            "category": {"id": 1, "name": "Memory"},
            "status": {"id": 2, "name": "In use", "color": "#22C55E"}
        }"##;
        let component: AssetComponent = serde_json::from_str(json).unwrap();
        assert_eq!(component.acq_cost, Some(2500.0));
        assert_eq!(component.category_name(), "Memory");
        assert_eq!(component.status_name(), "In use");
        assert_eq!(component.assigned_to(), "");
        assert_eq!(component.specifications.len(), 2);
    }

    #[test]
    fn test_transfer_requires_reason() {
        let form = TransferForm {
            to_employee_id: "9".into(),
            reason: "  ".into(),
            remarks: String::new(),
        };
        assert_eq!(form.to_payload(), Err(ValidationError::Required("Reason")));
    }

    #[test]
    fn test_transfer_payload() {
        let form = TransferForm {
            to_employee_id: "9".into(),
            reason: " Reassigned ".into(),
            remarks: String::new(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"to_employee_id": 9, "reason": "Reassigned", "remarks": null})
        );
    }
}
