use serde::{Deserialize, Serialize};

use crate::shared::validation::{optional_id, required_id, required_text, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeBranchRef {
    pub branch_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDepartmentRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePositionRef {
    pub title: String,
}

/// Сотрудник с денормализованными полями для отображения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub fullname: String,
    pub branch_id: i64,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub position_id: Option<i64>,
    #[serde(default)]
    pub branch: Option<EmployeeBranchRef>,
    #[serde(default)]
    pub department: Option<EmployeeDepartmentRef>,
    #[serde(default)]
    pub position: Option<EmployeePositionRef>,
}

impl Employee {
    pub fn branch_name(&self) -> &str {
        self.branch.as_ref().map(|b| b.branch_name.as_str()).unwrap_or("")
    }

    pub fn department_name(&self) -> &str {
        self.department.as_ref().map(|d| d.name.as_str()).unwrap_or("")
    }

    pub fn position_title(&self) -> &str {
        self.position.as_ref().map(|p| p.title.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub id: Option<i64>,
    pub fullname: String,
    pub branch_id: String,
    pub department_id: String,
    pub position_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub fullname: String,
    pub branch_id: i64,
    pub department_id: Option<i64>,
    pub position_id: Option<i64>,
}

impl From<&Employee> for EmployeeForm {
    fn from(e: &Employee) -> Self {
        Self {
            id: Some(e.id),
            fullname: e.fullname.clone(),
            branch_id: e.branch_id.to_string(),
            department_id: e.department_id.map(|id| id.to_string()).unwrap_or_default(),
            position_id: e.position_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }
}

impl EmployeeForm {
    pub fn to_payload(&self) -> Result<EmployeePayload, ValidationError> {
        Ok(EmployeePayload {
            fullname: required_text("Full name", &self.fullname)?,
            branch_id: required_id("Branch", &self.branch_id)?,
            department_id: optional_id("Department", &self.department_id)?,
            position_id: optional_id("Position", &self.position_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denormalized_fields() {
        let json = r#"{
            "id": 4, "fullname": "Dana Cruz", "branch_id": 2, "department_id": 3, "position_id": null,
            "branch": {"branch_name": "North"}, "department": {"name": "IT"}
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.branch_name(), "North");
        assert_eq!(employee.department_name(), "IT");
        assert_eq!(employee.position_title(), "");
    }

    #[test]
    fn test_branch_required() {
        let form = EmployeeForm {
            fullname: "Dana Cruz".into(),
            ..Default::default()
        };
        assert_eq!(form.to_payload(), Err(ValidationError::Required("Branch")));
    }

    #[test]
    fn test_optional_ids() {
        let form = EmployeeForm {
            id: None,
            fullname: " Dana Cruz ".into(),
            branch_id: "2".into(),
            department_id: "5".into(),
            position_id: String::new(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.fullname, "Dana Cruz");
        assert_eq!(payload.department_id, Some(5));
        assert_eq!(payload.position_id, None);
    }
}
