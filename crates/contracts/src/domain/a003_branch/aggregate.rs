use serde::{Deserialize, Serialize};

use crate::shared::validation::{optional_text, required_text, ValidationError};

/// Филиал
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub branch_name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BranchForm {
    pub id: Option<i64>,
    pub branch_name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchPayload {
    pub branch_name: String,
    pub address: Option<String>,
}

impl From<&Branch> for BranchForm {
    fn from(b: &Branch) -> Self {
        Self {
            id: Some(b.id),
            branch_name: b.branch_name.clone(),
            address: b.address.clone().unwrap_or_default(),
        }
    }
}

impl BranchForm {
    pub fn to_payload(&self) -> Result<BranchPayload, ValidationError> {
        Ok(BranchPayload {
            branch_name: required_text("Branch name", &self.branch_name)?,
            address: optional_text(&self.address),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_form() {
        let branch = Branch {
            id: 7,
            branch_name: "Main Office".into(),
            address: None,
        };
        let form = BranchForm::from(&branch);
        assert_eq!(form.id, Some(7));
        assert_eq!(form.address, "");
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.branch_name, "Main Office");
        assert_eq!(payload.address, None);
    }
}
