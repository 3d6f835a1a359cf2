use serde::{Deserialize, Serialize};

use crate::shared::validation::{optional_text, required_text, ValidationError};

/// Отдел / секция
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionForm {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPayload {
    pub name: String,
    pub description: Option<String>,
}

impl From<&Section> for SectionForm {
    fn from(s: &Section) -> Self {
        Self {
            id: Some(s.id),
            name: s.name.clone(),
            description: s.description.clone().unwrap_or_default(),
        }
    }
}

impl SectionForm {
    pub fn to_payload(&self) -> Result<SectionPayload, ValidationError> {
        Ok(SectionPayload {
            name: required_text("Section name", &self.name)?,
            description: optional_text(&self.description),
        })
    }
}
