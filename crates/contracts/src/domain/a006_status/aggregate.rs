use serde::{Deserialize, Serialize};

use crate::shared::validation::{hex_color, required_text, ValidationError};

/// Color assigned to a new status
pub const DEFAULT_STATUS_COLOR: &str = "#3B82F6";

fn default_color() -> String {
    DEFAULT_STATUS_COLOR.to_string()
}

/// Статус актива/компонента (In use, Defective, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusForm {
    pub id: Option<i64>,
    pub name: String,
    pub color: String,
}

impl Default for StatusForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            color: default_color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub name: String,
    pub color: String,
}

impl From<&Status> for StatusForm {
    fn from(s: &Status) -> Self {
        Self {
            id: Some(s.id),
            name: s.name.clone(),
            color: s.color.clone(),
        }
    }
}

impl StatusForm {
    pub fn to_payload(&self) -> Result<StatusPayload, ValidationError> {
        let name = required_text("Status name", &self.name)?;
        let color = if self.color.trim().is_empty() {
            default_color()
        } else {
            hex_color(&self.color)?
        };
        Ok(StatusPayload { name, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_status_uses_default_color() {
        let form = StatusForm {
            name: "In use".into(),
            ..Default::default()
        };
        assert_eq!(form.to_payload().unwrap().color, "#3B82F6");
    }

    #[test]
    fn test_missing_color_on_wire_defaults() {
        let status: Status = serde_json::from_str(r#"{"id": 1, "name": "Spare"}"#).unwrap();
        assert_eq!(status.color, DEFAULT_STATUS_COLOR);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let form = StatusForm {
            id: Some(2),
            name: "Defective".into(),
            color: "red".into(),
        };
        assert_eq!(form.to_payload(), Err(ValidationError::InvalidColor));
    }
}
