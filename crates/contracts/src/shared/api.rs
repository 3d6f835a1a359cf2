//! Response envelope returned by every backend endpoint
//!
//! The backend wraps all payloads as `{ success, data, message, errors }`.
//! The envelope is converted exactly once into [`ApiResponse`], so callers
//! never inspect `success` themselves.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw envelope as it appears on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_field_errors")]
    pub errors: Vec<FieldError>,
}

/// Messages reported by the backend for one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub messages: Vec<String>,
}

/// Rejected request: the envelope had `success: false`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub message: Option<String>,
    pub field_errors: Vec<FieldError>,
}

/// Discriminated result of a backend call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Ok(T),
    Error(ApiFailure),
}

impl<T> ApiEnvelope<T> {
    /// Convert the envelope into the discriminated result.
    ///
    /// `data` stays optional: delete endpoints legitimately return none.
    pub fn into_response(self) -> ApiResponse<Option<T>> {
        if self.success {
            ApiResponse::Ok(self.data)
        } else {
            ApiResponse::Error(ApiFailure {
                message: self.message.filter(|m| !m.trim().is_empty()),
                field_errors: self.errors,
            })
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self {
            ApiResponse::Ok(data) => Ok(data),
            ApiResponse::Error(failure) => Err(failure),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResponse::Ok(_))
    }
}

impl ApiFailure {
    pub fn has_field_errors(&self) -> bool {
        self.field_errors.iter().any(|e| !e.messages.is_empty())
    }

    /// All field messages, in the order the backend sent them, one per line
    pub fn flattened_field_errors(&self) -> Option<String> {
        if !self.has_field_errors() {
            return None;
        }
        let lines: Vec<&str> = self
            .field_errors
            .iter()
            .flat_map(|e| e.messages.iter().map(String::as_str))
            .collect();
        Some(lines.join("\n"))
    }

    /// Text shown to the operator: field errors first, then `message`, then `fallback`
    pub fn display_message(&self, fallback: &str) -> String {
        self.flattened_field_errors()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Parse a response body into the discriminated result
pub fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<ApiResponse<Option<T>>, serde_json::Error> {
    let envelope: ApiEnvelope<T> = serde_json::from_str(body)?;
    Ok(envelope.into_response())
}

// `errors` is `{ field: [messages] }`; some endpoints send a bare string instead of a list.
fn deserialize_field_errors<'de, D>(deserializer: D) -> Result<Vec<FieldError>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    let Some(Value::Object(map)) = raw else {
        return Ok(Vec::new());
    };

    let errors = map
        .into_iter()
        .map(|(field, value)| {
            let messages = match value {
                Value::Array(items) => items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        Value::Null => None,
                        other => Some(other.to_string()),
                    })
                    .collect(),
                Value::String(s) => vec![s],
                Value::Null => Vec::new(),
                other => vec![other.to_string()],
            };
            FieldError { field, messages }
        })
        .collect();

    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_yields_data() {
        let response: ApiResponse<Option<Vec<i64>>> =
            parse_envelope(r#"{"success": true, "data": [1, 2, 3]}"#).unwrap();
        assert_eq!(response, ApiResponse::Ok(Some(vec![1, 2, 3])));
    }

    #[test]
    fn test_success_without_data() {
        let response: ApiResponse<Option<Value>> =
            parse_envelope(r#"{"success": true, "message": "Deleted"}"#).unwrap();
        assert_eq!(response, ApiResponse::Ok(None));
    }

    #[test]
    fn test_field_errors_flatten_in_received_order() {
        let body = r#"{
            "success": false,
            "message": "The given data was invalid.",
            "errors": {"name": ["required"], "brand": ["too long"]}
        }"#;
        let failure = parse_envelope::<Value>(body)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.display_message("Request failed"), "required\ntoo long");
    }

    #[test]
    fn test_multiple_messages_per_field() {
        let body = r#"{"success": false, "errors": {"name": ["required", "must be unique"], "color": "bad"}}"#;
        let failure = parse_envelope::<Value>(body)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(
            failure.flattened_field_errors().as_deref(),
            Some("required\nmust be unique\nbad")
        );
    }

    #[test]
    fn test_message_used_without_field_errors() {
        let failure = parse_envelope::<Value>(r#"{"success": false, "message": "Category is in use"}"#)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.display_message("Request failed"), "Category is in use");
    }

    #[test]
    fn test_fallback_when_nothing_reported() {
        let failure = parse_envelope::<Value>(r#"{"success": false, "message": "  ", "errors": {}}"#)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.display_message("Failed to save"), "Failed to save");
    }

    #[test]
    fn test_missing_success_is_failure() {
        let response = parse_envelope::<Value>(r#"{"data": {"id": 1}}"#).unwrap();
        assert!(!response.is_ok());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        assert!(parse_envelope::<Value>("<html>502</html>").is_err());
    }
}
