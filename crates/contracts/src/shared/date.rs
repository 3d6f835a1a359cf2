//! Date columns come back as "2025-01-31" or as timestamps like "2025-01-31T00:00:00Z"

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn text_to_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
                .ok()
                .map(|dt| dt.date())
        })
}

/// `Option<NaiveDate>` field; empty or unparseable values become `None`
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => text_to_date(&s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        expiry: Option<NaiveDate>,
    }

    fn expiry(json: &str) -> Option<NaiveDate> {
        serde_json::from_str::<Row>(json).unwrap().expiry
    }

    #[test]
    fn test_date_and_timestamp_forms() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1);
        assert_eq!(expiry(r#"{"expiry": "2025-01-01"}"#), day);
        assert_eq!(expiry(r#"{"expiry": "2025-01-01T00:00:00Z"}"#), day);
        assert_eq!(expiry(r#"{"expiry": "2025-01-01T10:30:00.000000Z"}"#), day);
        assert_eq!(expiry(r#"{"expiry": "2025-01-01T00:00:00"}"#), day);
        assert_eq!(expiry(r#"{"expiry": "2025-01-01 08:00:00"}"#), day);
    }

    #[test]
    fn test_missing_and_garbage_dates() {
        assert_eq!(expiry(r#"{}"#), None);
        assert_eq!(expiry(r#"{"expiry": null}"#), None);
        assert_eq!(expiry(r#"{"expiry": ""}"#), None);
        assert_eq!(expiry(r#"{"expiry": "soon"}"#), None);
        assert_eq!(expiry(r#"{"expiry": 20250101}"#), None);
    }
}
