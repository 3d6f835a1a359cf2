//! Decimal columns come back either as JSON numbers or as strings like "2500.00"

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_amount(value: Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// `Option<f64>` field; unparseable values become `None`
pub fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(value_to_amount))
}

/// `f64` field; missing or unparseable values count as zero
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_amount(deserializer).map(|v| v.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "deserialize_amount")]
        total: f64,
        #[serde(default, deserialize_with = "deserialize_optional_amount")]
        cost: Option<f64>,
    }

    #[test]
    fn test_number_and_string_amounts() {
        let row: Row = serde_json::from_str(r#"{"total": "1250.50", "cost": 99}"#).unwrap();
        assert_eq!(row.total, 1250.5);
        assert_eq!(row.cost, Some(99.0));
    }

    #[test]
    fn test_missing_and_garbage() {
        let row: Row = serde_json::from_str(r#"{"cost": "n/a"}"#).unwrap();
        assert_eq!(row.total, 0.0);
        assert_eq!(row.cost, None);
    }
}
