//! Specification map: category-specific attributes of a component
//!
//! Values are scalars (string, number, bool or null). Form inputs store
//! strings; the backend may send numbers back.

use serde_json::{Number, Value};
use std::collections::BTreeMap;

pub type Specifications = BTreeMap<String, Value>;

/// Stringified value, or `None` when the key is absent, null or an empty string
pub fn spec_text(specs: &Specifications, key: &str) -> Option<String> {
    match specs.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(format_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// `spec_text` with a literal default
pub fn spec_text_or(specs: &Specifications, key: &str, default: &str) -> String {
    spec_text(specs, key).unwrap_or_else(|| default.to_string())
}

// 16.0 is shown as "16", like the browser would
fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Prepare the map for create/update.
///
/// A non-empty `speed` is coerced to a number and rounded to the nearest
/// integer (halves round up). Values that are not numeric stay untouched,
/// as does every other key.
pub fn normalize_specifications(specs: &Specifications) -> Specifications {
    let mut normalized = specs.clone();
    if let Some(rounded) = specs.get("speed").and_then(rounded_number) {
        normalized.insert("speed".to_string(), Value::from(rounded));
    }
    normalized
}

fn rounded_number(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    if !number.is_finite() {
        return None;
    }
    Some((number + 0.5).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn specs(value: Value) -> Specifications {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_spec_text_skips_empty_values() {
        let s = specs(json!({"ram": 16, "processor": "", "screen_size": null, "cache": 2.5}));
        assert_eq!(spec_text(&s, "ram").as_deref(), Some("16"));
        assert_eq!(spec_text(&s, "processor"), None);
        assert_eq!(spec_text(&s, "screen_size"), None);
        assert_eq!(spec_text(&s, "missing"), None);
        assert_eq!(spec_text(&s, "cache").as_deref(), Some("2.5"));
    }

    #[test]
    fn test_whole_float_prints_as_integer() {
        let s = specs(json!({"ram": 16.0}));
        assert_eq!(spec_text(&s, "ram").as_deref(), Some("16"));
    }

    #[test]
    fn test_speed_string_is_rounded() {
        let s = specs(json!({"speed": "2133.7", "capacity": "8"}));
        let normalized = normalize_specifications(&s);
        assert_eq!(normalized["speed"], json!(2134));
        assert_eq!(normalized["capacity"], json!("8"));
    }

    #[test]
    fn test_speed_half_rounds_up() {
        let s = specs(json!({"speed": 2400.5}));
        assert_eq!(normalize_specifications(&s)["speed"], json!(2401));
    }

    #[test]
    fn test_non_numeric_speed_untouched() {
        let s = specs(json!({"speed": "abc"}));
        assert_eq!(normalize_specifications(&s)["speed"], json!("abc"));

        let s = specs(json!({"speed": ""}));
        assert_eq!(normalize_specifications(&s)["speed"], json!(""));
    }

    #[test]
    fn test_missing_speed_is_noop() {
        let s = specs(json!({"ram": "16"}));
        assert_eq!(normalize_specifications(&s), s);
    }
}
