//! Local (pre-submit) form validation
//!
//! Forms keep every input as the raw string the operator typed or selected.
//! The helpers below turn those strings into payload values and report the
//! first rule that fails.

use thiserror::Error;

/// A form rule that failed before any request was sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must be a valid selection")]
    InvalidId(&'static str),

    #[error("{0} must be a number")]
    InvalidNumber(&'static str),

    #[error("Color must be a hex value such as #3B82F6")]
    InvalidColor,
}

/// Trimmed required text
pub fn required_text(label: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(label))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trimmed optional text; blank becomes `None`
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a select value into a positive id
pub fn parse_positive_id(label: &'static str, value: &str) -> Result<i64, ValidationError> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidId(label)),
    }
}

/// Required reference: blank is `Required`, non-numeric is `InvalidId`
pub fn required_id(label: &'static str, value: &str) -> Result<i64, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(label));
    }
    parse_positive_id(label, value)
}

/// Optional reference: blank is `None`
pub fn optional_id(label: &'static str, value: &str) -> Result<Option<i64>, ValidationError> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_positive_id(label, value).map(Some)
    }
}

/// Optional decimal amount: blank is `None`
pub fn optional_amount(label: &'static str, value: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(Some(amount)),
        _ => Err(ValidationError::InvalidNumber(label)),
    }
}

/// `#RGB` or `#RRGGBB`, returned upper-cased
pub fn hex_color(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').ok_or(ValidationError::InvalidColor)?;
    let valid_len = digits.len() == 3 || digits.len() == 6;
    if valid_len && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(format!("#{}", digits.to_ascii_uppercase()))
    } else {
        Err(ValidationError::InvalidColor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("Name", "  Laptop "), Ok("Laptop".to_string()));
        assert_eq!(required_text("Name", "   "), Err(ValidationError::Required("Name")));
    }

    #[test]
    fn test_ids() {
        assert_eq!(required_id("Category", "12"), Ok(12));
        assert_eq!(required_id("Category", ""), Err(ValidationError::Required("Category")));
        assert_eq!(required_id("Category", "0"), Err(ValidationError::InvalidId("Category")));
        assert_eq!(required_id("Category", "abc"), Err(ValidationError::InvalidId("Category")));
        assert_eq!(optional_id("Vendor", " "), Ok(None));
        assert_eq!(optional_id("Vendor", "-4"), Err(ValidationError::InvalidId("Vendor")));
    }

    #[test]
    fn test_amount() {
        assert_eq!(optional_amount("Cost", "1499.50"), Ok(Some(1499.5)));
        assert_eq!(optional_amount("Cost", ""), Ok(None));
        assert_eq!(optional_amount("Cost", "NaN"), Err(ValidationError::InvalidNumber("Cost")));
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#3b82f6"), Ok("#3B82F6".to_string()));
        assert_eq!(hex_color("#fff"), Ok("#FFF".to_string()));
        assert_eq!(hex_color("3B82F6"), Err(ValidationError::InvalidColor));
        assert_eq!(hex_color("#12345G"), Err(ValidationError::InvalidColor));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::Required("Status").to_string(), "Status is required");
        assert_eq!(
            ValidationError::InvalidId("Category").to_string(),
            "Category must be a valid selection"
        );
    }
}
