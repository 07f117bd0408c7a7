//! Cell values and their grouping/ordering keys.
//!
//! Input cells are parsed once into `Value`, which distinguishes numeric
//! cells from text and from missing (empty) cells. Numeric cells keep their
//! raw source text so exports reproduce the input spelling exactly
//! ("0.01" stays "0.01", never "0.010000000000000002").

use serde::Serialize;

/// A single parsed cell from the results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "String")]
pub enum Value {
    /// A cell that parses as a number. `raw` is the original text.
    Number { raw: String, value: f64 },
    /// A non-empty cell that does not parse as a number.
    Text(String),
    /// An empty cell.
    Missing,
}

impl Value {
    /// Parse a raw cell. Empty or whitespace-only cells (and the `NaN`
    /// spellings float parsing accepts) are treated as missing.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_nan() => Value::Missing,
            Ok(value) => Value::Number {
                raw: trimmed.to_string(),
                value,
            },
            Err(_) => Value::Text(trimmed.to_string()),
        }
    }

    /// Create a text value
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Check if this is a numeric cell
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number { .. })
    }

    /// Check if this is a missing cell
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// The key used for grouping and row ordering.
    pub fn key(&self) -> ValueKey {
        match self {
            Value::Number { value, .. } => ValueKey::Number(order_bits(*value)),
            Value::Text(s) => ValueKey::Text(s.clone()),
            Value::Missing => ValueKey::Missing,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number { raw, .. } => write!(f, "{}", raw),
            Value::Text(s) => write!(f, "{}", s),
            Value::Missing => Ok(()),
        }
    }
}

impl From<Value> for String {
    fn from(value: Value) -> Self {
        value.to_string()
    }
}

/// An orderable, hashable stand-in for a `Value` used as a grouping key.
///
/// Numbers compare by numeric value (so "100" and "100.0" collide), text by
/// ordinal string comparison. The derived `Ord` places numbers before text
/// and missing cells last, which fixes the summary's row traversal order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKey {
    /// A finite or infinite float, encoded so `u64` order matches numeric order
    Number(u64),
    /// Exact text
    Text(String),
    /// Empty cell
    Missing,
}

/// Map a float to a `u64` whose unsigned order matches numeric order.
/// Negative zero is folded into positive zero first so the two group together.
fn order_bits(value: f64) -> u64 {
    let value = if value == 0.0 { 0.0 } else { value };
    let bits = value.to_bits();
    if bits >> 63 == 1 {
        !bits
    } else {
        bits | (1 << 63)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_keeps_raw() {
        let v = Value::parse("0.010");
        assert!(v.is_number());
        assert_eq!(v.to_string(), "0.010");
    }

    #[test]
    fn test_parse_text() {
        let v = Value::parse("adam");
        assert!(!v.is_number());
        assert_eq!(v.to_string(), "adam");
    }

    #[test]
    fn test_parse_missing() {
        assert!(Value::parse("").is_missing());
        assert!(Value::parse("   ").is_missing());
        assert!(Value::parse("NaN").is_missing());
    }

    #[test]
    fn test_numeric_keys_compare_by_value() {
        assert_eq!(Value::parse("100").key(), Value::parse("100.0").key());
        assert_ne!(Value::parse("100").key(), Value::parse("200").key());
    }

    #[test]
    fn test_negative_zero_groups_with_zero() {
        assert_eq!(Value::parse("0").key(), Value::parse("-0.0").key());
    }

    #[test]
    fn test_key_ordering() {
        let neg = Value::parse("-1.5").key();
        let zero = Value::parse("0").key();
        let big = Value::parse("200").key();
        let text = Value::parse("cfgA").key();
        assert!(neg < zero);
        assert!(zero < big);
        assert!(big < text);
        assert!(text < ValueKey::Missing);
    }

    #[test]
    fn test_text_keys_are_case_sensitive() {
        assert_ne!(Value::parse("Adam").key(), Value::parse("adam").key());
    }

    #[test]
    fn test_display_missing_is_empty() {
        assert_eq!(Value::Missing.to_string(), "");
    }
}
