use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Value;

/// A numeric runtime value.
///
/// The textual form of the source literal is retained so `NUMBER(...)` can
/// merge formatting options without losing the author's precision, and so a
/// bare number renders exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberValue {
    pub value: f64,
    pub source: String,
    pub options: NumberOptions,
}

impl NumberValue {
    /// Create a number from a computed value; the textual form is derived.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            source: value.to_string(),
            options: NumberOptions::default(),
        }
    }

    /// Parse a decimal literal, retaining its textual form.
    pub fn parse(source: &str) -> Option<Self> {
        let value = source.parse::<f64>().ok()?;
        Some(Self {
            value,
            source: source.to_string(),
            options: NumberOptions::default(),
        })
    }

    /// Fraction digits visible in the textual form.
    pub(crate) fn visible_fraction_digits(&self) -> usize {
        self.source.split_once('.').map_or(0, |(_, frac)| frac.len())
    }

    /// Truncated integer value, used for plural classification.
    pub(crate) fn as_i64(&self) -> i64 {
        self.value.trunc() as i64
    }
}

/// Formatting options carried by a [`NumberValue`].
///
/// Named arguments to `NUMBER(...)` use the camelCase names
/// `minimumFractionDigits` and `maximumFractionDigits`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberOptions {
    pub minimum_fraction_digits: Option<usize>,
    pub maximum_fraction_digits: Option<usize>,
}

impl NumberOptions {
    /// Merge named call arguments into these options. Unknown names and
    /// non-numeric values are ignored.
    pub fn merge(&mut self, named: &HashMap<String, Value>) {
        if let Some(n) = named.get("minimumFractionDigits").and_then(Value::as_usize) {
            self.minimum_fraction_digits = Some(n);
        }
        if let Some(n) = named.get("maximumFractionDigits").and_then(Value::as_usize) {
            self.maximum_fraction_digits = Some(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_retains_textual_form() {
        let n = NumberValue::parse("0.50").expect("valid literal");
        assert_eq!(n.value, 0.5);
        assert_eq!(n.source, "0.50");
        assert_eq!(n.visible_fraction_digits(), 2);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(NumberValue::parse("1.2.3").is_none());
    }

    #[test]
    fn merge_reads_named_arguments() {
        let mut options = NumberOptions::default();
        let named = HashMap::from([
            ("minimumFractionDigits".to_string(), Value::from(2)),
            ("ignored".to_string(), Value::from("x")),
        ]);
        options.merge(&named);
        assert_eq!(options.minimum_fraction_digits, Some(2));
        assert_eq!(options.maximum_fraction_digits, None);
    }

    #[test]
    fn merge_ignores_non_numeric_values() {
        let mut options = NumberOptions::default();
        let named = HashMap::from([("minimumFractionDigits".to_string(), Value::from("two"))]);
        options.merge(&named);
        assert_eq!(options.minimum_fraction_digits, None);
    }
}
