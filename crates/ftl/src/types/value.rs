use chrono::{DateTime, Utc};

use super::{DateTimeValue, NumberValue};
use crate::resolver::MessageContext;

/// A runtime value produced and consumed by the resolver.
///
/// The set is closed: every expression resolves to exactly one of these
/// variants, and external arguments are converted on insertion via the
/// `From` implementations below.
///
/// # Example
///
/// ```
/// use ftl::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Alice".into();
/// assert!(count.as_number().is_some());
/// assert_eq!(name.as_str(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A raw string: literal fragments and string-typed arguments.
    String(String),

    /// A numeric value with formatting options.
    Number(NumberValue),

    /// A wall-clock instant with formatting options.
    DateTime(DateTimeValue),

    /// An identifier used for matching variant keys.
    Keyword(String),

    /// The "no value" sentinel; formats as the hint or `"???"`.
    None { hint: Option<String> },

    /// An un-joined sequence of fragments produced by pattern resolution,
    /// kept flat so a parent pattern can measure and splice it without
    /// double-joining.
    Parts(Vec<Value>),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<&NumberValue> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Get this value as a date-time, if it is one.
    pub fn as_date_time(&self) -> Option<&DateTimeValue> {
        match self {
            Value::DateTime(d) => Some(d),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Check whether this is the "no value" sentinel.
    pub fn is_no_value(&self) -> bool {
        matches!(self, Value::None { .. })
    }

    /// Non-negative integral numbers as `usize`, for option merging.
    pub(crate) fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Number(n) if n.value >= 0.0 && n.value.fract() == 0.0 => Some(n.value as usize),
            _ => None,
        }
    }

    /// Format this value to its final string using the context's formatters.
    pub fn format(&self, ctx: &MessageContext) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Number(n) => ctx.number_format(&n.options).format(n),
            Value::DateTime(d) => ctx.date_time_format(&d.options).format(d),
            Value::Keyword(name) => name.clone(),
            Value::None { hint } => hint.clone().unwrap_or_else(|| "???".to_string()),
            Value::Parts(parts) => parts.iter().map(|part| part.format(ctx)).collect(),
        }
    }

    /// Check whether this variant key value accepts `selector`.
    ///
    /// Keyword keys match keyword and string selectors by equality. A number
    /// selector matches a keyword key when the keyword equals either the
    /// number's textual form or its plural category in the context's locale.
    /// Number keys match number selectors by numeric equality.
    pub fn matches(&self, ctx: &MessageContext, selector: &Value) -> bool {
        match (self, selector) {
            (Value::Keyword(key), Value::Keyword(sel) | Value::String(sel)) => key == sel,
            (Value::Keyword(key), Value::Number(sel)) => {
                key == &sel.source || key.as_str() == ctx.plural_category(sel)
            }
            (Value::Number(key), Value::Number(sel)) => key.value == sel.value,
            _ => false,
        }
    }
}

// From implementations for the accepted external argument kinds.

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(NumberValue::new(f64::from(n)))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(NumberValue::new(n as f64))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(NumberValue::new(f64::from(n)))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(NumberValue::new(n as f64))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(NumberValue::new(n as f64))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(NumberValue::new(f64::from(n)))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(NumberValue::new(n))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Value::DateTime(DateTimeValue::new(instant))
    }
}

impl From<NumberValue> for Value {
    fn from(n: NumberValue) -> Self {
        Value::Number(n)
    }
}

impl From<DateTimeValue> for Value {
    fn from(d: DateTimeValue) -> Self {
        Value::DateTime(d)
    }
}
