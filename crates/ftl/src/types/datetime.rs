use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Value;

/// A date-time runtime value: a wall-clock instant plus format options.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeValue {
    pub instant: DateTime<Utc>,
    pub options: DateTimeOptions,
}

impl DateTimeValue {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            options: DateTimeOptions::default(),
        }
    }
}

/// Formatting options carried by a [`DateTimeValue`].
///
/// `pattern` is a strftime-style format string passed via
/// `DATETIME($d, pattern: "...")`; when absent the instant renders as
/// RFC 3339.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTimeOptions {
    pub pattern: Option<String>,
}

impl DateTimeOptions {
    /// Merge named call arguments into these options.
    pub fn merge(&mut self, named: &HashMap<String, Value>) {
        if let Some(pattern) = named.get("pattern").and_then(Value::as_str) {
            self.pattern = Some(pattern.to_string());
        }
    }
}
