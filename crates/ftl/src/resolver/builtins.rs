//! Built-in formatting functions.
//!
//! The built-in registry is a fixed enum with static dispatch. User-supplied
//! functions registered on the context shadow built-ins of the same name.

use std::collections::HashMap;

use crate::types::Value;

/// Built-in functions callable from `FUNC(...)` expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    /// `NUMBER` - wrap the first positional argument as a number, merging
    /// formatting options from named arguments.
    Number,
    /// `DATETIME` - same for date-times.
    DateTime,
}

impl Builtin {
    /// Look up a built-in by its call name.
    pub(crate) fn lookup(name: &str) -> Option<Self> {
        match name {
            "NUMBER" => Some(Builtin::Number),
            "DATETIME" => Some(Builtin::DateTime),
            _ => None,
        }
    }

    /// Invoke the built-in.
    ///
    /// A `None` argument propagates unchanged; a missing or mistyped
    /// argument yields the sentinel with the call name as hint.
    pub(crate) fn call(self, positional: &[Value], named: &HashMap<String, Value>) -> Value {
        match self {
            Builtin::Number => number(positional, named),
            Builtin::DateTime => datetime(positional, named),
        }
    }
}

fn number(positional: &[Value], named: &HashMap<String, Value>) -> Value {
    match positional.first() {
        Some(Value::Number(n)) => {
            let mut n = n.clone();
            n.options.merge(named);
            Value::Number(n)
        }
        Some(none @ Value::None { .. }) => none.clone(),
        _ => Value::None {
            hint: Some("NUMBER()".to_string()),
        },
    }
}

fn datetime(positional: &[Value], named: &HashMap<String, Value>) -> Value {
    match positional.first() {
        Some(Value::DateTime(d)) => {
            let mut d = d.clone();
            d.options.merge(named);
            Value::DateTime(d)
        }
        Some(none @ Value::None { .. }) => none.clone(),
        _ => Value::None {
            hint: Some("DATETIME()".to_string()),
        },
    }
}
