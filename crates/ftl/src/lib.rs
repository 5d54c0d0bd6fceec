pub mod parser;
pub mod resolver;
pub mod types;

pub use parser::{ParseError, parse_resource};
pub use resolver::{MessageContext, MessageFunction, ResolverError, compute_suggestions};
pub use types::{DateTimeOptions, DateTimeValue, NumberOptions, NumberValue, Value};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or date-times directly.
///
/// # Example
///
/// ```
/// use ftl::args;
///
/// let args = args! { "count" => 3, "name" => "Alice" };
/// assert_eq!(args.len(), 2);
/// assert!(args["count"].as_number().is_some());
/// assert_eq!(args["name"].as_str(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
