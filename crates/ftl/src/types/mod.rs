mod datetime;
mod number;
mod value;

pub use datetime::{DateTimeOptions, DateTimeValue};
pub use number::{NumberOptions, NumberValue};
pub use value::Value;
