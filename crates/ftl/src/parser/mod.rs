//! Parser producing the runtime entry tree consumed by the resolver.

pub mod ast;
mod error;
mod resource;

pub use error::ParseError;
pub use resource::parse_resource;
