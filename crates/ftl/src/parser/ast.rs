//! Runtime entry tree consumed by the resolver.
//!
//! These types are public to enable external tooling (linters, dump
//! utilities, etc.). The parser produces them; the resolver only reads them.

use serde::{Deserialize, Serialize};

/// A message or term installed in a context: an optional value pattern plus
/// zero or more named attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The main value, absent for attribute-only entries.
    pub value: Option<Pattern>,
    /// Attributes in declaration order. Lookup is first-match by name.
    pub attributes: Vec<Attribute>,
}

impl Entry {
    /// Find an attribute pattern by name, in declaration order.
    pub fn attribute(&self, name: &str) -> Option<&Pattern> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }

    /// If this entry's value is a variant list (a pattern whose single
    /// element is a selector-less select expression), return its variants
    /// and the default index.
    pub fn variant_list(&self) -> Option<(&[Variant], usize)> {
        let pattern = self.value.as_ref()?;
        if let [PatternElement::Placeable(Expr::Select {
            selector: None,
            variants,
            default,
        })] = pattern.elements.as_slice()
        {
            Some((variants.as_slice(), *default))
        } else {
            None
        }
    }
}

/// A named attribute of an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Pattern,
}

/// An ordered sequence of literal text fragments and placeables.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub elements: Vec<PatternElement>,
}

/// One element of a pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternElement {
    /// Literal text, emitted verbatim.
    Text(String),
    /// An expression whose resolved value is interpolated.
    Placeable(Expr),
}

/// An expression inside a placeable.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A quoted string literal.
    StringLiteral(String),
    /// A decimal number literal; the textual form is retained so formatting
    /// options can be applied without re-deriving precision.
    NumberLiteral(String),
    /// A reference to another message by id.
    MessageRef(String),
    /// A reference to an external argument: `$name`.
    ExternalArg(String),
    /// An attribute of a referenced message: `id.name`.
    AttributeRef { id: String, name: String },
    /// An explicit variant of a referenced message: `id[key]`.
    VariantRef { id: String, key: VariantKey },
    /// A bare reference to a function by name.
    FunctionRef(String),
    /// A function call with positional and named arguments.
    Call { function: String, args: Vec<Argument> },
    /// Selection among variants. A variant list is a `Select` with no
    /// selector; exactly one variant is the default.
    Select {
        selector: Option<Box<Expr>>,
        variants: Vec<Variant>,
        default: usize,
    },
}

/// A call argument, positional or named.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Positional(Expr),
    Named { name: String, value: Expr },
}

/// A `(key, value)` pair inside a select expression or variant list.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub key: VariantKey,
    pub value: Pattern,
}

/// A variant key: a keyword or a number literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantKey {
    Keyword(String),
    Number(String),
}

impl std::fmt::Display for VariantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantKey::Keyword(name) => write!(f, "{name}"),
            VariantKey::Number(source) => write!(f, "{source}"),
        }
    }
}
