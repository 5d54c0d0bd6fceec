//! Message context: owner of a locale, the installed messages, the function
//! registry, and the formatter cache.

use std::collections::HashMap;
use std::rc::Rc;

use bon::Builder;

use crate::parser::ast::{Entry, Pattern};
use crate::parser::parse_resource;
use crate::resolver::error::ResolverError;
use crate::resolver::evaluator::{Scope, resolve_pattern};
use crate::resolver::memoizer::{DateTimeFormat, IntlMemoizer, NumberFormat, category_name};
use crate::types::{DateTimeOptions, NumberOptions, NumberValue, Value};

/// A function callable from `FUNC(...)` expressions.
///
/// Receives the resolved positional arguments in source order and the named
/// arguments, and returns a runtime value.
pub type MessageFunction = Box<dyn Fn(&[Value], &HashMap<String, Value>) -> Value>;

/// A localization context holding the messages of a single locale.
///
/// The context is long-lived: messages and functions are installed up
/// front, then `format` is called repeatedly. Formatting is best-effort and
/// never fails; resolution problems are appended to the caller's error
/// list while the output falls back to sensible placeholders.
///
/// # Example
///
/// ```
/// use ftl::MessageContext;
///
/// let mut ctx = MessageContext::builder()
///     .locale("en-US")
///     .use_isolating(false)
///     .build();
/// ctx.add_messages("hello = Hello, { $name }!");
///
/// let args = ftl::args! { "name" => "Rust" };
/// let mut errors = Vec::new();
/// let value = ctx.format("hello", Some(&args), &mut errors);
/// assert_eq!(value.as_deref(), Some("Hello, Rust!"));
/// assert!(errors.is_empty());
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct MessageContext {
    /// BCP-47 locale tag driving plural selection and formatting.
    #[builder(default = "en-US".to_string())]
    locale: String,

    /// Wrap interpolated values in Unicode bidi isolates (FSI/PDI).
    #[builder(default = true)]
    use_isolating: bool,

    /// Installed entries by id. Re-installing an id overwrites it.
    #[builder(skip)]
    messages: HashMap<String, Entry>,

    /// User-supplied functions; these shadow built-ins of the same name.
    #[builder(skip)]
    functions: HashMap<String, MessageFunction>,

    /// Memoized locale-sensitive formatters.
    #[builder(skip)]
    intl: IntlMemoizer,
}

impl Default for MessageContext {
    fn default() -> Self {
        MessageContext::builder().build()
    }
}

impl MessageContext {
    /// Create a context for the given locale with default settings.
    pub fn new(locale: impl Into<String>) -> Self {
        MessageContext::builder().locale(locale.into()).build()
    }

    /// The context's locale tag.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether placeables are wrapped in bidi isolates.
    pub fn use_isolating(&self) -> bool {
        self.use_isolating
    }

    // =========================================================================
    // Installation
    // =========================================================================

    /// Parse a resource and install its entries, overwriting duplicates.
    ///
    /// Syntax errors are returned; well-formed entries from the same source
    /// are still installed.
    pub fn add_messages(&mut self, source: &str) -> Vec<ResolverError> {
        let (entries, errors) = parse_resource(source);
        for (id, entry) in entries {
            self.messages.insert(id, entry);
        }
        errors.into_iter().map(ResolverError::from).collect()
    }

    /// Register a user function callable from `FUNC(...)` expressions.
    ///
    /// A user function shadows a built-in of the same name.
    pub fn add_function<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&[Value], &HashMap<String, Value>) -> Value + 'static,
    {
        self.functions.insert(name.into(), Box::new(function));
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Check whether a message with the given id is installed.
    pub fn has_message(&self, id: &str) -> bool {
        self.messages.contains_key(id)
    }

    /// Get an installed entry by id.
    pub fn get_message(&self, id: &str) -> Option<&Entry> {
        self.messages.get(id)
    }

    /// Iterate over the installed message ids.
    pub fn message_ids(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub(crate) fn function(&self, name: &str) -> Option<&MessageFunction> {
        self.functions.get(name)
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Format a message by path: a message id, or `id.attr` for an
    /// attribute.
    ///
    /// Returns `None` without appending errors when the path does not name
    /// an installed entry, or when the entry has no value (attribute-only
    /// messages referenced directly).
    pub fn format(
        &self,
        path: &str,
        args: Option<&HashMap<String, Value>>,
        errors: &mut Vec<ResolverError>,
    ) -> Option<String> {
        if let Some(pos) = path.find('.') {
            let id = &path[..pos];
            let entry = self.messages.get(id)?;
            let pattern = entry.attribute(&path[pos + 1..])?;
            Some(self.format_pattern(pattern, args, errors))
        } else {
            let entry = self.messages.get(path)?;
            self.format_entry(entry, args, errors)
        }
    }

    /// Format an entry's value. Returns `None` when the entry has no value.
    pub fn format_entry(
        &self,
        entry: &Entry,
        args: Option<&HashMap<String, Value>>,
        errors: &mut Vec<ResolverError>,
    ) -> Option<String> {
        let pattern = entry.value.as_ref()?;
        Some(self.format_pattern(pattern, args, errors))
    }

    /// Format a single pattern.
    pub fn format_pattern(
        &self,
        pattern: &Pattern,
        args: Option<&HashMap<String, Value>>,
        errors: &mut Vec<ResolverError>,
    ) -> String {
        let mut scope = Scope::new(self, args, errors);
        let value = resolve_pattern(&mut scope, pattern);
        value.format(self)
    }

    // =========================================================================
    // Formatter access
    // =========================================================================

    pub(crate) fn number_format(&self, options: &NumberOptions) -> Rc<NumberFormat> {
        self.intl.number_format(options)
    }

    pub(crate) fn date_time_format(&self, options: &DateTimeOptions) -> Rc<DateTimeFormat> {
        self.intl.date_time_format(options)
    }

    /// CLDR plural category name of a number in this context's locale.
    pub(crate) fn plural_category(&self, number: &NumberValue) -> &'static str {
        let rules = self.intl.plural_rules(&self.locale);
        category_name(rules.category_for(number.as_i64()))
    }
}
