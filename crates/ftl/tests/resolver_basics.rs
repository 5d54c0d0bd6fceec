//! Integration tests for basic message formatting.

use ftl::{MessageContext, ResolverError, args};

fn context(source: &str) -> MessageContext {
    let mut ctx = MessageContext::builder()
        .locale("en-US")
        .use_isolating(false)
        .build();
    let errors = ctx.add_messages(source);
    assert!(errors.is_empty(), "unexpected install errors: {errors:?}");
    ctx
}

// =============================================================================
// Literals and references
// =============================================================================

#[test]
fn simple_literal() {
    let ctx = context("foo = Foo");
    let mut errors = Vec::new();
    let value = ctx.format("foo", None, &mut errors);
    assert_eq!(value.as_deref(), Some("Foo"));
    assert!(errors.is_empty());
}

#[test]
fn message_reference() {
    let ctx = context("foo = Foo\nbar = { foo } Bar");
    let mut errors = Vec::new();
    let value = ctx.format("bar", None, &mut errors);
    assert_eq!(value.as_deref(), Some("Foo Bar"));
    assert!(errors.is_empty());
}

#[test]
fn nested_references() {
    let ctx = context("a = A\nb = { a } B\nc = { b } C");
    let mut errors = Vec::new();
    let value = ctx.format("c", None, &mut errors);
    assert_eq!(value.as_deref(), Some("A B C"));
    assert!(errors.is_empty());
}

#[test]
fn multiline_value() {
    let ctx = context("foo = Foo\n    continues here");
    let mut errors = Vec::new();
    let value = ctx.format("foo", None, &mut errors);
    assert_eq!(value.as_deref(), Some("Foo\ncontinues here"));
}

// =============================================================================
// External arguments
// =============================================================================

#[test]
fn string_argument() {
    let ctx = context("hello = Hello, { $name }!");
    let args = args! { "name" => "World" };
    let mut errors = Vec::new();
    let value = ctx.format("hello", Some(&args), &mut errors);
    assert_eq!(value.as_deref(), Some("Hello, World!"));
    assert!(errors.is_empty());
}

#[test]
fn number_argument() {
    let ctx = context("count = Count: { $n }");
    let args = args! { "n" => 42 };
    let mut errors = Vec::new();
    let value = ctx.format("count", Some(&args), &mut errors);
    assert_eq!(value.as_deref(), Some("Count: 42"));
}

#[test]
fn float_argument() {
    let ctx = context("ratio = Ratio: { $r }");
    let args = args! { "r" => 0.5 };
    let mut errors = Vec::new();
    let value = ctx.format("ratio", Some(&args), &mut errors);
    assert_eq!(value.as_deref(), Some("Ratio: 0.5"));
}

// =============================================================================
// Attributes
// =============================================================================

#[test]
fn null_value_with_attribute() {
    let ctx = context("foo\n  .attr = Foo Attr");
    let mut errors = Vec::new();

    // Formatting the entry itself yields no value and no errors.
    let value = ctx.format("foo", None, &mut errors);
    assert_eq!(value, None);
    assert!(errors.is_empty());

    // The attribute formats on its own.
    let attr = ctx.format("foo.attr", None, &mut errors);
    assert_eq!(attr.as_deref(), Some("Foo Attr"));
    assert!(errors.is_empty());
}

#[test]
fn attribute_reference_in_pattern() {
    let ctx = context("login = Sign in\n  .tooltip = Click to sign in\nhelp = { login.tooltip }");
    let mut errors = Vec::new();
    let value = ctx.format("help", None, &mut errors);
    assert_eq!(value.as_deref(), Some("Click to sign in"));
    assert!(errors.is_empty());
}

#[test]
fn attribute_of_value_message() {
    let ctx = context("login = Predefined value\n  .title = Type your login email");
    let mut errors = Vec::new();
    assert_eq!(
        ctx.format("login", None, &mut errors).as_deref(),
        Some("Predefined value")
    );
    assert_eq!(
        ctx.format("login.title", None, &mut errors).as_deref(),
        Some("Type your login email")
    );
}

// =============================================================================
// Context behavior
// =============================================================================

#[test]
fn unknown_path_returns_none_without_errors() {
    let ctx = context("foo = Foo");
    let mut errors = Vec::new();
    assert_eq!(ctx.format("missing", None, &mut errors), None);
    assert_eq!(ctx.format("foo.missing", None, &mut errors), None);
    assert!(errors.is_empty());
}

#[test]
fn duplicate_installation_overwrites() {
    let mut ctx = MessageContext::builder().use_isolating(false).build();
    ctx.add_messages("foo = First");
    ctx.add_messages("foo = Second");
    let mut errors = Vec::new();
    assert_eq!(ctx.format("foo", None, &mut errors).as_deref(), Some("Second"));
}

#[test]
fn has_message_and_ids() {
    let ctx = context("foo = Foo\nbar = Bar");
    assert!(ctx.has_message("foo"));
    assert!(!ctx.has_message("baz"));
    let mut ids: Vec<&str> = ctx.message_ids().collect();
    ids.sort_unstable();
    assert_eq!(ids, ["bar", "foo"]);
}

#[test]
fn formatting_is_idempotent() {
    let ctx = context("foo = { missing } and { $also_missing }");

    let mut first_errors: Vec<ResolverError> = Vec::new();
    let first = ctx.format("foo", None, &mut first_errors);
    let mut second_errors: Vec<ResolverError> = Vec::new();
    let second = ctx.format("foo", None, &mut second_errors);

    assert_eq!(first, second);
    assert_eq!(first_errors, second_errors);
    assert_eq!(first_errors.len(), 2);
}

#[test]
fn error_list_is_append_only() {
    let ctx = context("foo = Foo\nbad = { missing }");
    let mut errors = Vec::new();
    ctx.format("bad", None, &mut errors);
    assert_eq!(errors.len(), 1);

    // A successful format never removes prior errors.
    let value = ctx.format("foo", None, &mut errors);
    assert_eq!(value.as_deref(), Some("Foo"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn install_reports_syntax_errors_but_keeps_good_entries() {
    let mut ctx = MessageContext::builder().use_isolating(false).build();
    let errors = ctx.add_messages("foo = Foo\nbad ? garbage\nbar = Bar");
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ResolverError::Syntax { line: 2, .. }));
    assert!(ctx.has_message("foo"));
    assert!(ctx.has_message("bar"));
    assert!(!ctx.has_message("bad"));
}
