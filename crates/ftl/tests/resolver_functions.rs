//! Integration tests for built-in and user-supplied functions.

use chrono::{TimeZone, Utc};
use ftl::{MessageContext, NumberValue, Value, args};

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
// NUMBER
// =============================================================================

#[test]
fn number_with_minimum_fraction_digits() {
    let ctx = context("amount = { NUMBER($num, minimumFractionDigits: 2) }");
    let args = args! { "num" => 3 };
    let mut errors = Vec::new();
    let value = ctx.format("amount", Some(&args), &mut errors);
    assert_eq!(value.as_deref(), Some("3.00"));
    assert!(errors.is_empty());
}

#[test]
fn number_with_maximum_fraction_digits() {
    let ctx = context("amount = { NUMBER($num, maximumFractionDigits: 2) }");
    let args = args! { "num" => 0.1234 };
    let mut errors = Vec::new();
    let value = ctx.format("amount", Some(&args), &mut errors);
    assert_eq!(value.as_deref(), Some("0.12"));
}

#[test]
fn bare_number_literal_preserves_textual_form() {
    let ctx = context("half = { 0.50 }");
    let mut errors = Vec::new();
    let value = ctx.format("half", None, &mut errors);
    assert_eq!(value.as_deref(), Some("0.50"));
}

#[test]
fn number_of_number_literal() {
    let ctx = context("two = { NUMBER(2, minimumFractionDigits: 1) }");
    let mut errors = Vec::new();
    let value = ctx.format("two", None, &mut errors);
    assert_eq!(value.as_deref(), Some("2.0"));
}

#[test]
fn number_result_participates_in_selection() {
    let ctx = context("n = { NUMBER($n) -> [one] one *[other] other }");
    let mut errors = Vec::new();
    let one = args! { "n" => 1 };
    assert_eq!(ctx.format("n", Some(&one), &mut errors).as_deref(), Some("one"));
    let two = args! { "n" => 2 };
    assert_eq!(ctx.format("n", Some(&two), &mut errors).as_deref(), Some("other"));
    assert!(errors.is_empty());
}

#[test]
fn number_without_argument_renders_hint() {
    let ctx = context("bad = { NUMBER() }");
    let mut errors = Vec::new();
    let value = ctx.format("bad", None, &mut errors);
    assert_eq!(value.as_deref(), Some("NUMBER()"));
    assert!(errors.is_empty());
}

// =============================================================================
// DATETIME
// =============================================================================

#[test]
fn datetime_default_rendering() {
    let ctx = context("when = { DATETIME($d) }");
    let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
    let args = args! { "d" => instant };
    let mut errors = Vec::new();
    let value = ctx.format("when", Some(&args), &mut errors);
    assert_eq!(value.as_deref(), Some("2024-01-15T12:30:00+00:00"));
    assert!(errors.is_empty());
}

#[test]
fn datetime_with_pattern() {
    let ctx = context(r#"when = { DATETIME($d, pattern: "%Y-%m-%d") }"#);
    let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
    let args = args! { "d" => instant };
    let mut errors = Vec::new();
    let value = ctx.format("when", Some(&args), &mut errors);
    assert_eq!(value.as_deref(), Some("2024-01-15"));
}

#[test]
fn datetime_argument_formats_without_call() {
    let ctx = context("when = { $d }");
    let instant = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    let args = args! { "d" => instant };
    let mut errors = Vec::new();
    let value = ctx.format("when", Some(&args), &mut errors);
    assert_eq!(value.as_deref(), Some("2024-01-15T00:00:00+00:00"));
}

// =============================================================================
// User functions
// =============================================================================

#[test]
fn user_function() {
    let mut ctx = MessageContext::builder().use_isolating(false).build();
    ctx.add_messages(r#"len = { STRLEN("12345") }"#);
    ctx.add_function("STRLEN", |positional, _named| match positional {
        [Value::String(s)] => Value::Number(NumberValue::new(s.chars().count() as f64)),
        _ => Value::None { hint: None },
    });

    let mut errors = Vec::new();
    let value = ctx.format("len", None, &mut errors);
    assert_eq!(value.as_deref(), Some("5"));
    assert!(errors.is_empty());
}

#[test]
fn user_function_shadows_builtin() {
    let mut ctx = MessageContext::builder().use_isolating(false).build();
    ctx.add_messages("n = { NUMBER(3) }");
    ctx.add_function("NUMBER", |_positional, _named| Value::from("overridden"));

    let mut errors = Vec::new();
    let value = ctx.format("n", None, &mut errors);
    assert_eq!(value.as_deref(), Some("overridden"));
}

#[test]
fn function_arguments_resolve_references() {
    let mut ctx = MessageContext::builder().use_isolating(false).build();
    ctx.add_messages("inner = nested\nouter = { ECHO(inner) }");
    ctx.add_function("ECHO", |positional, _named| {
        positional.first().cloned().unwrap_or(Value::None { hint: None })
    });

    let mut errors = Vec::new();
    let value = ctx.format("outer", None, &mut errors);
    assert_eq!(value.as_deref(), Some("nested"));
    assert!(errors.is_empty());
}
