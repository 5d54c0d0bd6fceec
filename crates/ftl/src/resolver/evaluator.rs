//! The resolver engine.
//!
//! Recursively evaluates patterns and expressions into runtime values. All
//! failures are recorded on the scope's error list and replaced with the
//! closest sensible fallback; resolution never panics and always
//! terminates, bounded by the cycle guard and the placeable length cap.

use std::collections::{HashMap, HashSet};
use std::ptr;

use crate::parser::ast::{Argument, Entry, Expr, Pattern, PatternElement, Variant, VariantKey};
use crate::resolver::builtins::Builtin;
use crate::resolver::context::{MessageContext, MessageFunction};
use crate::resolver::error::{ResolverError, compute_suggestions, format_suggestions};
use crate::types::{NumberValue, Value};

/// Hard cap on the flattened character length a single placeable may
/// contribute.
pub const MAX_PLACEABLE_LENGTH: usize = 2500;

/// First-strong isolate, opening an interpolated value.
pub const FSI: char = '\u{2068}';
/// Pop directional isolate, closing an FSI.
pub const PDI: char = '\u{2069}';

/// Per-call resolution environment.
///
/// A scope lives for one top-level format call: it borrows the context and
/// argument bag, owns the dirty set used for cycle detection, and appends
/// to the caller's error list.
pub(crate) struct Scope<'scope> {
    ctx: &'scope MessageContext,
    args: Option<&'scope HashMap<String, Value>>,
    errors: &'scope mut Vec<ResolverError>,
    /// Pattern nodes currently being resolved, keyed by address. Entries
    /// are owned by the context and immutable during resolution, so the
    /// addresses are stable for the duration of the call.
    dirty: HashSet<usize>,
}

impl<'scope> Scope<'scope> {
    pub(crate) fn new(
        ctx: &'scope MessageContext,
        args: Option<&'scope HashMap<String, Value>>,
        errors: &'scope mut Vec<ResolverError>,
    ) -> Self {
        Self {
            ctx,
            args,
            errors,
            dirty: HashSet::new(),
        }
    }
}

fn no_value(hint: impl Into<String>) -> Value {
    Value::None {
        hint: Some(hint.into()),
    }
}

/// Resolve a pattern into a [`Value::Parts`] list.
///
/// Re-entering a pattern already on the dirty set records one range error
/// and yields the sentinel, making cyclic references terminate with exactly
/// one error per offending pattern node.
pub(crate) fn resolve_pattern(scope: &mut Scope<'_>, pattern: &Pattern) -> Value {
    let identity = ptr::from_ref(pattern) as usize;
    if !scope.dirty.insert(identity) {
        scope
            .errors
            .push(ResolverError::Range("cyclic reference".to_string()));
        return Value::None { hint: None };
    }

    let use_isolating = scope.ctx.use_isolating();
    let mut result: Vec<Value> = Vec::with_capacity(pattern.elements.len());
    for element in &pattern.elements {
        match element {
            PatternElement::Text(text) => result.push(Value::String(text.clone())),
            PatternElement::Placeable(expr) => {
                let value = resolve_expr(scope, expr);
                if use_isolating {
                    result.push(Value::String(FSI.to_string()));
                }
                if let Value::Parts(parts) = value {
                    // A nested pattern: measure, then splice its parts so
                    // the parent joins them without re-isolating each one.
                    let length: usize = parts
                        .iter()
                        .map(|part| part.format(scope.ctx).chars().count())
                        .sum();
                    if length > MAX_PLACEABLE_LENGTH {
                        scope.errors.push(ResolverError::Range(format!(
                            "placeable expands to {length} characters, limit is \
                             {MAX_PLACEABLE_LENGTH}"
                        )));
                        result.push(Value::None { hint: None });
                    } else {
                        result.extend(parts);
                    }
                } else {
                    result.push(value);
                }
                if use_isolating {
                    result.push(Value::String(PDI.to_string()));
                }
            }
        }
    }

    scope.dirty.remove(&identity);
    Value::Parts(result)
}

/// Resolve a single expression into a runtime value.
pub(crate) fn resolve_expr(scope: &mut Scope<'_>, expr: &Expr) -> Value {
    match expr {
        Expr::StringLiteral(s) => Value::String(s.clone()),
        Expr::NumberLiteral(source) => number_literal(scope, source),
        Expr::MessageRef(id) => resolve_message_value(scope, id),
        Expr::ExternalArg(name) => resolve_external(scope, name),
        Expr::AttributeRef { id, name } => resolve_attribute(scope, id, name),
        Expr::VariantRef { id, key } => resolve_variant(scope, id, key),
        Expr::FunctionRef(name) => resolve_function_ref(scope, name),
        Expr::Call { function, args } => resolve_call(scope, function, args),
        Expr::Select {
            selector,
            variants,
            default,
        } => resolve_select(scope, selector.as_deref(), variants, *default),
    }
}

fn number_literal(scope: &mut Scope<'_>, source: &str) -> Value {
    match NumberValue::parse(source) {
        Some(n) => Value::Number(n),
        None => {
            scope
                .errors
                .push(ResolverError::Type(format!("invalid number literal: {source}")));
            Value::None { hint: None }
        }
    }
}

/// Resolve a variant key to its matchable value.
fn key_value(scope: &mut Scope<'_>, key: &VariantKey) -> Value {
    match key {
        VariantKey::Keyword(name) => Value::Keyword(name.clone()),
        VariantKey::Number(source) => number_literal(scope, source),
    }
}

fn unknown_message(ctx: &MessageContext, id: &str) -> ResolverError {
    let mut available: Vec<String> = ctx.message_ids().map(ToString::to_string).collect();
    available.sort();
    let suggestions = compute_suggestions(id, &available);
    ResolverError::Reference(format!(
        "unknown message: {id}{}",
        format_suggestions(&suggestions)
    ))
}

/// Resolve a message reference to the referenced entry's value.
fn resolve_message_value(scope: &mut Scope<'_>, id: &str) -> Value {
    let ctx = scope.ctx;
    match ctx.get_message(id) {
        Some(entry) => resolve_entry_value(scope, id, entry),
        None => {
            scope.errors.push(unknown_message(ctx, id));
            no_value(id)
        }
    }
}

/// Dispatch on an entry's value pattern; a value-less entry yields the
/// sentinel with a range error.
fn resolve_entry_value(scope: &mut Scope<'_>, id: &str, entry: &Entry) -> Value {
    match &entry.value {
        Some(pattern) => resolve_pattern(scope, pattern),
        None => {
            scope
                .errors
                .push(ResolverError::Range(format!("no value: {id}")));
            no_value(id)
        }
    }
}

/// Resolve `id.name`. A missing attribute falls back to the message's main
/// value after recording the reference error, so the fallback's own errors
/// (if any) follow the original one.
fn resolve_attribute(scope: &mut Scope<'_>, id: &str, name: &str) -> Value {
    let ctx = scope.ctx;
    let Some(entry) = ctx.get_message(id) else {
        scope.errors.push(unknown_message(ctx, id));
        return no_value(id);
    };
    if let Some(pattern) = entry.attribute(name) {
        return resolve_pattern(scope, pattern);
    }
    scope.errors.push(ResolverError::Reference(format!(
        "unknown attribute: {id}.{name}"
    )));
    resolve_entry_value(scope, id, entry)
}

/// Resolve `id[key]` against a variant-list message, falling back to the
/// message's default value when the variant is missing or the message is
/// not a variant list.
fn resolve_variant(scope: &mut Scope<'_>, id: &str, key: &VariantKey) -> Value {
    let ctx = scope.ctx;
    let Some(entry) = ctx.get_message(id) else {
        scope.errors.push(unknown_message(ctx, id));
        return no_value(id);
    };
    if let Some((variants, _)) = entry.variant_list() {
        let requested = key_value(scope, key);
        for variant in variants {
            let candidate = key_value(scope, &variant.key);
            if candidate.matches(ctx, &requested) {
                return resolve_pattern(scope, &variant.value);
            }
        }
    }
    scope.errors.push(ResolverError::Reference(format!(
        "unknown variant: {id}[{key}]"
    )));
    resolve_entry_value(scope, id, entry)
}

/// Resolve an external argument from the argument bag.
fn resolve_external(scope: &mut Scope<'_>, name: &str) -> Value {
    let Some(value) = scope.args.and_then(|args| args.get(name)) else {
        scope.errors.push(ResolverError::Reference(format!(
            "unknown external: {name}"
        )));
        return no_value(name);
    };
    match value {
        Value::Parts(_) => {
            scope.errors.push(ResolverError::Type(format!(
                "invalid argument type: {name}"
            )));
            no_value(name)
        }
        other => other.clone(),
    }
}

/// Resolve a bare function reference.
///
/// A callable is not a stringifiable value, so this only performs the
/// lookup for its error effects; the call name doubles as the hint.
fn resolve_function_ref(scope: &mut Scope<'_>, name: &str) -> Value {
    let hint = format!("{name}()");
    if scope.ctx.function(name).is_none() && Builtin::lookup(name).is_none() {
        scope.errors.push(ResolverError::Reference(format!(
            "unknown function: {hint}"
        )));
    }
    Value::None { hint: Some(hint) }
}

/// Resolve a call expression: look up the callee (user functions shadow
/// built-ins), resolve the arguments, invoke.
fn resolve_call(scope: &mut Scope<'_>, function: &str, args: &[Argument]) -> Value {
    enum Callee<'f> {
        User(&'f MessageFunction),
        Builtin(Builtin),
    }

    let ctx = scope.ctx;
    let callee = if let Some(f) = ctx.function(function) {
        Callee::User(f)
    } else if let Some(builtin) = Builtin::lookup(function) {
        Callee::Builtin(builtin)
    } else {
        scope.errors.push(ResolverError::Reference(format!(
            "unknown function: {function}()"
        )));
        return no_value(format!("{function}()"));
    };

    let mut positional = Vec::new();
    let mut named = HashMap::new();
    for arg in args {
        match arg {
            Argument::Positional(expr) => positional.push(resolve_expr(scope, expr)),
            Argument::Named { name, value } => {
                let value = resolve_expr(scope, value);
                named.insert(name.clone(), value);
            }
        }
    }

    match callee {
        Callee::User(f) => f(&positional, &named),
        Callee::Builtin(builtin) => builtin.call(&positional, &named),
    }
}

/// Resolve a select expression.
///
/// No selector means a variant list resolved directly: the default variant
/// wins. A selector resolving to the sentinel picks the default without a
/// second error. Otherwise the first variant whose key matches wins.
fn resolve_select(
    scope: &mut Scope<'_>,
    selector: Option<&Expr>,
    variants: &[Variant],
    default: usize,
) -> Value {
    let Some(selector) = selector else {
        return resolve_default(scope, variants, default);
    };
    let selector = resolve_expr(scope, selector);
    if selector.is_no_value() {
        return resolve_default(scope, variants, default);
    }
    let ctx = scope.ctx;
    for variant in variants {
        let key = key_value(scope, &variant.key);
        if key.matches(ctx, &selector) {
            return resolve_pattern(scope, &variant.value);
        }
    }
    resolve_default(scope, variants, default)
}

fn resolve_default(scope: &mut Scope<'_>, variants: &[Variant], default: usize) -> Value {
    match variants.get(default) {
        Some(variant) => resolve_pattern(scope, &variant.value),
        None => {
            // only reachable with a hand-built tree; the parser requires a default
            scope.errors.push(ResolverError::Range(
                "select expression has no default variant".to_string(),
            ));
            Value::None { hint: None }
        }
    }
}
