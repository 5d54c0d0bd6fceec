//! FTL resource parser.
//!
//! Parses localization resources into the runtime entry tree. Parsing is
//! error-recovering at entry granularity: each top-level entry block is
//! parsed independently, so one malformed entry is reported and skipped
//! without discarding the rest of the resource.

use super::ast::{Argument, Attribute, Entry, Expr, Pattern, PatternElement, Variant, VariantKey};
use super::error::ParseError;
use winnow::combinator::repeat;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// Parse an entire resource.
///
/// Returns the well-formed entries in declaration order together with one
/// syntax error per malformed entry block.
pub fn parse_resource(source: &str) -> (Vec<(String, Entry)>, Vec<ParseError>) {
    let mut entries = Vec::new();
    let mut errors = Vec::new();

    for block in blocks(source) {
        match parse_entry_block(&block.text) {
            Ok(parsed) => entries.push(parsed),
            Err(e) => errors.push(offset_error(e, block.line)),
        }
    }

    (entries, errors)
}

/// Shift a block-relative error to its position in the full source.
fn offset_error(e: ParseError, block_line: usize) -> ParseError {
    match e {
        ParseError::Syntax {
            line,
            column,
            message,
        } => ParseError::Syntax {
            line: block_line + line - 1,
            column,
            message,
        },
        ParseError::UnexpectedEof { line, column } => ParseError::UnexpectedEof {
            line: block_line + line - 1,
            column,
        },
    }
}

/// A top-level entry block with its starting line in the source.
struct Block {
    line: usize,
    text: String,
}

/// Group source lines into entry blocks.
///
/// A block starts at an unindented line and extends over following indented
/// lines. Brace depth is tracked so multi-line placeables stay in one block
/// even when a closing brace sits at column zero. Blank lines and `#`
/// comments separate blocks.
fn blocks(source: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut current: Option<Block> = None;
    let mut depth: i64 = 0;

    for (index, line) in source.lines().enumerate() {
        if depth == 0 {
            if line.trim().is_empty() || line.starts_with('#') {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                continue;
            }
            if !line.starts_with([' ', '\t']) || current.is_none() {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                current = Some(Block {
                    line: index + 1,
                    text: String::new(),
                });
            }
        }
        depth = (depth + brace_depth_delta(line)).max(0);
        if let Some(block) = current.as_mut() {
            if !block.text.is_empty() {
                block.text.push('\n');
            }
            block.text.push_str(line);
        }
    }
    if let Some(block) = current.take() {
        blocks.push(block);
    }
    blocks
}

/// Net brace depth change of one line, ignoring braces inside string
/// literals. String literals never span lines.
fn brace_depth_delta(line: &str) -> i64 {
    let mut delta = 0;
    let mut in_string = false;
    let mut escaped = false;
    for c in line.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => delta += 1,
            '}' if !in_string => delta -= 1,
            _ => {}
        }
    }
    delta
}

/// Parse one entry block, mapping failures to block-relative errors. A
/// parse that fails with the whole block consumed (an unterminated
/// placeable or string literal) is an unexpected end of input.
fn parse_entry_block(text: &str) -> Result<(String, Entry), ParseError> {
    let mut remaining = text;
    match entry(&mut remaining) {
        Ok(parsed) => {
            if remaining.trim().is_empty() {
                Ok(parsed)
            } else {
                let (line, column) = calculate_position(text, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.trim_start().chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(text, remaining);
            if remaining.is_empty() {
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!("parse error: {e}"),
                })
            }
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse an entry: `id (= pattern)? attribute*`.
fn entry(input: &mut &str) -> ModalResult<(String, Entry)> {
    let id = identifier(input)?;
    inline_ws(input)?;

    let value = if input.starts_with('=') {
        let _ = '='.parse_next(input)?;
        inline_ws(input)?;
        let value = pattern(input)?;
        if value.elements.is_empty() {
            None
        } else {
            Some(value)
        }
    } else {
        None
    };

    let attributes: Vec<Attribute> = repeat(0.., attribute).parse_next(input)?;

    // An entry must carry a value or at least one attribute.
    if value.is_none() && attributes.is_empty() {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }

    Ok((id, Entry { value, attributes }))
}

/// Parse an attribute line: `.name = pattern`, indented under the entry.
fn attribute(input: &mut &str) -> ModalResult<Attribute> {
    let checkpoint = *input;
    multiline_ws(input)?;
    if !input.starts_with('.') {
        *input = checkpoint;
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    let _ = '.'.parse_next(input)?;
    let name = identifier(input)?;
    inline_ws(input)?;
    let _ = '='.parse_next(input)?;
    inline_ws(input)?;
    let value = pattern(input)?;
    Ok(Attribute { name, value })
}

/// Parse a pattern: literal text and placeables up to the end of the entry
/// value. A newline ends the pattern unless the next line is indented
/// continuation text; continuation lines join with a newline.
fn pattern(input: &mut &str) -> ModalResult<Pattern> {
    let mut elements: Vec<PatternElement> = Vec::new();
    loop {
        if input.is_empty() {
            break;
        }
        if input.starts_with('{') {
            let expr = placeable(input)?;
            elements.push(PatternElement::Placeable(expr));
            continue;
        }
        if input.starts_with('\n') {
            let indented = input[1..].starts_with([' ', '\t']);
            let next = input[1..].trim_start_matches([' ', '\t']);
            if !indented || next.is_empty() || next.starts_with('.') {
                break;
            }
            let _ = '\n'.parse_next(input)?;
            inline_ws(input)?;
            elements.push(PatternElement::Text("\n".to_string()));
            continue;
        }
        let text: &str = take_while(1.., |c: char| c != '{' && c != '\n').parse_next(input)?;
        elements.push(PatternElement::Text(text.to_string()));
    }
    Ok(Pattern {
        elements: finish_pattern(elements),
    })
}

/// Merge adjacent text elements, trim trailing whitespace, and strip a
/// leading line break left by a value that starts on a continuation line.
fn finish_pattern(elements: Vec<PatternElement>) -> Vec<PatternElement> {
    let mut merged: Vec<PatternElement> = Vec::with_capacity(elements.len());
    for element in elements {
        match element {
            PatternElement::Text(text) => {
                if let Some(PatternElement::Text(prev)) = merged.last_mut() {
                    prev.push_str(&text);
                } else {
                    merged.push(PatternElement::Text(text));
                }
            }
            other @ PatternElement::Placeable(_) => merged.push(other),
        }
    }
    let mut drop_last = false;
    if let Some(PatternElement::Text(last)) = merged.last_mut() {
        let kept = last.trim_end().len();
        last.truncate(kept);
        drop_last = last.is_empty();
    }
    if drop_last {
        merged.pop();
    }
    let mut drop_first = false;
    if let Some(PatternElement::Text(first)) = merged.first_mut() {
        if first.starts_with('\n') {
            let trimmed = first.trim_start().to_string();
            *first = trimmed;
            drop_first = first.is_empty();
        }
    }
    if drop_first {
        merged.remove(0);
    }
    merged
}

/// Parse a placeable: `{ expression }`, `{ expression -> variants }`, or a
/// bare variant list `{ *[key] ... }`.
fn placeable(input: &mut &str) -> ModalResult<Expr> {
    let _ = '{'.parse_next(input)?;
    multiline_ws(input)?;

    let expr = if input.starts_with('[') || input.starts_with("*[") {
        let (variants, default) = variants(input)?;
        Expr::Select {
            selector: None,
            variants,
            default,
        }
    } else {
        let primary = expression(input)?;
        multiline_ws(input)?;
        if input.starts_with("->") {
            let _ = "->".parse_next(input)?;
            multiline_ws(input)?;
            let (variants, default) = variants(input)?;
            Expr::Select {
                selector: Some(Box::new(primary)),
                variants,
                default,
            }
        } else {
            primary
        }
    };

    multiline_ws(input)?;
    let _ = '}'.parse_next(input)?;
    Ok(expr)
}

/// Parse variants: `*? [key] pattern` repeated. Exactly one variant must be
/// marked as the default.
fn variants(input: &mut &str) -> ModalResult<(Vec<Variant>, usize)> {
    let mut variants = Vec::new();
    let mut default = None;
    loop {
        multiline_ws(input)?;
        let is_default = if input.starts_with("*[") {
            let _ = '*'.parse_next(input)?;
            true
        } else if input.starts_with('[') {
            false
        } else {
            break;
        };
        let _ = '['.parse_next(input)?;
        inline_ws(input)?;
        let key = variant_key(input)?;
        inline_ws(input)?;
        let _ = ']'.parse_next(input)?;
        inline_ws(input)?;
        let value = variant_pattern(input)?;

        if is_default {
            if default.is_some() {
                // at most one default per select
                return Err(ErrMode::Backtrack(ContextError::new()));
            }
            default = Some(variants.len());
        }
        variants.push(Variant { key, value });
    }

    match default {
        Some(default) => Ok((variants, default)),
        // a select without a default cannot fall through
        None => Err(ErrMode::Backtrack(ContextError::new())),
    }
}

/// Parse a variant key: a number or a keyword.
fn variant_key(input: &mut &str) -> ModalResult<VariantKey> {
    if input.starts_with(|c: char| c.is_ascii_digit()) || input.starts_with('-') {
        number_source(input).map(VariantKey::Number)
    } else {
        identifier(input).map(VariantKey::Keyword)
    }
}

/// Parse a variant's value pattern. The pattern ends before the next
/// variant key, the closing brace, or a line break followed by either.
fn variant_pattern(input: &mut &str) -> ModalResult<Pattern> {
    let mut elements: Vec<PatternElement> = Vec::new();
    loop {
        if input.is_empty()
            || input.starts_with('}')
            || input.starts_with('[')
            || input.starts_with("*[")
        {
            break;
        }
        if input.starts_with('{') {
            let expr = placeable(input)?;
            elements.push(PatternElement::Placeable(expr));
            continue;
        }
        if input.starts_with('\n') {
            let next = input[1..].trim_start_matches([' ', '\t']);
            if next.is_empty()
                || next.starts_with('}')
                || next.starts_with('[')
                || next.starts_with("*[")
            {
                break;
            }
            let _ = '\n'.parse_next(input)?;
            inline_ws(input)?;
            elements.push(PatternElement::Text("\n".to_string()));
            continue;
        }
        elements.push(PatternElement::Text(variant_text(input)?));
    }
    Ok(Pattern {
        elements: finish_pattern(elements),
    })
}

/// Take a run of plain variant text, stopping at structural characters.
fn variant_text(input: &mut &str) -> ModalResult<String> {
    let mut len = 0;
    let mut chars = input.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        match c {
            '{' | '}' | '[' | '\n' => break,
            '*' if matches!(chars.peek(), Some((_, '['))) => break,
            _ => len = index + c.len_utf8(),
        }
    }
    if len == 0 {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    let text = input[..len].to_string();
    *input = &input[len..];
    Ok(text)
}

/// Parse an expression inside a placeable.
fn expression(input: &mut &str) -> ModalResult<Expr> {
    if input.starts_with('"') {
        return string_literal(input).map(Expr::StringLiteral);
    }
    if input.starts_with(|c: char| c.is_ascii_digit())
        || (input.starts_with('-') && input[1..].starts_with(|c: char| c.is_ascii_digit()))
    {
        return number_source(input).map(Expr::NumberLiteral);
    }
    if input.starts_with('$') {
        let _ = '$'.parse_next(input)?;
        return identifier(input).map(Expr::ExternalArg);
    }

    let name = identifier(input)?;

    if input.starts_with('(') {
        if !is_function_name(&name) {
            // call syntax is reserved for function names
            return Err(ErrMode::Backtrack(ContextError::new()));
        }
        let args = call_args(input)?;
        return Ok(Expr::Call {
            function: name,
            args,
        });
    }
    if input.starts_with('.') {
        let _ = '.'.parse_next(input)?;
        let attr = identifier(input)?;
        return Ok(Expr::AttributeRef {
            id: name,
            name: attr,
        });
    }
    if input.starts_with('[') {
        let _ = '['.parse_next(input)?;
        inline_ws(input)?;
        let key = variant_key(input)?;
        inline_ws(input)?;
        let _ = ']'.parse_next(input)?;
        return Ok(Expr::VariantRef { id: name, key });
    }
    if is_function_name(&name) {
        return Ok(Expr::FunctionRef(name));
    }
    Ok(Expr::MessageRef(name))
}

/// Parse call arguments: `( arg, name: value, ... )`.
fn call_args(input: &mut &str) -> ModalResult<Vec<Argument>> {
    let _ = '('.parse_next(input)?;
    multiline_ws(input)?;
    let mut args = Vec::new();
    if !input.starts_with(')') {
        loop {
            args.push(call_arg(input)?);
            multiline_ws(input)?;
            if input.starts_with(',') {
                let _ = ','.parse_next(input)?;
                multiline_ws(input)?;
            } else {
                break;
            }
        }
    }
    let _ = ')'.parse_next(input)?;
    Ok(args)
}

/// Parse a single call argument, named (`name: value`) or positional.
fn call_arg(input: &mut &str) -> ModalResult<Argument> {
    let checkpoint = *input;
    if input.starts_with(is_ident_start) {
        let name = identifier(input)?;
        inline_ws(input)?;
        if input.starts_with(':') {
            let _ = ':'.parse_next(input)?;
            multiline_ws(input)?;
            let value = expression(input)?;
            return Ok(Argument::Named { name, value });
        }
        *input = checkpoint;
    }
    expression(input).map(Argument::Positional)
}

/// Parse a string literal: `"text"` with escape support for `\"` and `\\`.
fn string_literal(input: &mut &str) -> ModalResult<String> {
    let _ = '"'.parse_next(input)?;
    let mut result = String::new();
    loop {
        match any.parse_next(input)? {
            '"' => break,
            '\\' => {
                let escaped = any.parse_next(input)?;
                match escaped {
                    '"' => result.push('"'),
                    '\\' => result.push('\\'),
                    other => {
                        result.push('\\');
                        result.push(other);
                    }
                }
            }
            c => result.push(c),
        }
    }
    Ok(result)
}

/// Parse a decimal number, retaining its textual form.
fn number_source(input: &mut &str) -> ModalResult<String> {
    let start = *input;
    if input.starts_with('-') {
        let _ = '-'.parse_next(input)?;
    }
    let _: &str = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    if input.starts_with('.') && input[1..].starts_with(|c: char| c.is_ascii_digit()) {
        let _ = '.'.parse_next(input)?;
        let _: &str = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    }
    let consumed = start.len() - input.len();
    Ok(start[..consumed].to_string())
}

/// Parse an identifier. A trailing `-` is left unconsumed when it would
/// form a `->` arrow so selects work without a space before the arrow.
fn identifier(input: &mut &str) -> ModalResult<String> {
    let mut chars = input.char_indices().peekable();
    let mut len = match chars.next() {
        Some((_, c)) if is_ident_start(c) => c.len_utf8(),
        _ => return Err(ErrMode::Backtrack(ContextError::new())),
    };
    while let Some((index, c)) = chars.next() {
        if !is_ident_cont(c) || (c == '-' && matches!(chars.peek(), Some((_, '>')))) {
            break;
        }
        len = index + c.len_utf8();
    }
    let name = input[..len].to_string();
    *input = &input[len..];
    Ok(name)
}

/// Function names are upper-case identifiers, e.g. `NUMBER`.
fn is_function_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Skip spaces and tabs.
fn inline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., [' ', '\t']).void().parse_next(input)
}

/// Skip all whitespace including newlines.
fn multiline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(source: &str) -> (String, Entry) {
        let (mut entries, errors) = parse_resource(source);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(entries.len(), 1);
        entries.remove(0)
    }

    #[test]
    fn literal_entry() {
        let (id, entry) = single("foo = Foo");
        assert_eq!(id, "foo");
        let value = entry.value.expect("entry should have a value");
        assert_eq!(value.elements, vec![PatternElement::Text("Foo".to_string())]);
    }

    #[test]
    fn placeable_reference() {
        let (_, entry) = single("bar = { foo } Bar");
        let value = entry.value.expect("entry should have a value");
        assert_eq!(
            value.elements,
            vec![
                PatternElement::Placeable(Expr::MessageRef("foo".to_string())),
                PatternElement::Text(" Bar".to_string()),
            ]
        );
    }

    #[test]
    fn attribute_only_entry() {
        let (_, entry) = single("foo\n  .attr = Foo Attr");
        assert!(entry.value.is_none());
        assert_eq!(entry.attributes.len(), 1);
        assert_eq!(entry.attributes[0].name, "attr");
    }

    #[test]
    fn value_and_attributes() {
        let (_, entry) = single("login = Predefined value\n  .title = Hi!\n  .tooltip = Tip");
        assert!(entry.value.is_some());
        assert_eq!(entry.attributes.len(), 2);
        assert!(entry.attribute("tooltip").is_some());
        assert!(entry.attribute("missing").is_none());
    }

    #[test]
    fn inline_select() {
        let (_, entry) = single("foo = { 1 -> *[one] A [other] B }");
        let value = entry.value.expect("entry should have a value");
        let [PatternElement::Placeable(Expr::Select {
            selector: Some(selector),
            variants,
            default,
        })] = value.elements.as_slice()
        else {
            panic!("expected a select expression, got {:?}", value.elements);
        };
        assert_eq!(**selector, Expr::NumberLiteral("1".to_string()));
        assert_eq!(variants.len(), 2);
        assert_eq!(*default, 0);
        assert_eq!(variants[0].key, VariantKey::Keyword("one".to_string()));
        assert_eq!(
            variants[0].value.elements,
            vec![PatternElement::Text("A".to_string())]
        );
    }

    #[test]
    fn multiline_select() {
        let (_, entry) = single("foo = { $n ->\n    [one] One thing\n   *[other] { $n } things\n}");
        let value = entry.value.expect("entry should have a value");
        let [PatternElement::Placeable(Expr::Select {
            variants, default, ..
        })] = value.elements.as_slice()
        else {
            panic!("expected a select expression");
        };
        assert_eq!(variants.len(), 2);
        assert_eq!(*default, 1);
        assert_eq!(
            variants[1].value.elements,
            vec![
                PatternElement::Placeable(Expr::ExternalArg("n".to_string())),
                PatternElement::Text(" things".to_string()),
            ]
        );
    }

    #[test]
    fn variant_list() {
        let (_, entry) = single("brand = { *[nom] Firefox [gen] Firefoxa }");
        let (variants, default) = entry.variant_list().expect("expected a variant list");
        assert_eq!(variants.len(), 2);
        assert_eq!(default, 0);
        assert_eq!(variants[1].key, VariantKey::Keyword("gen".to_string()));
    }

    #[test]
    fn variant_reference() {
        let (_, entry) = single("msg = { brand[gen] }");
        let value = entry.value.expect("entry should have a value");
        assert_eq!(
            value.elements,
            vec![PatternElement::Placeable(Expr::VariantRef {
                id: "brand".to_string(),
                key: VariantKey::Keyword("gen".to_string()),
            })]
        );
    }

    #[test]
    fn call_with_named_argument() {
        let (_, entry) = single("size = { NUMBER($num, minimumFractionDigits: 2) }");
        let value = entry.value.expect("entry should have a value");
        let [PatternElement::Placeable(Expr::Call { function, args })] = value.elements.as_slice()
        else {
            panic!("expected a call expression");
        };
        assert_eq!(function, "NUMBER");
        assert_eq!(
            args.as_slice(),
            [
                Argument::Positional(Expr::ExternalArg("num".to_string())),
                Argument::Named {
                    name: "minimumFractionDigits".to_string(),
                    value: Expr::NumberLiteral("2".to_string()),
                },
            ]
        );
    }

    #[test]
    fn string_and_number_literals() {
        let (_, entry) = single(r#"lit = { "raw {text}" } and { -3.14 }"#);
        let value = entry.value.expect("entry should have a value");
        assert_eq!(
            value.elements,
            vec![
                PatternElement::Placeable(Expr::StringLiteral("raw {text}".to_string())),
                PatternElement::Text(" and ".to_string()),
                PatternElement::Placeable(Expr::NumberLiteral("-3.14".to_string())),
            ]
        );
    }

    #[test]
    fn multiline_value_joins_with_newline() {
        let (_, entry) = single("foo = Foo\n    Bar");
        let value = entry.value.expect("entry should have a value");
        assert_eq!(
            value.elements,
            vec![PatternElement::Text("Foo\nBar".to_string())]
        );
    }

    #[test]
    fn value_on_continuation_line() {
        let (_, entry) = single("foo =\n    Bar");
        let value = entry.value.expect("entry should have a value");
        assert_eq!(value.elements, vec![PatternElement::Text("Bar".to_string())]);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let (entries, errors) = parse_resource("# header\n\nfoo = Foo\n\n# trailing\nbar = Bar\n");
        assert!(errors.is_empty());
        let ids: Vec<&str> = entries.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["foo", "bar"]);
    }

    #[test]
    fn malformed_entry_is_skipped_and_reported() {
        let (entries, errors) = parse_resource("foo = Foo\nbad ? garbage\nbar = Bar\n");
        let ids: Vec<&str> = entries.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["foo", "bar"]);
        assert_eq!(errors.len(), 1);
        let (line, _) = errors[0].position();
        assert_eq!(line, 2);
    }

    #[test]
    fn unterminated_placeable_is_unexpected_eof() {
        let (entries, errors) = parse_resource("foo = { bar");
        assert!(entries.is_empty());
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ParseError::UnexpectedEof { .. }));
    }

    #[test]
    fn unterminated_string_literal_is_unexpected_eof() {
        let (entries, errors) = parse_resource(r#"foo = { "abc"#);
        assert!(entries.is_empty());
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ParseError::UnexpectedEof { .. }));
    }

    #[test]
    fn select_without_default_is_an_error() {
        let (entries, errors) = parse_resource("foo = { $n -> [one] A [other] B }");
        assert!(entries.is_empty());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn duplicate_defaults_are_an_error() {
        let (entries, errors) = parse_resource("foo = { $n -> *[one] A *[other] B }");
        assert!(entries.is_empty());
        assert_eq!(errors.len(), 1);
    }
}
