//! The full entry grammar: bindings, components, and a value.
//!
//! ```text
//! entry   := ws? binding component (binding component)* ws? ':' ws? value
//! binding := '.' | '*'
//! component := name | '?'
//! name    := [A-Za-z0-9_-]+
//! value   := <characters up to end-of-line, with escapes>
//! ```

use crate::component::{Binding, Component, ComponentKind};
use crate::entry::Entry;
use crate::error::XrmError;
use crate::escape::decode_value;
use crate::parser::tokens::{parse_binding, parse_bound_component, parse_component_kind, ws0};

/// One classified logical line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A parsed resource entry.
    Entry(Entry),
    /// `#include "path"` — the quoted path, verbatim.
    Include(String),
    /// A `!`-prefixed comment line.
    Comment,
    /// An empty or whitespace-only line.
    Blank,
}

/// Classify and, where applicable, parse one logical line.
pub fn classify_line(raw: &str) -> Result<Line, XrmError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Line::Blank);
    }
    if trimmed.starts_with('!') {
        return Ok(Line::Comment);
    }
    if let Some(rest) = trimmed.strip_prefix("#include") {
        return parse_include(rest).map(Line::Include);
    }
    parse_entry(raw).map(Line::Entry)
}

fn parse_include(rest: &str) -> Result<String, XrmError> {
    let rest = rest.trim();
    let rest = rest
        .strip_prefix('"')
        .ok_or_else(|| XrmError::malformed("include directive missing opening quote"))?;
    let end = rest
        .find('"')
        .ok_or_else(|| XrmError::malformed("include directive missing closing quote"))?;
    Ok(rest[..end].to_string())
}

/// Parse a full entry: specifier + value.
pub fn parse_entry(raw: &str) -> Result<Entry, XrmError> {
    let (input, _) = ws0(raw).unwrap();

    let (mut input, first) = parse_first_component(input)?;
    let mut components = vec![first];

    loop {
        match parse_binding(input) {
            Ok((rest, binding)) => {
                let (rest, kind) = parse_component_kind(rest).map_err(|_| {
                    XrmError::malformed("entry ends with a binding and no component")
                })?;
                components.push(Component { binding, kind });
                input = rest;
            }
            Err(_) => break,
        }
    }

    let (input, _) = ws0(input).unwrap();
    let input = input
        .strip_prefix(':')
        .ok_or_else(|| XrmError::malformed("the ':' separator is absent"))?;
    let (input, _) = ws0(input).unwrap();

    Ok(Entry::new(components, decode_value(input)))
}

fn parse_first_component(input: &str) -> Result<(&str, Component), XrmError> {
    if let Ok((rest, component)) = parse_bound_component(input) {
        return Ok((rest, component));
    }

    // No explicit leading binding: the leading binding defaults to tight if
    // the line begins directly with a component character.
    match parse_component_kind(input) {
        Ok((rest, kind)) => Ok((
            rest,
            Component {
                binding: Binding::Tight,
                kind,
            },
        )),
        Err(_) => Err(XrmError::malformed("no components found")),
    }
}
