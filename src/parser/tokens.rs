//! Low-level character-class combinators shared by the entry and query
//! grammars.

use crate::component::{Binding, Component, ComponentKind};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    combinator::{map, value},
    IResult,
};

/// Horizontal whitespace (spaces and tabs), zero or more.
pub fn ws0(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c == ' ' || c == '\t')(input)
}

/// A single binding character: `.` (tight) or `*` (loose).
pub fn parse_binding(input: &str) -> IResult<&str, Binding> {
    alt((
        value(Binding::Tight, tag(".")),
        value(Binding::Loose, tag("*")),
    ))(input)
}

/// A bare identifier: `[A-Za-z0-9_-]+`.
pub fn parse_identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')(input)
}

/// A component kind: a name, or the `?` wildcard.
pub fn parse_component_kind(input: &str) -> IResult<&str, ComponentKind> {
    alt((
        value(ComponentKind::Wildcard, tag("?")),
        map(parse_identifier, |s: &str| ComponentKind::Name(s.to_string())),
    ))(input)
}

/// A component kind restricted to names only — used by the query grammar,
/// which never admits wildcards.
pub fn parse_name_only(input: &str) -> IResult<&str, ComponentKind> {
    map(parse_identifier, |s: &str| ComponentKind::Name(s.to_string()))(input)
}

/// A bound component: an explicit binding followed by its component.
pub fn parse_bound_component(input: &str) -> IResult<&str, Component> {
    let (input, binding) = parse_binding(input)?;
    let (input, kind) = parse_component_kind(input)?;
    Ok((input, Component { binding, kind }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifier() {
        assert_eq!(parse_identifier("foo-bar_1 rest"), (" rest", "foo-bar_1"));
    }

    #[test]
    fn parses_binding_chars() {
        assert_eq!(parse_binding(".x").unwrap().1, Binding::Tight);
        assert_eq!(parse_binding("*x").unwrap().1, Binding::Loose);
        assert!(parse_binding("x").is_err());
    }

    #[test]
    fn parses_wildcard_component() {
        assert_eq!(parse_component_kind("?").unwrap().1, ComponentKind::Wildcard);
    }
}
