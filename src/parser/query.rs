//! The query grammar: a dotted sequence of plain names, no bindings other
//! than the implicit tight one, no wildcards.

use crate::component::{Binding, Component};
use crate::error::XrmError;
use crate::parser::tokens::parse_name_only;

/// Parse a dotted component string (e.g. `"xterm.vt100.foreground"`) into the
/// canonical component sequence the matcher consumes.
///
/// Fails on empty strings, wildcards (`?`), empty inter-dot segments, or
/// illegal characters.
pub fn parse_query_components(input: &str) -> Result<Vec<Component>, XrmError> {
    if input.is_empty() {
        return Err(XrmError::malformed("query component string is empty"));
    }
    if input.contains('?') {
        return Err(XrmError::malformed(
            "query name contains a wildcard, which is not permitted",
        ));
    }

    let mut components = Vec::new();
    for segment in input.split('.') {
        if segment.is_empty() {
            return Err(XrmError::malformed(
                "query contains an empty component between dots",
            ));
        }
        let (rest, kind) = parse_name_only(segment)
            .map_err(|_| XrmError::malformed(format!("illegal character in '{segment}'")))?;
        if !rest.is_empty() {
            return Err(XrmError::malformed(format!(
                "illegal character in '{segment}'"
            )));
        }
        components.push(Component {
            binding: Binding::Tight,
            kind,
        });
    }

    debug_assert!(components.iter().all(|c| !c.is_wildcard()));
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_components() {
        let c = parse_query_components("xterm.vt100.foreground").unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(c[0].as_name(), Some("xterm"));
    }

    #[test]
    fn rejects_empty_string() {
        assert!(parse_query_components("").is_err());
    }

    #[test]
    fn rejects_wildcard() {
        assert!(parse_query_components("Foo.?.baz").is_err());
    }

    #[test]
    fn rejects_empty_segment() {
        assert!(parse_query_components("Foo..baz").is_err());
    }

    #[test]
    fn rejects_illegal_character() {
        assert!(parse_query_components("Foo.b@z").is_err());
    }
}
