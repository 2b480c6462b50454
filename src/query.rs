//! `Query`: a fully qualified lookup key.

use crate::component::Component;
use crate::error::XrmError;
use crate::parser::query::parse_query_components;

/// A pair of parallel component sequences, `name` and an optional `class`,
/// of equal length N ≥ 1. Queries contain only plain name components: no
/// wildcards, no loose bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub(crate) name: Vec<Component>,
    pub(crate) class: Option<Vec<Component>>,
}

impl Query {
    /// Parse a dotted `name` and optional dotted `class` into a `Query`.
    pub fn parse(name: &str, class: Option<&str>) -> Result<Query, XrmError> {
        let name = parse_query_components(name)?;
        let class = match class {
            Some(class) => Some(parse_query_components(class)?),
            None => None,
        };

        if let Some(class) = &class {
            if class.len() != name.len() {
                return Err(XrmError::LengthMismatch {
                    name_len: name.len(),
                    class_len: class.len(),
                });
            }
        }

        Ok(Query { name, class })
    }

    pub fn len(&self) -> usize {
        self.name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    pub fn name(&self) -> &[Component] {
        &self.name
    }

    pub fn class(&self) -> Option<&[Component]> {
        self.class.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_only() {
        let q = Query::parse("Xft.dpi", None).unwrap();
        assert_eq!(q.len(), 2);
        assert!(q.class().is_none());
    }

    #[test]
    fn parses_name_and_class() {
        let q = Query::parse("xterm.foreground", Some("XTerm.Foreground")).unwrap();
        assert_eq!(q.class().unwrap().len(), 2);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = Query::parse("a.b", Some("X")).unwrap_err();
        assert!(matches!(err, XrmError::LengthMismatch { name_len: 2, class_len: 1 }));
    }

    #[test]
    fn rejects_wildcard_in_name() {
        assert!(Query::parse("a.?", None).is_err());
    }
}
