//! The pieces a resource specifier is built from: bindings and components.

use std::fmt;

/// The separator preceding a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// `.` — the next component must be the immediately following level.
    Tight,
    /// `*` — zero or more intervening levels are permitted.
    Loose,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Tight => write!(f, "."),
            Binding::Loose => write!(f, "*"),
        }
    }
}

/// One element of a resource specifier: a name or a wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentKind {
    /// A literal identifier, e.g. `Xft` or `foreground`.
    Name(String),
    /// `?` — matches exactly one component of any name.
    Wildcard,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Name(name) => write!(f, "{name}"),
            ComponentKind::Wildcard => write!(f, "?"),
        }
    }
}

/// A binding paired with the component it introduces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub binding: Binding,
    pub kind: ComponentKind,
}

impl Component {
    pub fn name(binding: Binding, name: impl Into<String>) -> Self {
        Component {
            binding,
            kind: ComponentKind::Name(name.into()),
        }
    }

    pub fn wildcard(binding: Binding) -> Self {
        Component {
            binding,
            kind: ComponentKind::Wildcard,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.kind, ComponentKind::Wildcard)
    }

    /// The literal name, or `None` for a wildcard.
    pub fn as_name(&self) -> Option<&str> {
        match &self.kind {
            ComponentKind::Name(name) => Some(name),
            ComponentKind::Wildcard => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.binding, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_tight_name() {
        let c = Component::name(Binding::Tight, "foo");
        assert_eq!(c.to_string(), ".foo");
    }

    #[test]
    fn displays_loose_wildcard() {
        let c = Component::wildcard(Binding::Loose);
        assert_eq!(c.to_string(), "*?");
    }

    #[test]
    fn as_name_is_none_for_wildcard() {
        assert_eq!(Component::wildcard(Binding::Tight).as_name(), None);
        assert_eq!(
            Component::name(Binding::Tight, "bar").as_name(),
            Some("bar")
        );
    }
}
