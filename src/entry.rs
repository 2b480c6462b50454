//! The `Entry` type: a resource specifier paired with a value.

use crate::component::Component;
use crate::escape::encode_value;
use std::fmt;

/// An ordered, non-empty sequence of components followed by a string value.
///
/// The value is stored already unescaped (in-memory decoded form); escapes
/// are only re-applied when serializing (see `encode_value`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) components: Vec<Component>,
    pub(crate) value: String,
}

impl Entry {
    /// Build an entry from components and an already-decoded value.
    ///
    /// Panics if `components` is empty — the grammar guarantees entries
    /// always carry at least one component, so an empty sequence reaching
    /// here indicates a bug in the caller (the parser never produces one).
    pub fn new(components: Vec<Component>, value: impl Into<String>) -> Self {
        assert!(!components.is_empty(), "entry must have at least one component");
        Entry {
            components,
            value: value.into(),
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace this entry's value, preserving its specifier.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Structural specifier equality: same sequence of bindings and
    /// components, byte-for-byte. This is the equality `Database::put` and
    /// `combine` use to decide whether two entries collide.
    pub fn same_specifier(&self, other: &Entry) -> bool {
        self.components == other.components
    }

    /// Render the specifier (everything but the value) the way it would
    /// appear in serialized text.
    pub fn specifier_string(&self) -> String {
        let mut out = String::new();
        for (i, c) in self.components.iter().enumerate() {
            if i == 0 {
                // The leading binding is only written explicitly when loose;
                // tight is the default and is omitted.
                if c.binding == crate::component::Binding::Loose {
                    out.push('*');
                }
            } else {
                out.push_str(&c.binding.to_string());
            }
            out.push_str(&c.kind.to_string());
        }
        out
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.specifier_string(), encode_value(&self.value))
    }
}
