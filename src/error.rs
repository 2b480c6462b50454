//! Error types for the resource database.

use thiserror::Error;

/// The one error type surfaced anywhere in this crate's public API.
#[derive(Debug, Error)]
pub enum XrmError {
    /// A line could not be parsed as an entry or a query.
    #[error("malformed specifier: {detail}")]
    MalformedSpecifier {
        /// What specifically was wrong with the input.
        detail: String,
    },

    /// A query's name and class component sequences differ in length.
    #[error("query name has {name_len} components but class has {class_len}")]
    LengthMismatch {
        name_len: usize,
        class_len: usize,
    },

    /// A lookup matched no entry.
    ///
    /// `Database::lookup` itself returns `Option<&str>` rather than this
    /// variant; it exists so a collaborator that wants a uniformly
    /// `Result`-shaped surface can map `None` onto it.
    #[error("no entry matched the query")]
    NotFound,

    /// Reserved for collaborators built on top of this crate (filesystem
    /// loaders, transport layers). The core never constructs this variant,
    /// since it performs no I/O itself.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for XrmError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                XrmError::MalformedSpecifier { detail: a },
                XrmError::MalformedSpecifier { detail: b },
            ) => a == b,
            (
                XrmError::LengthMismatch {
                    name_len: a1,
                    class_len: a2,
                },
                XrmError::LengthMismatch {
                    name_len: b1,
                    class_len: b2,
                },
            ) => a1 == b1 && a2 == b2,
            (XrmError::NotFound, XrmError::NotFound) => true,
            (XrmError::Io(a), XrmError::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

impl XrmError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        XrmError::MalformedSpecifier {
            detail: detail.into(),
        }
    }
}

pub type XrmResult<T> = Result<T, XrmError>;
