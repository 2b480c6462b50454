//! A parser, store, and pattern-matching engine for X-style resource
//! databases: the specifier grammar of `.Xdefaults`/`.Xresources`, the
//! tight/loose/wildcard precedence rules used to resolve a query against a
//! database, and the escape codec for values.

pub mod component;
pub mod database;
pub mod entry;
pub mod error;
pub mod escape;
pub mod matcher;
pub mod parser;
pub mod query;

pub use database::{Database, LoadFailure, LoadReport};
pub use entry::Entry;
pub use error::{XrmError, XrmResult};
pub use query::Query;

pub mod prelude {
    pub use crate::component::{Binding, Component, ComponentKind};
    pub use crate::database::{Database, LoadFailure, LoadReport};
    pub use crate::entry::Entry;
    pub use crate::error::{XrmError, XrmResult};
    pub use crate::query::Query;
}
