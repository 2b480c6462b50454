//! `Database`: an ordered collection of entries.

use crate::entry::Entry;
use crate::error::XrmResult;
use crate::matcher::best_match;
use crate::parser::entry::{classify_line, parse_entry, Line};
use crate::query::Query;
use std::fmt;

/// One rejected line recorded by `Database::load_strict`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    /// 1-based line number within the text passed to `load`/`load_strict`.
    pub line: usize,
    pub error: String,
}

/// The diagnostic report produced by `Database::load_strict`: every line
/// `Database::from_text`/`Database::load` would have silently swallowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// An ordered sequence of entries, preserving insertion order.
///
/// No two entries share the same structural specifier (`Entry::same_specifier`);
/// `put` and `combine` are the only ways to enforce that invariant when
/// mutating, and they do so by replacing in place rather than appending a
/// duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    entries: Vec<Entry>,
}

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Database>();
};

impl Database {
    /// An empty database.
    pub fn new() -> Database {
        Database { entries: Vec::new() }
    }

    /// Parse `text` and load every entry it contains.
    ///
    /// Per-line parse failures are swallowed (logged via `tracing::warn!`),
    /// matching legacy Xlib behavior: a single malformed line must not
    /// invalidate the rest of the database. Use `load_strict` to see what
    /// was swallowed.
    pub fn from_text(text: &str) -> Database {
        let mut db = Database::new();
        db.load(text);
        db
    }

    /// Load more entries from `text` into an existing database, swallowing
    /// per-line parse failures as `from_text` does.
    pub fn load(&mut self, text: &str) {
        let report = self.load_strict(text);
        for failure in &report.failures {
            tracing::warn!(line = failure.line, error = %failure.error, "skipping malformed resource line");
        }
    }

    /// Load `text` into this database, returning a report of every line that
    /// was rejected instead of only logging it.
    ///
    /// Successful entries are appended exactly as `load` would append them;
    /// this is additive, not an alternative set of semantics.
    pub fn load_strict(&mut self, text: &str) -> LoadReport {
        let mut report = LoadReport::default();

        for (offset, raw_line) in split_logical_lines(text).into_iter().enumerate() {
            let line_no = offset + 1;
            match classify_line(&raw_line) {
                Ok(Line::Entry(entry)) => self.put(entry),
                Ok(Line::Include(_) | Line::Comment | Line::Blank) => {}
                Err(err) => report.failures.push(LoadFailure {
                    line: line_no,
                    error: err.to_string(),
                }),
            }
        }

        tracing::debug!(
            entries = self.entries.len(),
            rejected = report.failures.len(),
            "loaded resource database"
        );
        report
    }

    /// Append `entry`, unless an entry with the identical specifier already
    /// exists, in which case its value is replaced in place.
    pub fn put(&mut self, entry: Entry) {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.same_specifier(&entry))
        {
            existing.set_value(entry.value().to_string());
        } else {
            self.entries.push(entry);
        }
    }

    /// Parse `line` as a full entry and `put` it.
    pub fn put_line(&mut self, line: &str) -> XrmResult<()> {
        let entry = parse_entry(line)?;
        self.put(entry);
        Ok(())
    }

    /// Parse `specifier` alone, decode `value`, and `put` the result.
    pub fn put_resource(&mut self, specifier: &str, value: &str) -> XrmResult<()> {
        let mut line = String::with_capacity(specifier.len() + value.len() + 2);
        line.push_str(specifier);
        line.push_str(": ");
        line.push_str(&crate::escape::encode_value(value));
        self.put_line(&line)
    }

    /// Merge `other`'s entries into `self`, in order, and return `self`.
    ///
    /// For each entry of `other`: if its specifier already exists in `self`
    /// and `override_existing` is true, `self`'s value is replaced; if it
    /// exists and `override_existing` is false, the entry is discarded; if
    /// it does not exist, it is appended.
    pub fn combine(mut self, other: Database, override_existing: bool) -> Database {
        for entry in other.entries {
            let existing = self.entries.iter_mut().find(|e| e.same_specifier(&entry));
            match existing {
                Some(existing) if override_existing => {
                    existing.set_value(entry.value().to_string());
                }
                Some(_) => {}
                None => self.entries.push(entry),
            }
        }
        self
    }

    /// The entries, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Find the best-matching entry for `query` and return its value.
    pub fn lookup(&self, query: &Query) -> Option<&str> {
        best_match(self, query).map(|idx| self.entries[idx].value())
    }

    /// Serialize in insertion order, one entry per line. Comments and
    /// include directives are never preserved across load/store.
    pub fn to_string(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Split raw text into logical lines, folding a trailing `\` + newline into
/// the following line (line continuations).
fn split_logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for raw in text.lines() {
        if let Some(stripped) = raw.strip_suffix('\\') {
            current.push_str(stripped);
            continue;
        }
        current.push_str(raw);
        lines.push(std::mem::take(&mut current));
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_loads_entries_and_skips_bad_lines() {
        let db = Database::from_text("Xft.dpi: 96\nnot an entry\n*bg: black\n");
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn load_strict_reports_the_rejected_line() {
        let mut db = Database::new();
        let report = db.load_strict("Xft.dpi: 96\n: nope\n");
        assert_eq!(db.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].line, 2);
    }

    #[test]
    fn put_replaces_identical_specifier_in_place() {
        let mut db = Database::new();
        db.put_line("a.b: 1").unwrap();
        db.put_line("a.b: 2").unwrap();
        assert_eq!(db.len(), 1);
        assert_eq!(db.entries()[0].value(), "2");
    }

    #[test]
    fn combine_with_override_replaces_conflicting_entries() {
        let a = Database::from_text("a.b: old\nc.d: keep\n");
        let b = Database::from_text("a.b: new\ne.f: added\n");
        let combined = a.combine(b, true);
        assert_eq!(combined.len(), 3);
        assert_eq!(
            combined.entries().iter().find(|e| e.specifier_string() == "a.b").unwrap().value(),
            "new"
        );
    }

    #[test]
    fn combine_without_override_discards_conflicting_entries() {
        let a = Database::from_text("a.b: old\n");
        let b = Database::from_text("a.b: new\n");
        let combined = a.combine(b, false);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined.entries()[0].value(), "old");
    }

    #[test]
    fn to_string_then_from_text_round_trips() {
        let original = Database::from_text("Xft.dpi: 96\n*foreground: black\n");
        let reloaded = Database::from_text(&original.to_string());
        assert_eq!(original, reloaded);
    }

    #[test]
    fn leading_space_value_round_trips_through_text_form() {
        let mut db = Database::new();
        db.put_resource("Foo.bar", " hello").unwrap();
        let reloaded = Database::from_text(&db.to_string());
        let query = Query::parse("Foo.bar", None).unwrap();
        assert_eq!(reloaded.lookup(&query), Some(" hello"));
    }

    #[test]
    fn include_and_comment_lines_are_skipped_without_error() {
        let report = Database::new().load_strict("! a comment\n#include \"x\"\n\nXft.dpi: 96\n");
        assert!(report.is_clean());
    }

    #[test]
    fn line_continuation_is_folded() {
        let db = Database::from_text("Xft.dpi: \\\n96\n");
        let query = Query::parse("Xft.dpi", None).unwrap();
        assert_eq!(db.lookup(&query), Some("96"));
    }

    #[test]
    fn empty_database_lookup_is_none() {
        let db = Database::new();
        let query = Query::parse("anything", None).unwrap();
        assert_eq!(db.lookup(&query), None);
    }
}
