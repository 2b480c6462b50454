//! Integration tests exercising the public API end to end: the concrete
//! precedence scenarios, plus round-trip and merge invariants.

use xrm::{Database, Query};

#[test]
fn tight_binding_beats_loose_binding_at_equal_rank() {
    let db = Database::from_text("xterm*foreground: white\n*foreground: black\n");
    let query = Query::parse("xterm.vt100.foreground", Some("XTerm.VT100.Foreground")).unwrap();
    assert_eq!(db.lookup(&query), Some("white"));
}

#[test]
fn name_match_beats_class_match_at_the_same_position() {
    let db = Database::from_text("xterm.foreground: by-name\nXTerm.foreground: by-class\n");
    let query = Query::parse("xterm.foreground", Some("XTerm.Foreground")).unwrap();
    assert_eq!(db.lookup(&query), Some("by-name"));
}

#[test]
fn unrelated_entries_do_not_affect_an_unambiguous_lookup() {
    let db = Database::from_text(
        "Xft.dpi: 96\nXft.hinting: true\nXft.antialias: true\n*background: white\n",
    );
    let query = Query::parse("Xft.dpi", None).unwrap();
    assert_eq!(db.lookup(&query), Some("96"));
}

#[test]
fn strict_load_surfaces_every_bad_line_with_its_number() {
    let mut db = Database::new();
    let report = db.load_strict("Xft.dpi: 96\nbogus\n*ok: 1\n: also bogus\n");
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].line, 2);
    assert_eq!(report.failures[1].line, 4);
    assert_eq!(db.len(), 2);
}

#[test]
fn combine_is_order_preserving_when_nothing_conflicts() {
    let base = Database::from_text("a: 1\nb: 2\n");
    let overlay = Database::from_text("c: 3\n");
    let combined = base.combine(overlay, true);
    let names: Vec<&str> = combined.entries().iter().map(|e| e.value()).collect();
    assert_eq!(names, vec!["1", "2", "3"]);
}

#[test]
fn put_resource_handles_values_needing_escaping() {
    let mut db = Database::new();
    db.put_resource("greeting", " hello\nworld").unwrap();
    let query = Query::parse("greeting", None).unwrap();
    assert_eq!(db.lookup(&query), Some(" hello\nworld"));
}

#[test]
fn serialized_form_reloads_to_an_equivalent_database() {
    let original = Database::from_text(
        "xterm*foreground: white\n*foreground: black\nFoo.?.baz: mid\n",
    );
    let text = original.to_string();
    let reloaded = Database::from_text(&text);
    assert_eq!(original, reloaded);
}

#[test]
fn no_match_returns_none_rather_than_erroring() {
    let db = Database::from_text("xterm.foreground: white\n");
    let query = Query::parse("xterm.background", None).unwrap();
    assert_eq!(db.lookup(&query), None);
}
