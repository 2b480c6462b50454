//! The matching engine: pick the best-matching entry for a query.

use crate::component::{Binding, Component, ComponentKind};
use crate::database::Database;
use crate::entry::Entry;
use crate::query::Query;
use std::cmp::Ordering;
use std::ops::BitOr;

/// Per-position flags recording how an entry aligned against a query.
///
/// The flags are not mutually exclusive — `NAME | PRECEDING_LOOSE` is a
/// common combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchFlags(u8);

impl MatchFlags {
    /// The entry component equaled the query name at this position.
    pub const NAME: MatchFlags = MatchFlags(1 << 0);
    /// The entry component equaled the query class at this position.
    pub const CLASS: MatchFlags = MatchFlags(1 << 1);
    /// The entry component was `?`.
    pub const WILDCARD: MatchFlags = MatchFlags(1 << 2);
    /// The query position was consumed by a loose binding with no literal
    /// entry component.
    pub const SKIPPED: MatchFlags = MatchFlags(1 << 3);
    /// This position was reached across a loose binding.
    pub const PRECEDING_LOOSE: MatchFlags = MatchFlags(1 << 4);

    pub const fn empty() -> Self {
        MatchFlags(0)
    }

    pub fn contains(self, other: MatchFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: MatchFlags) {
        self.0 |= other.0;
    }
}

impl BitOr for MatchFlags {
    type Output = MatchFlags;
    fn bitor(self, rhs: MatchFlags) -> MatchFlags {
        MatchFlags(self.0 | rhs.0)
    }
}

/// The match record built while aligning one entry against a query: one
/// `MatchFlags` per query position.
pub type MatchRecord = Vec<MatchFlags>;

/// Align `entry` against `(name, class)`. Returns the match record on
/// success, or `None` if alignment fails (a tight-binding mismatch, or the
/// entry and query are not both fully consumed at the end).
pub fn align(entry: &Entry, name: &[Component], class: Option<&[Component]>) -> Option<MatchRecord> {
    let n = name.len();
    let components = entry.components();
    let mut record: MatchRecord = vec![MatchFlags::empty(); n];
    let mut j = 0usize;
    let mut i = 0usize;

    while i < n {
        let comp = components.get(j)?;
        match &comp.kind {
            ComponentKind::Wildcard => {
                record[i].insert(MatchFlags::WILDCARD);
                if comp.binding == Binding::Loose {
                    record[i].insert(MatchFlags::PRECEDING_LOOSE);
                }
                j += 1;
                i += 1;
            }
            ComponentKind::Name(entry_name) => {
                let name_matches = name[i].as_name() == Some(entry_name.as_str());
                let class_matches = class
                    .map(|c| c[i].as_name() == Some(entry_name.as_str()))
                    .unwrap_or(false);

                if name_matches {
                    record[i].insert(MatchFlags::NAME);
                    if comp.binding == Binding::Loose {
                        record[i].insert(MatchFlags::PRECEDING_LOOSE);
                    }
                    j += 1;
                    i += 1;
                } else if class_matches {
                    record[i].insert(MatchFlags::CLASS);
                    if comp.binding == Binding::Loose {
                        record[i].insert(MatchFlags::PRECEDING_LOOSE);
                    }
                    j += 1;
                    i += 1;
                } else if comp.binding == Binding::Tight {
                    return None;
                } else {
                    record[i].insert(MatchFlags::SKIPPED);
                    i += 1;
                }
            }
        }
    }

    if j == components.len() {
        Some(record)
    } else {
        None
    }
}

/// The per-position rank used to decide precedence: a matched position
/// outranks a skipped one, and among matched positions NAME > CLASS >
/// WILDCARD.
fn rank(flags: MatchFlags) -> u8 {
    if flags.contains(MatchFlags::NAME) {
        3
    } else if flags.contains(MatchFlags::CLASS) {
        2
    } else if flags.contains(MatchFlags::WILDCARD) {
        1
    } else {
        0
    }
}

/// Compare two candidates' flags at a single query position. `Greater`
/// means `a` beats `b` at this position; `Equal` means this position alone
/// doesn't decide and the scan should move to the next one.
fn position_order(a: MatchFlags, b: MatchFlags) -> Ordering {
    let (ra, rb) = (rank(a), rank(b));
    if ra != rb {
        return ra.cmp(&rb);
    }
    if ra == 0 {
        // Neither position matched (both skipped, or both empty): no
        // opinion, not even about PRECEDING_LOOSE.
        return Ordering::Equal;
    }
    // Same matched kind at this position: tight path beats loose path.
    match (
        a.contains(MatchFlags::PRECEDING_LOOSE),
        b.contains(MatchFlags::PRECEDING_LOOSE),
    ) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Compare two whole match records, scanning positions left to right and
/// returning at the first decisive position. `Equal` means the two records
/// are indistinguishable under the precedence rules above.
pub fn compare_records(a: &[MatchFlags], b: &[MatchFlags]) -> Ordering {
    for (fa, fb) in a.iter().zip(b.iter()) {
        let ord = position_order(*fa, *fb);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Find the best-matching entry in `db` for `query`, returning its index.
///
/// Ties are broken by insertion order: the first matching entry that is
/// never beaten by a later one wins.
pub fn best_match(db: &Database, query: &Query) -> Option<usize> {
    let mut best: Option<(usize, MatchRecord)> = None;

    for (idx, entry) in db.entries().iter().enumerate() {
        let Some(record) = align(entry, query.name(), query.class()) else {
            tracing::trace!(specifier = %entry.specifier_string(), "entry rejected during alignment");
            continue;
        };

        match &best {
            None => best = Some((idx, record)),
            Some((_, best_record)) => {
                if compare_records(&record, best_record) == Ordering::Greater {
                    best = Some((idx, record));
                }
            }
        }
    }

    if let Some((idx, _)) = &best {
        tracing::trace!(specifier = %db.entries()[*idx].specifier_string(), "entry selected");
    }

    best.map(|(idx, _)| idx)
}
