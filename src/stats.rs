//! Benchmarking counters returned to the caller (spec.md §4.7, §2).

/// Per-search benchmark counters.
///
/// `backtrack_count` is the spec-mandated counter: incremented once per
/// recursive entry into the search, regardless of whether that entry
/// ultimately succeeds (the name is inherited from the original C engine,
/// where it is the only counter — "backtrack count" is really "node count",
/// see DESIGN.md). `domain_wipeouts` is this crate's own addition, counting
/// how many times forward checking emptied a domain and had to undo; plain
/// backtracking never touches it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub backtrack_count: u64,
    pub domain_wipeouts: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }
}
