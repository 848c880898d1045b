use crate::problem::VariableId;
use crate::state::{AssignedSet, Domain};

/// A strategy for choosing which unassigned variable the solver should
/// branch on next.
pub trait VariableSelectionHeuristic {
    /// Selects the next variable to assign, or `None` if every variable is
    /// already assigned.
    fn select(&self, domains: &[Domain], assigned: &AssignedSet) -> Option<VariableId>;
}

/// Plain chronological ordering: always picks the lowest-indexed unassigned
/// variable. Used by `solve` and `solve_fc` (spec.md §4.4 step 4, §4.5).
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestIndexFirst;

impl VariableSelectionHeuristic for LowestIndexFirst {
    fn select(&self, _domains: &[Domain], assigned: &AssignedSet) -> Option<VariableId> {
        assigned.first_unmarked()
    }
}

/// Minimum-remaining-values (MRV / "OVARS"): picks the unassigned variable
/// whose domain currently has the fewest live values, breaking ties by the
/// lower variable index to keep the search deterministic (spec.md §4.6, §5).
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRemainingValues;

impl VariableSelectionHeuristic for MinimumRemainingValues {
    fn select(&self, domains: &[Domain], assigned: &AssignedSet) -> Option<VariableId> {
        (0..domains.len())
            .filter(|&v| !assigned.is_marked(v))
            .min_by_key(|&v| (domains[v].len(), v))
    }
}
