//! Variable-selection heuristics.
//!
//! spec.md explicitly scopes out value-ordering heuristics (Non-goals, §1),
//! so this module — unlike the teacher's, which paired a
//! `VariableSelectionHeuristic` with a `ValueOrderingHeuristic` — carries only
//! the former. `solve`/`solve_fc` always use [`LowestIndexFirst`]; `solve_ovars`
//! uses [`MinimumRemainingValues`]. Both are plain, allocation-free strategies
//! over the search-time domains, selected deterministically (spec.md §5: tie
//! breaks must be fixed for determinism to hold).

pub mod variable;

pub use variable::{LowestIndexFirst, MinimumRemainingValues, VariableSelectionHeuristic};
