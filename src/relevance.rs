//! The relevance-checklist hook (spec.md §4.3) and a generic default
//! implementation ([`AssignmentOrderChecklist`]).
//!
//! Different problems benefit from different constraint-slicing strategies:
//! N-Queens can derive its relevant slice arithmetically, Sudoku wants
//! exactly one constraint per step. Rather than impose one scheme, the engine
//! calls out to a caller-supplied hook every time it wants to know which
//! constraints to test at a given variable.

use crate::problem::{ConstraintId, Problem, VariableId};
use crate::state::AssignedSet;

/// Maps `(problem, focal_index, assigned_set)` to the constraints the engine
/// should test because of `focal_index` having just been tentatively
/// assigned.
///
/// # Contract
///
/// The hook must return every constraint whose predicate *could* be
/// falsified by the new assignment at `focal_index` given the variables
/// assigned so far, and should avoid returning constraints that still depend
/// on an unassigned variable — the engine trusts the hook on this point and
/// will happily evaluate a predicate against garbage data in slots the hook
/// claimed were ready. The order of returned constraints does not affect
/// correctness, only cost.
///
/// During forward checking the same hook is also asked, with `focal_index`
/// set to a still-*unassigned* variable `u`, which constraints are relevant
/// to `u`; the engine then filters that answer down to binary constraints
/// linking `u` to the variable actually being propagated from (spec.md §4.5).
/// A hook that only ever answers the "just assigned" question is free to
/// under-answer this second query — forward checking is allowed to miss
/// prunings, never to accept an inconsistent assignment, because the engine
/// always re-validates the focal variable's own constraints when it is
/// assigned (spec.md §4.9).
///
/// `out` is caller-allocated scratch space the engine hoists into its
/// per-search state and reuses across calls, avoiding a per-node allocation
/// (spec.md §9's "scratch allocations per consistency check" design note).
pub trait RelevanceChecklist<Ctx> {
    fn relevant(
        &self,
        problem: &Problem<Ctx>,
        focal: VariableId,
        assigned: Option<&AssignedSet>,
        out: &mut Vec<ConstraintId>,
    );
}

impl<Ctx, F> RelevanceChecklist<Ctx> for F
where
    F: Fn(&Problem<Ctx>, VariableId, Option<&AssignedSet>, &mut Vec<ConstraintId>),
{
    fn relevant(
        &self,
        problem: &Problem<Ctx>,
        focal: VariableId,
        assigned: Option<&AssignedSet>,
        out: &mut Vec<ConstraintId>,
    ) {
        self(problem, focal, assigned, out)
    }
}

/// A general-purpose relevance checklist driven entirely by the current
/// assignment, not by any arithmetic specific to one problem shape.
///
/// For a given `focal` variable it returns every constraint touching `focal`
/// all of whose *other* variables are already assigned — i.e. every
/// constraint that has just become fully determined. This is safe to use
/// under any variable-selection order, including the dynamic ordering
/// [`crate::strategy::OrderedForwardChecking`] uses, because it consults the
/// live `assigned` set rather than assuming variables are visited in index
/// order.
///
/// During pre-reduction (`assigned` is `None`) only unary constraints on
/// `focal` qualify, since no other variable has a meaningful value yet.
pub struct AssignmentOrderChecklist {
    by_variable: Vec<Vec<ConstraintId>>,
}

impl AssignmentOrderChecklist {
    /// Builds the adjacency list once, up front, from the problem's
    /// constraints. `O(num_constraints * max_arity)`.
    pub fn build<Ctx>(problem: &Problem<Ctx>) -> Self {
        let mut by_variable = vec![Vec::new(); problem.num_variables()];
        for (cid, constraint) in problem.constraints() {
            for &v in constraint.variables() {
                if v < by_variable.len() {
                    by_variable[v].push(cid);
                }
            }
        }
        Self { by_variable }
    }
}

impl<Ctx> RelevanceChecklist<Ctx> for AssignmentOrderChecklist {
    fn relevant(
        &self,
        problem: &Problem<Ctx>,
        focal: VariableId,
        assigned: Option<&AssignedSet>,
        out: &mut Vec<ConstraintId>,
    ) {
        out.clear();
        let Some(candidates) = self.by_variable.get(focal) else {
            return;
        };
        for &cid in candidates {
            let Some(constraint) = problem.constraint(cid) else {
                continue;
            };
            let ready = constraint.variables().iter().all(|&v| {
                if v == focal {
                    true
                } else if v >= problem.num_variables() {
                    // Caller convention: an index past num_variables names
                    // fixed external data, always "ready".
                    true
                } else {
                    match assigned {
                        Some(set) => set.is_marked(v),
                        None => false,
                    }
                }
            });
            if ready {
                out.push(cid);
            }
        }
    }
}
