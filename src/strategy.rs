//! The three interchangeable search strategies (spec.md §4.4–§4.6), unified
//! behind a [`SearchStrategy`] trait the way the teacher unifies
//! `BacktrackingSearch`/`RestartingSearch` behind its own strategy trait.
//!
//! All three share one skeleton: allocate per-search [`Domain`]s, an
//! [`AssignedSet`] and a [`DomainChangeStack`]; optionally pre-reduce;
//! recurse, trying each live value of the chosen variable and undoing on
//! failure. They differ only in *which* variable gets chosen next and
//! whether a tentative assignment triggers forward propagation.

use tracing::{debug, trace};

use crate::problem::{ConstraintId, Problem, Value, VariableId};
use crate::relevance::RelevanceChecklist;
use crate::state::{AssignedSet, Domain, DomainChangeStack};
use crate::stats::SearchStats;

use crate::heuristics::variable::{LowestIndexFirst, MinimumRemainingValues, VariableSelectionHeuristic};

/// Shared, allocated-once-per-call state threaded through one `solve*`
/// invocation. Keeping the backtrack counter here rather than behind a
/// module-scoped global (as the original C engine does) is the one
/// "internal, contract-preserving" change spec.md §9's design notes call out:
/// it makes the engine re-entrant at no cost to callers.
struct SearchState<'p, Ctx> {
    problem: &'p Problem<Ctx>,
    ctx: &'p Ctx,
    checklist: &'p dyn RelevanceChecklist<Ctx>,
    domains: Vec<Domain>,
    assigned: AssignedSet,
    stack: DomainChangeStack,
    /// Scratch buffer for relevance-hook answers, hoisted here so a call into
    /// the hook never allocates (spec.md §9, §5).
    scratch: Vec<ConstraintId>,
    stats: SearchStats,
}

impl<'p, Ctx> SearchState<'p, Ctx> {
    fn new(
        problem: &'p Problem<Ctx>,
        ctx: &'p Ctx,
        checklist: &'p dyn RelevanceChecklist<Ctx>,
    ) -> Self {
        let domains = problem
            .domain_sizes()
            .iter()
            .map(|&d| Domain::new(d))
            .collect();
        Self {
            problem,
            ctx,
            checklist,
            domains,
            assigned: AssignedSet::new(problem.num_variables()),
            stack: DomainChangeStack::with_capacity(problem.domain_sizes().iter().sum()),
            scratch: Vec::new(),
            stats: SearchStats::new(),
        }
    }

    /// Applies the data-driven pre-reduction hook once per variable (spec.md
    /// §4.3, §4.4 step 2): drop any value that, assigned alone against the
    /// fixed context, already fails one of the hook's chosen constraints.
    fn pre_reduce(&mut self, values: &mut [Value], hook: &dyn RelevanceChecklist<Ctx>) {
        for var in 0..self.domains.len() {
            let candidates: Vec<Value> = self.domains[var].live().to_vec();
            let mut keep = Vec::with_capacity(candidates.len());
            for v in candidates {
                values[var] = v;
                hook.relevant(self.problem, var, None, &mut self.scratch);
                let ok = self.scratch.iter().all(|&cid| {
                    self.problem
                        .constraint(cid)
                        .map(|c| c.check(values, self.ctx))
                        .unwrap_or(true)
                });
                if ok {
                    keep.push(v);
                }
            }
            trace!(var, before = self.domains[var].len(), after = keep.len(), "pre-reduced domain");
            self.domains[var] = Domain::from_values(keep);
        }
    }

    fn is_consistent(&mut self, values: &[Value], focal: VariableId) -> bool {
        self.checklist
            .relevant(self.problem, focal, Some(&self.assigned), &mut self.scratch);
        let scratch = std::mem::take(&mut self.scratch);
        let ok = scratch
            .iter()
            .all(|&cid| self.problem.constraint(cid).is_some_and(|c| c.check(values, self.ctx)));
        self.scratch = scratch;
        ok
    }

    /// Forward propagation (spec.md §4.5): having just tentatively assigned
    /// `focal`, prune from every other unassigned variable's domain any value
    /// that a binary constraint linking it to `focal` now rules out.
    /// Returns `false` (and undoes its own pruning) on a domain wipeout.
    fn forward_check(&mut self, values: &mut [Value], focal: VariableId) -> bool {
        for u in 0..self.domains.len() {
            if u == focal || self.assigned.is_marked(u) {
                continue;
            }

            self.checklist
                .relevant(self.problem, u, Some(&self.assigned), &mut self.scratch);
            let candidates = std::mem::take(&mut self.scratch);
            let arc = candidates.iter().copied().find(|&cid| {
                self.problem.constraint(cid).is_some_and(|c| {
                    c.arity() == 2 && c.variables().contains(&focal) && c.variables().contains(&u)
                })
            });
            self.scratch = candidates;

            let Some(cid) = arc else { continue };
            let constraint = self
                .problem
                .constraint(cid)
                .expect("id returned by relevant() names an installed constraint")
                .clone();

            let episode_mark = self.stack.mark();
            let live: Vec<Value> = self.domains[u].live().to_vec();
            for w in live {
                values[u] = w;
                if !constraint.check(values, self.ctx) {
                    let pos = self.domains[u]
                        .position_of(w)
                        .expect("w was just read from this domain's live values");
                    self.stack.push(u, w);
                    self.domains[u].remove_at(pos);
                }
            }

            if self.domains[u].is_empty() {
                self.stack.restore_to(episode_mark, &mut self.domains);
                self.stats.domain_wipeouts += 1;
                trace!(focal, wiped_out = u, "forward checking hit a domain wipeout");
                return false;
            }
        }
        true
    }
}

/// A search algorithm sharing the backtracking skeleton of spec.md §4.4.
pub trait SearchStrategy<Ctx> {
    /// Attempts to find a satisfying assignment.
    ///
    /// On success, writes it into `values` and returns `true` with
    /// `values.len() == problem.num_variables()`; on failure, `values`'
    /// contents are unspecified (spec.md §4.9).
    fn solve(
        &self,
        problem: &Problem<Ctx>,
        values: &mut [Value],
        ctx: &Ctx,
        checklist: &dyn RelevanceChecklist<Ctx>,
        pre_reduction: Option<&dyn RelevanceChecklist<Ctx>>,
    ) -> (bool, SearchStats);
}

fn run_backtracking<Ctx>(
    problem: &Problem<Ctx>,
    values: &mut [Value],
    ctx: &Ctx,
    checklist: &dyn RelevanceChecklist<Ctx>,
    pre_reduction: Option<&dyn RelevanceChecklist<Ctx>>,
    variable_heuristic: &dyn VariableSelectionHeuristic,
    forward_checking: bool,
) -> (bool, SearchStats) {
    let mut state = SearchState::new(problem, ctx, checklist);
    if let Some(hook) = pre_reduction {
        state.pre_reduce(values, hook);
        state.stack = DomainChangeStack::with_capacity(state.domains.iter().map(Domain::len).sum());
    }

    let found = backtrack(&mut state, values, variable_heuristic, forward_checking);
    debug!(
        found,
        backtrack_count = state.stats.backtrack_count,
        domain_wipeouts = state.stats.domain_wipeouts,
        "search finished"
    );
    (found, state.stats)
}

fn backtrack<Ctx>(
    state: &mut SearchState<Ctx>,
    values: &mut [Value],
    variable_heuristic: &dyn VariableSelectionHeuristic,
    forward_checking: bool,
) -> bool {
    state.stats.backtrack_count += 1;

    if state.assigned.all_marked() {
        return true;
    }

    let var = variable_heuristic
        .select(&state.domains, &state.assigned)
        .expect("not all_marked(), so an unassigned variable exists");

    state.assigned.mark(var);
    let candidates: Vec<Value> = state.domains[var].live().to_vec();

    for v in candidates {
        values[var] = v;
        let episode_mark = state.stack.mark();

        let consistent = state.is_consistent(values, var)
            && (!forward_checking || state.forward_check(values, var));

        if consistent && backtrack(state, values, variable_heuristic, forward_checking) {
            return true;
        }

        state.stack.restore_to(episode_mark, &mut state.domains);
    }

    state.assigned.unmark(var);
    false
}

/// Plain chronological backtracking (spec.md §4.4): no forward propagation,
/// lowest-indexed unassigned variable first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBacktracking;

impl<Ctx> SearchStrategy<Ctx> for PlainBacktracking {
    fn solve(
        &self,
        problem: &Problem<Ctx>,
        values: &mut [Value],
        ctx: &Ctx,
        checklist: &dyn RelevanceChecklist<Ctx>,
        pre_reduction: Option<&dyn RelevanceChecklist<Ctx>>,
    ) -> (bool, SearchStats) {
        run_backtracking(
            problem,
            values,
            ctx,
            checklist,
            pre_reduction,
            &LowestIndexFirst,
            false,
        )
    }
}

/// Backtracking with forward checking (spec.md §4.5): lowest-indexed
/// unassigned variable first, with eager domain pruning on every tentative
/// assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardChecking;

impl<Ctx> SearchStrategy<Ctx> for ForwardChecking {
    fn solve(
        &self,
        problem: &Problem<Ctx>,
        values: &mut [Value],
        ctx: &Ctx,
        checklist: &dyn RelevanceChecklist<Ctx>,
        pre_reduction: Option<&dyn RelevanceChecklist<Ctx>>,
    ) -> (bool, SearchStats) {
        run_backtracking(
            problem,
            values,
            ctx,
            checklist,
            pre_reduction,
            &LowestIndexFirst,
            true,
        )
    }
}

/// Forward checking with minimum-remaining-values variable ordering (spec.md
/// §4.6, "OVARS").
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedForwardChecking;

impl<Ctx> SearchStrategy<Ctx> for OrderedForwardChecking {
    fn solve(
        &self,
        problem: &Problem<Ctx>,
        values: &mut [Value],
        ctx: &Ctx,
        checklist: &dyn RelevanceChecklist<Ctx>,
        pre_reduction: Option<&dyn RelevanceChecklist<Ctx>>,
    ) -> (bool, SearchStats) {
        run_backtracking(
            problem,
            values,
            ctx,
            checklist,
            pre_reduction,
            &MinimumRemainingValues,
            true,
        )
    }
}
