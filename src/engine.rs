//! The public solving entry points: [`solve`], [`solve_fc`], [`solve_ovars`],
//! and the [`SolverEngine`] wrapper around a boxed [`SearchStrategy`].

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, SolverError};
use crate::problem::{Problem, Value};
use crate::relevance::RelevanceChecklist;
use crate::stats::SearchStats;
use crate::strategy::{ForwardChecking, OrderedForwardChecking, PlainBacktracking, SearchStrategy};

static INITIALISED: AtomicBool = AtomicBool::new(false);

/// Marks the library as initialised. Idempotent.
///
/// The original C engine required an explicit init/finish handshake before
/// any `solve*` call; idiomatic Rust has no equivalent need (there is no
/// global state to set up), but spec.md §6 names the handshake as part of the
/// library surface, so it is kept here as a thin, deliberately vestigial
/// assertion rather than silently dropped. See DESIGN.md.
pub fn init() {
    INITIALISED.store(true, Ordering::SeqCst);
}

/// Reverses [`init`]. Idempotent.
pub fn finish() {
    INITIALISED.store(false, Ordering::SeqCst);
}

pub fn is_initialised() -> bool {
    INITIALISED.load(Ordering::SeqCst)
}

fn require_init() -> Result<()> {
    if is_initialised() {
        Ok(())
    } else {
        Err(SolverError::NotInitialised.into())
    }
}

/// A reusable handle around one of the three [`SearchStrategy`]
/// implementations, mirroring the teacher's `SolverEngine`.
///
/// Most callers want the free functions [`solve`]/[`solve_fc`]/[`solve_ovars`]
/// instead; `SolverEngine` exists for callers that want to hold onto a chosen
/// strategy (e.g. to run it repeatedly across many problem instances in a
/// benchmark) without re-selecting it every call.
pub struct SolverEngine<Ctx> {
    strategy: Box<dyn SearchStrategy<Ctx>>,
}

impl<Ctx> SolverEngine<Ctx> {
    pub fn new(strategy: Box<dyn SearchStrategy<Ctx>>) -> Self {
        Self { strategy }
    }

    pub fn solve(
        &self,
        problem: &Problem<Ctx>,
        values: &mut [Value],
        ctx: &Ctx,
        checklist: &dyn RelevanceChecklist<Ctx>,
        pre_reduction: Option<&dyn RelevanceChecklist<Ctx>>,
    ) -> Result<(bool, SearchStats)> {
        require_init()?;
        Ok(self.strategy.solve(problem, values, ctx, checklist, pre_reduction))
    }
}

/// Plain chronological backtracking (spec.md §4.4).
pub fn solve<Ctx>(
    problem: &Problem<Ctx>,
    values: &mut [Value],
    ctx: &Ctx,
    checklist: &dyn RelevanceChecklist<Ctx>,
    pre_reduction: Option<&dyn RelevanceChecklist<Ctx>>,
    stats_out: Option<&mut SearchStats>,
) -> Result<bool> {
    require_init()?;
    let (found, stats) = PlainBacktracking.solve(problem, values, ctx, checklist, pre_reduction);
    if let Some(out) = stats_out {
        *out = stats;
    }
    Ok(found)
}

/// Backtracking with forward checking (spec.md §4.5).
pub fn solve_fc<Ctx>(
    problem: &Problem<Ctx>,
    values: &mut [Value],
    ctx: &Ctx,
    checklist: &dyn RelevanceChecklist<Ctx>,
    pre_reduction: Option<&dyn RelevanceChecklist<Ctx>>,
    stats_out: Option<&mut SearchStats>,
) -> Result<bool> {
    require_init()?;
    let (found, stats) = ForwardChecking.solve(problem, values, ctx, checklist, pre_reduction);
    if let Some(out) = stats_out {
        *out = stats;
    }
    Ok(found)
}

/// Forward checking with minimum-remaining-values variable ordering (spec.md
/// §4.6).
pub fn solve_ovars<Ctx>(
    problem: &Problem<Ctx>,
    values: &mut [Value],
    ctx: &Ctx,
    checklist: &dyn RelevanceChecklist<Ctx>,
    pre_reduction: Option<&dyn RelevanceChecklist<Ctx>>,
    stats_out: Option<&mut SearchStats>,
) -> Result<bool> {
    require_init()?;
    let (found, stats) = OrderedForwardChecking.solve(problem, values, ctx, checklist, pre_reduction);
    if let Some(out) = stats_out {
        *out = stats;
    }
    Ok(found)
}
