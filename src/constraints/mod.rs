//! A small standard library of predicate constructors, the Rust counterpart
//! to the teacher's `solver::constraints` module.
//!
//! spec.md's `Constraint` is nothing more than an arity, a variable list, and
//! a predicate closure — there is no built-in notion of "all different" or
//! "not equal" at the engine level. These helpers just build ordinary
//! `Constraint<Ctx>` values, and exist purely for convenience: every one of
//! them could be written by hand at the call site.
//!
//! [`all_different`] decomposes into pairwise [`not_equal`] constraints
//! rather than a single n-ary predicate. This is deliberate: forward checking
//! (spec.md §4.5) only ever prunes through a *binary* constraint linking the
//! focal variable to an unassigned one, so an n-ary all-different would be
//! invisible to forward checking entirely. Decomposing into pairs is exactly
//! how the N-Queens and Sudoku demos get effective pruning out of FC/OVARS.

use std::sync::Arc;

use crate::problem::{Constraint, Value, VariableId};

/// `values[a] != values[b]`.
pub fn not_equal<Ctx>(a: VariableId, b: VariableId) -> Constraint<Ctx> {
    let mut c = Constraint::new(2, move |_c, values: &[Value], _ctx: &Ctx| values[a] != values[b]);
    c.set_variable(0, a);
    c.set_variable(1, b);
    c
}

/// `values[a] == values[b]`.
pub fn equal<Ctx>(a: VariableId, b: VariableId) -> Constraint<Ctx> {
    let mut c = Constraint::new(2, move |_c, values: &[Value], _ctx: &Ctx| values[a] == values[b]);
    c.set_variable(0, a);
    c.set_variable(1, b);
    c
}

/// `|values[a] - values[b]| != k`, e.g. N-Queens' diagonal non-attack rule.
pub fn abs_diff_not_equal<Ctx>(a: VariableId, b: VariableId, k: i64) -> Constraint<Ctx> {
    let mut c = Constraint::new(2, move |_c, values: &[Value], _ctx: &Ctx| {
        (values[a] as i64 - values[b] as i64).abs() != k
    });
    c.set_variable(0, a);
    c.set_variable(1, b);
    c
}

/// `values[var] == value`, always — used to pin a variable to a fixed given
/// (e.g. a Sudoku clue) as an ordinary constraint rather than through the
/// pre-reduction hook, for callers who want givens expressed uniformly with
/// every other rule.
pub fn fixed_value<Ctx>(var: VariableId, value: Value) -> Constraint<Ctx> {
    let mut c = Constraint::new(1, move |_c, values: &[Value], _ctx: &Ctx| values[var] == value);
    c.set_variable(0, var);
    c
}

/// Every pairwise `not_equal` constraint among `vars` — the binary
/// decomposition of an "all different" rule over the group.
pub fn all_different<Ctx>(vars: &[VariableId]) -> Vec<Constraint<Ctx>> {
    let mut out = Vec::with_capacity(vars.len() * vars.len().saturating_sub(1) / 2);
    for i in 0..vars.len() {
        for j in (i + 1)..vars.len() {
            out.push(not_equal(vars[i], vars[j]));
        }
    }
    out
}

/// Installs a batch of constraints into consecutive slots starting at `start`,
/// returning the next free slot. Convenience for building problems out of
/// helper-generated constraint groups like [`all_different`].
pub fn install_all<Ctx>(
    problem: &mut crate::problem::Problem<Ctx>,
    start: usize,
    constraints: impl IntoIterator<Item = Constraint<Ctx>>,
) -> crate::error::Result<usize> {
    let mut slot = start;
    for c in constraints {
        problem.install_constraint(slot, Arc::new(c))?;
        slot += 1;
    }
    Ok(slot)
}
