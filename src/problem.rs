//! The CSP data model: [`Problem`] and [`Constraint`].
//!
//! A `Problem` is nothing more than a list of domain sizes and a list of
//! constraint slots; a `Constraint` is an arity, a list of variable indices,
//! and a predicate. Neither type owns any search-time state — that lives in
//! [`crate::state`] and is allocated fresh for each `solve*` call.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, SolverError};

/// A numeric identifier for a single variable in the constraint problem.
pub type VariableId = usize;
/// A numeric identifier for a single constraint in the constraint problem.
pub type ConstraintId = usize;
/// A value drawn from a variable's domain, `0..domain_size`.
pub type Value = usize;

/// A predicate of fixed arity over the full assignment buffer plus an opaque,
/// caller-owned context.
///
/// `Ctx` stands in for the `void *data` the original C engine threaded
/// through every predicate call: a read-only, shared context (fixed puzzle
/// data, a lookup table, whatever the problem needs) that the engine itself
/// never interprets.
pub type Predicate<Ctx> = dyn Fn(&Constraint<Ctx>, &[Value], &Ctx) -> bool + Send + Sync;

/// A single constraint: an arity, the variables it inspects, and a predicate.
///
/// The predicate must be a pure function of its inputs — it must not mutate
/// `Ctx` or any engine state (spec.md §4.9: a predicate that mutates shared
/// state is undefined behaviour as far as the engine is concerned). It
/// receives the *entire* values buffer; it is the relevance-checklist hook's
/// job, not the constraint's, to ensure a predicate is only ever invoked once
/// every variable it depends on has a meaningful assignment.
pub struct Constraint<Ctx> {
    variables: Vec<VariableId>,
    predicate: Arc<Predicate<Ctx>>,
}

impl<Ctx> Constraint<Ctx> {
    /// Creates a constraint of the given arity. The variable-index slots are
    /// initialised to `0` and must be filled in with [`Constraint::set_variable`]
    /// before the constraint is installed into a [`Problem`].
    pub fn new<F>(arity: usize, predicate: F) -> Self
    where
        F: Fn(&Constraint<Ctx>, &[Value], &Ctx) -> bool + Send + Sync + 'static,
    {
        assert!(arity >= 1, "a constraint must reference at least one variable");
        Self {
            variables: vec![0; arity],
            predicate: Arc::new(predicate),
        }
    }

    pub fn arity(&self) -> usize {
        self.variables.len()
    }

    /// Sets the variable referenced at position `p`.
    ///
    /// The engine does not itself enforce that `v` is a valid variable index
    /// of the owning problem (spec.md §3): a caller convention — used by the
    /// Sudoku example's fixed-cell constraints — may deliberately encode a
    /// value `>= num_variables` to mean "this slot names external context
    /// data, not an unknown". Such values are passed through verbatim.
    pub fn set_variable(&mut self, position: usize, v: VariableId) {
        self.variables[position] = v;
    }

    pub fn variable(&self, position: usize) -> VariableId {
        self.variables[position]
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }

    /// Evaluates the predicate against the current values buffer.
    pub fn check(&self, values: &[Value], ctx: &Ctx) -> bool {
        (self.predicate)(self, values, ctx)
    }
}

impl<Ctx> Clone for Constraint<Ctx> {
    fn clone(&self) -> Self {
        Self {
            variables: self.variables.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<Ctx> fmt::Debug for Constraint<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}

/// The CSP itself: an ordered list of variable domain sizes and an ordered
/// list of constraint slots.
///
/// Constraint slots are stored behind an [`Arc`] rather than owned outright:
/// spec.md §4.1 says destroying a `Problem` must not destroy its constraints
/// because ownership of constraints belongs to the caller. In Rust terms that
/// invariant is naturally expressed as shared ownership — a caller that kept
/// its own `Arc` clone of a constraint is unaffected by the `Problem` being
/// dropped.
#[derive(Debug)]
pub struct Problem<Ctx> {
    domain_sizes: Vec<usize>,
    constraints: Vec<Option<Arc<Constraint<Ctx>>>>,
}

impl<Ctx> Problem<Ctx> {
    /// Allocates `num_variables` domain-size slots (initially `0`) and
    /// `num_constraints` empty constraint slots.
    pub fn new(num_variables: usize, num_constraints: usize) -> Self {
        Self {
            domain_sizes: vec![0; num_variables],
            constraints: vec![None; num_constraints],
        }
    }

    pub fn num_variables(&self) -> usize {
        self.domain_sizes.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn domain_size(&self, var: VariableId) -> usize {
        self.domain_sizes[var]
    }

    pub fn domain_sizes(&self) -> &[usize] {
        &self.domain_sizes
    }

    /// Sets the domain size of variable `i` to `d`.
    pub fn set_domain_size(&mut self, var: VariableId, size: usize) -> Result<()> {
        if var >= self.domain_sizes.len() {
            return Err(SolverError::VariableIndexOutOfRange {
                index: var,
                num_variables: self.domain_sizes.len(),
            }
            .into());
        }
        self.domain_sizes[var] = size;
        Ok(())
    }

    /// Installs a constraint at slot `k`. Constraints are stored in insertion
    /// order; that order is part of the problem's public identity, since
    /// external relevance-checklist hooks index into it by [`ConstraintId`].
    pub fn install_constraint(
        &mut self,
        slot: ConstraintId,
        constraint: Arc<Constraint<Ctx>>,
    ) -> Result<()> {
        if slot >= self.constraints.len() {
            return Err(SolverError::ConstraintSlotOutOfRange {
                slot,
                num_constraints: self.constraints.len(),
            }
            .into());
        }
        self.constraints[slot] = Some(constraint);
        Ok(())
    }

    pub fn constraint(&self, slot: ConstraintId) -> Option<&Arc<Constraint<Ctx>>> {
        self.constraints.get(slot).and_then(|c| c.as_ref())
    }

    /// Iterates over `(ConstraintId, &Constraint<Ctx>)` for every installed
    /// slot, skipping empty ones.
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &Arc<Constraint<Ctx>>)> {
        self.constraints
            .iter()
            .enumerate()
            .filter_map(|(id, c)| c.as_ref().map(|c| (id, c)))
    }
}
