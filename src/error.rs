use std::backtrace::Backtrace;

use crate::problem::{ConstraintId, VariableId};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Programmer-error taxonomy for the engine.
///
/// These correspond to spec.md §7's `UsageError` class: a caller violated an
/// invariant of the data model (an out-of-range variable or constraint slot,
/// or a relevance hook that returned a constraint id the problem doesn't
/// have). They are bugs in the calling code, not runtime conditions, which is
/// why the solver's own outcome (`NoSolution`) is carried as a plain `bool`
/// rather than folded into this enum.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("variable index {index} is out of range for a problem with {num_variables} variables")]
    VariableIndexOutOfRange {
        index: VariableId,
        num_variables: usize,
    },

    #[error("constraint slot {slot} is out of range for {num_constraints} constraint slots")]
    ConstraintSlotOutOfRange {
        slot: ConstraintId,
        num_constraints: usize,
    },

    #[error(
        "relevance hook returned constraint id {id} but the problem only has {num_constraints} constraints"
    )]
    RelevanceHookOutOfRange {
        id: ConstraintId,
        num_constraints: usize,
    },

    #[error("solve* called before plico::init()")]
    NotInitialised,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(Backtrace::capture()),
        }
    }
}
