//! plico is a generic, reusable constraint satisfaction problem (CSP)
//! solving engine.
//!
//! Given a finite-domain CSP — a number of variables, a domain size for each,
//! and a list of fixed-arity constraints over them — the engine searches for
//! an assignment satisfying every constraint, using one of three
//! interchangeable strategies:
//!
//! - [`solve`] — plain chronological backtracking.
//! - [`solve_fc`] — backtracking with forward checking.
//! - [`solve_ovars`] — forward checking with minimum-remaining-values
//!   variable ordering.
//!
//! # Core concepts
//!
//! - **[`Problem`]**/**[`Constraint`]**: the data model — domain sizes and
//!   constraint slots. Constraints are plain predicate closures, not a
//!   pre-baked taxonomy; [`constraints`] ships a handful of common ones
//!   (`not_equal`, `all_different`, ...) as convenience constructors.
//! - **[`RelevanceChecklist`]**: a caller-supplied hook telling the engine,
//!   for a given variable, which constraints are worth testing right now.
//!   This is what lets the engine stay problem-agnostic: N-Queens and Sudoku
//!   slice their constraints completely differently, and both can use the
//!   shipped [`AssignmentOrderChecklist`] default.
//! - **[`SearchStats`]**: the backtrack/domain-wipeout counters every search
//!   call can report back.
//!
//! # Example
//!
//! Solve `?A != ?B` where `?A` has domain `{0, 1}` and `?B` is fixed to
//! `{0}` — the engine must deduce `?A = 1`.
//!
//! ```
//! use std::sync::Arc;
//! use plico::{constraints, init, AssignmentOrderChecklist, Problem};
//!
//! init();
//!
//! let mut problem: Problem<()> = Problem::new(2, 1);
//! problem.set_domain_size(0, 2).unwrap();
//! problem.set_domain_size(1, 1).unwrap();
//! problem
//!     .install_constraint(0, Arc::new(constraints::not_equal(0, 1)))
//!     .unwrap();
//!
//! let checklist = AssignmentOrderChecklist::build(&problem);
//! let mut values = vec![0; 2];
//! let found = plico::solve(&problem, &mut values, &(), &checklist, None, None).unwrap();
//!
//! assert!(found);
//! assert_eq!(values, vec![1, 0]);
//! ```

pub mod constraints;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod problem;
pub mod relevance;
pub mod state;
pub mod stats;
pub mod strategy;

pub use engine::{finish, init, is_initialised, solve, solve_fc, solve_ovars, SolverEngine};
pub use error::{Error, Result, SolverError};
pub use problem::{Constraint, ConstraintId, Predicate, Problem, Value, VariableId};
pub use relevance::{AssignmentOrderChecklist, RelevanceChecklist};
pub use state::{AssignedSet, Domain, DomainChangeStack};
pub use stats::SearchStats;
pub use strategy::{ForwardChecking, OrderedForwardChecking, PlainBacktracking, SearchStrategy};
