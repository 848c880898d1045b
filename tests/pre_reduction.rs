//! The data-driven pre-reduction hook (spec.md §4.3, second half): a hook
//! with the same `RelevanceChecklist` signature, invoked once per variable
//! before search starts to drop values inconsistent with the fixed context
//! alone, independent of any other variable's assignment.

mod common;

use std::sync::Arc;

use plico::{constraints, AssignmentOrderChecklist, Problem};

/// Two variables, domain `{0, 1, 2}` each. Variable 0 is pinned to `1` by a
/// unary constraint; a binary `not_equal` links the two. Pre-reducing with
/// the same checklist used for in-search consistency should collapse
/// variable 0's domain to a single value before the first recursive call,
/// without changing the answer a full search would find anyway.
fn pinned_problem() -> Problem<()> {
    let mut problem = Problem::new(2, 2);
    problem.set_domain_size(0, 3).unwrap();
    problem.set_domain_size(1, 3).unwrap();
    problem
        .install_constraint(0, Arc::new(constraints::fixed_value(0, 1)))
        .unwrap();
    problem
        .install_constraint(1, Arc::new(constraints::not_equal(0, 1)))
        .unwrap();
    problem
}

#[test]
fn pre_reduction_leaves_solve_result_unchanged() {
    plico::init();
    let problem = pinned_problem();
    let checklist = AssignmentOrderChecklist::build(&problem);

    let mut without_hook = vec![0; 2];
    let found_without =
        plico::solve(&problem, &mut without_hook, &(), &checklist, None, None).unwrap();

    let mut with_hook = vec![0; 2];
    let found_with =
        plico::solve(&problem, &mut with_hook, &(), &checklist, Some(&checklist), None).unwrap();

    assert!(found_without);
    assert!(found_with);
    assert_eq!(without_hook, with_hook);
    assert_eq!(with_hook[0], 1);
}

#[test]
fn pre_reduction_applies_under_every_strategy() {
    plico::init();
    let problem = pinned_problem();
    let checklist = AssignmentOrderChecklist::build(&problem);

    let mut plain = vec![0; 2];
    plico::solve(&problem, &mut plain, &(), &checklist, Some(&checklist), None).unwrap();
    assert_eq!(plain[0], 1);
    assert_ne!(plain[1], 1);

    let mut fc = vec![0; 2];
    plico::solve_fc(&problem, &mut fc, &(), &checklist, Some(&checklist), None).unwrap();
    assert_eq!(fc[0], 1);
    assert_ne!(fc[1], 1);

    let mut ovars = vec![0; 2];
    plico::solve_ovars(&problem, &mut ovars, &(), &checklist, Some(&checklist), None).unwrap();
    assert_eq!(ovars[0], 1);
    assert_ne!(ovars[1], 1);
}

#[test]
fn absent_pre_reduction_hook_is_a_pure_no_op() {
    plico::init();
    let problem = common::binary_not_equal_problem(2, 2);
    let checklist = AssignmentOrderChecklist::build(&problem);

    let mut values = vec![0; 2];
    let found = plico::solve(&problem, &mut values, &(), &checklist, None, None).unwrap();
    assert!(found);
}
