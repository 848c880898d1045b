//! spec.md §8's "Binary diff" / "Binary impossible" concrete scenarios.

mod common;

use plico::AssignmentOrderChecklist;

#[test]
fn binary_diff_finds_a_solution() {
    plico::init();
    let problem = common::binary_not_equal_problem(2, 2);
    let checklist = AssignmentOrderChecklist::build(&problem);
    let mut values = vec![0; 2];

    let found = plico::solve(&problem, &mut values, &(), &checklist, None, None).unwrap();

    assert!(found);
    assert!(
        values == vec![0, 1] || values == vec![1, 0],
        "unexpected solution: {values:?}"
    );
}

#[test]
fn binary_impossible_has_no_solution() {
    plico::init();
    let problem = common::binary_not_equal_problem(1, 1);
    let checklist = AssignmentOrderChecklist::build(&problem);
    let mut values = vec![0; 2];

    let found = plico::solve(&problem, &mut values, &(), &checklist, None, None).unwrap();

    assert!(!found);
}
