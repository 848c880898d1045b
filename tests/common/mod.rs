//! Shared problem builders for integration tests, kept here rather than in
//! `src/` since they are test fixtures, not library surface.

use std::sync::Arc;

use plico::{constraints, Constraint, Problem};

/// The column-per-variable N-Queens encoding used throughout spec.md's
/// concrete scenarios: variable `i` is a column, its value the row the
/// queen in that column occupies.
pub fn n_queens_problem(n: usize) -> Problem<()> {
    let num_constraints = n * (n - 1);
    let mut problem = Problem::new(n, num_constraints);
    for col in 0..n {
        problem.set_domain_size(col, n).expect("col < n");
    }

    let mut slot = constraints::install_all(
        &mut problem,
        0,
        constraints::all_different(&(0..n).collect::<Vec<_>>()),
    )
    .expect("slots reserved above");

    for i in 0..n {
        for j in (i + 1)..n {
            let gap = (j - i) as i64;
            problem
                .install_constraint(slot, Arc::new(constraints::abs_diff_not_equal(i, j, gap)))
                .expect("slot reserved above");
            slot += 1;
        }
    }
    debug_assert_eq!(slot, num_constraints);

    problem
}

/// Two variables with the given per-variable domain sizes and a single
/// `not_equal` constraint between them (spec.md §8's "Binary diff" /
/// "Binary impossible" scenarios).
pub fn binary_not_equal_problem(domain_a: usize, domain_b: usize) -> Problem<()> {
    let mut problem = Problem::new(2, 1);
    problem.set_domain_size(0, domain_a).expect("0 < 2");
    problem.set_domain_size(1, domain_b).expect("1 < 2");
    problem
        .install_constraint(0, Arc::new(constraints::not_equal(0, 1)))
        .expect("slot 0 exists");
    problem
}

/// Which digit (if any) is fixed in each of 81 Sudoku cells. `0` is
/// unknown, `1..=9` a clue.
#[derive(Debug, Clone)]
pub struct Givens {
    pub cells: [u8; 81],
}

fn sudoku_cell(row: usize, col: usize) -> usize {
    row * 9 + col
}

fn sudoku_given_constraint(var: usize) -> Constraint<Givens> {
    Constraint::new(1, move |_c, values, ctx: &Givens| {
        let g = ctx.cells[var];
        g == 0 || values[var] + 1 == g as usize
    })
}

/// The fixed 81-variable Sudoku problem shared across every puzzle: row,
/// column and 3x3-box "all different" constraints plus one unary
/// given-constraint per cell, decided at solve time by the [`Givens`]
/// context rather than baked into the `Problem`.
pub fn sudoku_problem() -> Problem<Givens> {
    let pairs_per_group = 9 * 8 / 2;
    let mut problem = Problem::new(81, 81 + 3 * 9 * pairs_per_group);
    for var in 0..81 {
        problem.set_domain_size(var, 9).expect("var < 81");
    }

    let mut slot = 0;
    for var in 0..81 {
        problem
            .install_constraint(slot, Arc::new(sudoku_given_constraint(var)))
            .expect("slot reserved above");
        slot += 1;
    }

    for row in 0..9 {
        let group: Vec<usize> = (0..9).map(|col| sudoku_cell(row, col)).collect();
        slot = constraints::install_all(&mut problem, slot, constraints::all_different(&group))
            .expect("slots reserved above");
    }
    for col in 0..9 {
        let group: Vec<usize> = (0..9).map(|row| sudoku_cell(row, col)).collect();
        slot = constraints::install_all(&mut problem, slot, constraints::all_different(&group))
            .expect("slots reserved above");
    }
    for b in 0..9 {
        let base_row = (b / 3) * 3;
        let base_col = (b % 3) * 3;
        let group: Vec<usize> = (0..3)
            .flat_map(|dr| (0..3).map(move |dc| sudoku_cell(base_row + dr, base_col + dc)))
            .collect();
        slot = constraints::install_all(&mut problem, slot, constraints::all_different(&group))
            .expect("slots reserved above");
    }
    debug_assert_eq!(slot, problem.num_constraints());

    problem
}
