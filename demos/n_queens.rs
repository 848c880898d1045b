//! The N-Queens demo: place N queens on an N×N board so that no two
//! attack each other, using whichever of plico's three search strategies
//! the caller picks.
//!
//! Each variable is a row, its value the column the queen in that row
//! occupies; "no two share a column" and "no two share a diagonal" are
//! both expressed as pairwise binary constraints, so every strategy
//! including forward checking gets full pruning out of them.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use plico::{constraints, AssignmentOrderChecklist, Problem, SearchStats};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Plain,
    Fc,
    Ovars,
}

/// Solve the N-Queens puzzle for a given board size.
#[derive(Debug, Parser)]
struct Args {
    /// Board size (number of queens).
    n: usize,

    /// Which search strategy to solve with.
    #[arg(long, value_enum, default_value_t = Strategy::Ovars)]
    strategy: Strategy,

    /// Append "<elapsed_seconds> <backtrack_count>" to this file, truncating
    /// it first.
    #[arg(long)]
    benchmark: Option<PathBuf>,
}

fn build_problem(n: usize) -> Problem<()> {
    let num_constraints = n * (n - 1);
    let mut problem = Problem::new(n, num_constraints);
    for row in 0..n {
        problem.set_domain_size(row, n).expect("row < n");
    }

    let mut slot = 0;
    slot = constraints::install_all(&mut problem, slot, constraints::all_different(&(0..n).collect::<Vec<_>>()))
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

fn print_board(n: usize, columns: &[usize]) {
    for row in 0..n {
        let mut line = String::new();
        for col in 0..n {
            line.push(if columns[row] == col { '♛' } else { '·' });
            line.push(' ');
        }
        println!("{line}");
    }
}

fn record_benchmark(path: &PathBuf, elapsed_seconds: f64, stats: &SearchStats) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).write(true).truncate(true).open(path)?;
    writeln!(file, "{elapsed_seconds} {}", stats.backtrack_count)
}

fn main() {
    tracing_subscriber::fmt::init();
    plico::init();

    let args = Args::parse();
    let problem = build_problem(args.n);
    let checklist = AssignmentOrderChecklist::build(&problem);
    let mut values = vec![0; args.n];
    let mut stats = SearchStats::new();

    let start = Instant::now();
    let found = match args.strategy {
        Strategy::Plain => plico::solve(&problem, &mut values, &(), &checklist, None, Some(&mut stats)),
        Strategy::Fc => plico::solve_fc(&problem, &mut values, &(), &checklist, None, Some(&mut stats)),
        Strategy::Ovars => plico::solve_ovars(&problem, &mut values, &(), &checklist, None, Some(&mut stats)),
    }
    .expect("plico::init() was called above");
    let elapsed = start.elapsed();

    if let Some(path) = &args.benchmark {
        record_benchmark(path, elapsed.as_secs_f64(), &stats).expect("benchmark file is writable");
    }

    if found {
        println!("solved {}-queens in {} node(s):", args.n, stats.backtrack_count);
        print_board(args.n, &values);
    } else {
        println!("no solution for {}-queens", args.n);
    }

    plico::finish();
}
