//! The Sudoku demo: solve a 9x9 puzzle from a file, or generate a fresh
//! one with a unique solution.
//!
//! Every cell is a variable with domain `{0..9}` standing in for digits
//! `1..=9`; "no repeat in a row/column/box" is the same pairwise
//! `not_equal` decomposition the N-Queens demo uses for its columns. Clue
//! cells are not baked into the constraint set at all — the same
//! [`Problem`] is reused across every puzzle and every generation attempt,
//! with the actual clues threaded through as the caller-owned
//! [`SudokuGivens`] context and enforced by one unary constraint per cell.

use std::fs;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use plico::{constraints, AssignmentOrderChecklist, Constraint, Problem, SearchStats};
use prettytable::{Cell as TableCell, Row as TableRow, Table};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const SIZE: usize = 9;
const CELLS: usize = SIZE * SIZE;

/// Which digit (if any) is fixed in each of the 81 cells. `0` means
/// unknown; `1..=9` is a clue. This is the `Ctx` threaded through every
/// `solve*` call — the engine itself never interprets it, it is purely
/// read by the given-cell constraints installed in [`build_problem`].
#[derive(Debug, Clone)]
struct SudokuGivens {
    givens: [u8; CELLS],
}

#[derive(Debug, Serialize, Deserialize)]
struct PuzzleFile {
    givens: Vec<u8>,
}

fn cell(row: usize, col: usize) -> usize {
    row * SIZE + col
}

fn row_group(row: usize) -> Vec<usize> {
    (0..SIZE).map(|col| cell(row, col)).collect()
}

fn col_group(col: usize) -> Vec<usize> {
    (0..SIZE).map(|row| cell(row, col)).collect()
}

fn box_group(b: usize) -> Vec<usize> {
    let base_row = (b / 3) * 3;
    let base_col = (b % 3) * 3;
    let mut out = Vec::with_capacity(9);
    for dr in 0..3 {
        for dc in 0..3 {
            out.push(cell(base_row + dr, base_col + dc));
        }
    }
    out
}

/// `values[var] + 1 == givens[var]`, unless `givens[var] == 0` (no clue),
/// in which case the cell is unconstrained by this rule.
fn given_constraint(var: usize) -> Constraint<SudokuGivens> {
    Constraint::new(1, move |_c, values, ctx: &SudokuGivens| {
        let g = ctx.givens[var];
        g == 0 || values[var] + 1 == g as usize
    })
}

/// Builds the fixed 81-variable, 9-values-per-cell Sudoku problem, shared
/// across every puzzle: only the [`SudokuGivens`] context varies between
/// solves.
fn build_problem() -> Problem<SudokuGivens> {
    let groups_per_kind = SIZE;
    let pairs_per_group = SIZE * (SIZE - 1) / 2;
    let num_constraints = CELLS + 3 * groups_per_kind * pairs_per_group;
    let mut problem = Problem::new(CELLS, num_constraints);
    for var in 0..CELLS {
        problem.set_domain_size(var, SIZE).expect("var < CELLS");
    }

    let mut slot = 0;
    for var in 0..CELLS {
        problem
            .install_constraint(slot, Arc::new(given_constraint(var)))
            .expect("slot reserved above");
        slot += 1;
    }

    for row in 0..SIZE {
        slot = constraints::install_all(&mut problem, slot, constraints::all_different(&row_group(row)))
            .expect("slots reserved above");
    }
    for col in 0..SIZE {
        slot = constraints::install_all(&mut problem, slot, constraints::all_different(&col_group(col)))
            .expect("slots reserved above");
    }
    for b in 0..SIZE {
        slot = constraints::install_all(&mut problem, slot, constraints::all_different(&box_group(b)))
            .expect("slots reserved above");
    }
    debug_assert_eq!(slot, num_constraints);

    problem
}

fn solve_with_givens(
    problem: &Problem<SudokuGivens>,
    checklist: &AssignmentOrderChecklist,
    givens: &[u8; CELLS],
    strategy: Strategy,
    stats_out: Option<&mut SearchStats>,
) -> Option<[u8; CELLS]> {
    let ctx = SudokuGivens { givens: *givens };
    let mut values = vec![0usize; CELLS];
    // The given-cell constraint is unary, so the same checklist doubles as
    // the pre-reduction hook (spec.md §4.3): with no variable assigned yet,
    // `AssignmentOrderChecklist` already only returns constraints that touch
    // nothing but the focal variable, which is exactly the given-cell rule.
    // This collapses every clue's domain to a single value before search
    // starts, instead of waiting for forward checking to discover it.
    let pre_reduction = Some(checklist as &dyn plico::RelevanceChecklist<SudokuGivens>);
    let found = match strategy {
        Strategy::Plain => plico::solve(problem, &mut values, &ctx, checklist, pre_reduction, stats_out),
        Strategy::Fc => plico::solve_fc(problem, &mut values, &ctx, checklist, pre_reduction, stats_out),
        Strategy::Ovars => {
            plico::solve_ovars(problem, &mut values, &ctx, checklist, pre_reduction, stats_out)
        }
    }
    .expect("plico::init() was called in main");

    if !found {
        return None;
    }
    let mut out = [0u8; CELLS];
    for (var, &v) in values.iter().enumerate() {
        out[var] = (v + 1) as u8;
    }
    Some(out)
}

/// A fixed valid solved grid, used as the starting point for generation.
fn base_solved_grid() -> [u8; CELLS] {
    let mut grid = [0u8; CELLS];
    for row in 0..SIZE {
        for col in 0..SIZE {
            grid[cell(row, col)] = (((row * 3 + row / 3 + col) % SIZE) + 1) as u8;
        }
    }
    grid
}

/// Randomizes a solved grid while preserving validity: relabels the
/// digits, and permutes rows/columns within their band/stack plus the
/// bands/stacks themselves (the standard symmetry group of a completed
/// Sudoku grid).
fn randomize_grid(grid: &[u8; CELLS], rng: &mut impl Rng) -> [u8; CELLS] {
    let mut digit_map: Vec<u8> = (1..=9).collect();
    digit_map.shuffle(rng);

    let mut bands: Vec<usize> = (0..3).collect();
    bands.shuffle(rng);
    let row_within_band: Vec<Vec<usize>> = (0..3)
        .map(|_| {
            let mut v: Vec<usize> = (0..3).collect();
            v.shuffle(rng);
            v
        })
        .collect();
    let mut stacks: Vec<usize> = (0..3).collect();
    stacks.shuffle(rng);
    let col_within_stack: Vec<Vec<usize>> = (0..3)
        .map(|_| {
            let mut v: Vec<usize> = (0..3).collect();
            v.shuffle(rng);
            v
        })
        .collect();

    let row_perm: Vec<usize> = bands
        .iter()
        .flat_map(|&band| row_within_band[band].iter().map(move |&r| band * 3 + r))
        .collect();
    let col_perm: Vec<usize> = stacks
        .iter()
        .flat_map(|&stack| col_within_stack[stack].iter().map(move |&c| stack * 3 + c))
        .collect();

    let mut out = [0u8; CELLS];
    for row in 0..SIZE {
        for col in 0..SIZE {
            let src = grid[cell(row_perm[row], col_perm[col])];
            out[cell(row, col)] = digit_map[(src - 1) as usize];
        }
    }
    out
}

/// Removes cells from a fully-solved grid one at a time, keeping a removal
/// only if no other digit could fill that cell given the clues left so
/// far. This is a local uniqueness check, not a full solution count (the
/// engine has no solution-enumeration mode) — it is the same trade-off the
/// original generator makes, re-solving rather than counting.
fn generate_puzzle(
    problem: &Problem<SudokuGivens>,
    checklist: &AssignmentOrderChecklist,
    target_clues: usize,
    rng: &mut impl Rng,
) -> [u8; CELLS] {
    let solved = randomize_grid(&base_solved_grid(), rng);
    let mut givens = solved;

    let mut order: Vec<usize> = (0..CELLS).collect();
    order.shuffle(rng);

    let mut remaining = CELLS;
    for var in order {
        if remaining <= target_clues {
            break;
        }
        let original = givens[var];
        givens[var] = 0;

        let mut uniquely_forced = true;
        for alt in 1..=9u8 {
            if alt == original {
                continue;
            }
            let mut probe = givens;
            probe[var] = alt;
            if solve_with_givens(problem, checklist, &probe, Strategy::Ovars, None).is_some() {
                uniquely_forced = false;
                break;
            }
        }

        if uniquely_forced {
            remaining -= 1;
        } else {
            givens[var] = original;
        }
    }

    givens
}

fn print_grid(givens: &[u8; CELLS]) {
    let mut table = Table::new();
    for row in 0..SIZE {
        let cells = (0..SIZE)
            .map(|col| {
                let v = givens[cell(row, col)];
                TableCell::new(&if v == 0 { ".".to_string() } else { v.to_string() })
            })
            .collect();
        table.add_row(TableRow::new(cells));
    }
    table.printstd();
}

fn parse_digit_grid(text: &str) -> [u8; CELLS] {
    let mut out = [0u8; CELLS];
    let mut digits = text.split_whitespace();
    for slot in out.iter_mut() {
        let digit: u8 = digits
            .next()
            .expect("puzzle file must contain 81 whitespace-separated digits")
            .parse()
            .expect("puzzle digits must be 0..=9");
        *slot = digit;
    }
    out
}

fn read_puzzle(path: &PathBuf) -> [u8; CELLS] {
    let text = fs::read_to_string(path).expect("puzzle file is readable");
    if let Ok(parsed) = serde_json::from_str::<PuzzleFile>(&text) {
        let mut out = [0u8; CELLS];
        out.copy_from_slice(&parsed.givens);
        out
    } else {
        parse_digit_grid(&text)
    }
}

fn record_benchmark(path: &PathBuf, elapsed_seconds: f64, stats: &SearchStats) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).write(true).truncate(true).open(path)?;
    writeln!(file, "{elapsed_seconds} {}", stats.backtrack_count)
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Plain,
    Fc,
    Ovars,
}

#[derive(Debug, Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a puzzle read from a file of 81 digits (0 = blank) or JSON.
    Solve {
        puzzle: PathBuf,
        #[arg(long, value_enum, default_value_t = Strategy::Ovars)]
        strategy: Strategy,
        #[arg(long)]
        benchmark: Option<PathBuf>,
    },
    /// Generate a puzzle with a (locally) unique solution.
    Generate {
        #[arg(long, default_value_t = 30)]
        clues: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt::init();
    plico::init();

    let args = Args::parse();
    let problem = build_problem();
    let checklist = AssignmentOrderChecklist::build(&problem);

    match args.command {
        Command::Solve { puzzle, strategy, benchmark } => {
            let givens = read_puzzle(&puzzle);
            let mut stats = SearchStats::new();

            let start = Instant::now();
            let solution = solve_with_givens(&problem, &checklist, &givens, strategy, Some(&mut stats));
            let elapsed = start.elapsed();

            if let Some(path) = &benchmark {
                record_benchmark(path, elapsed.as_secs_f64(), &stats).expect("benchmark file is writable");
            }

            match solution {
                Some(solved) => {
                    println!("solved in {} node(s):", stats.backtrack_count);
                    print_grid(&solved);
                }
                None => println!("no solution"),
            }
        }
        Command::Generate { clues, seed, out } => {
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            let puzzle = generate_puzzle(&problem, &checklist, clues, &mut rng);

            println!("generated puzzle:");
            print_grid(&puzzle);

            if let Some(path) = out {
                let contents = serde_json::to_string_pretty(&PuzzleFile { givens: puzzle.to_vec() })
                    .expect("PuzzleFile serializes");
                fs::write(path, contents).expect("output path is writable");
            }
        }
    }

    plico::finish();
}
