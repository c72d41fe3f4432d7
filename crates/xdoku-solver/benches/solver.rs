//! Benchmarks for full solves on representative puzzles.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use xdoku_core::{Board, Topology};
use xdoku_solver::Solver;

/// Solvable by propagation alone.
const EASY_GRID: &str =
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";

/// Requires branching.
const HARD_GRID: &str =
    "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

/// The X-Sudoku variant with both diagonals constrained.
const DIAG_GRID: &str =
    "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

fn bench_solve(c: &mut Criterion) {
    let cases = [
        ("easy", EASY_GRID, Topology::new()),
        ("hard", HARD_GRID, Topology::new()),
        ("diagonal", DIAG_GRID, Topology::with_diagonals()),
    ];

    for (name, grid, topology) in cases {
        let board: Board = grid.parse().unwrap();
        let solver = Solver::new(topology);
        c.bench_function(&format!("solve/{name}"), |b| {
            b.iter(|| solver.solve(hint::black_box(&board)).unwrap());
        });
    }
}

fn bench_reduce(c: &mut Criterion) {
    let solver = Solver::new(Topology::new());
    let board: Board = EASY_GRID.parse().unwrap();
    c.bench_function("reduce/easy", |b| {
        b.iter(|| {
            let mut working = hint::black_box(&board).clone();
            solver.reduce(&mut working)
        });
    });
}

criterion_group!(benches, bench_solve, bench_reduce);
criterion_main!(benches);
