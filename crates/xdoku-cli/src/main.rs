//! Command-line front end for the xdoku solver.
//!
//! Reads an 81-character grid (digits `1`-`9` for givens, `.` for blanks,
//! row-major) from the command line or standard input, solves it, and
//! prints the completed grid. Pass `--diagonals` to constrain both main
//! diagonals (X-Sudoku).
//!
//! Exit codes: 0 when solved, 1 when the puzzle has no solution or the
//! search gave up, 2 on malformed input.

use std::{
    io::{self, Read as _},
    process::ExitCode,
};

use clap::Parser;
use xdoku_core::{Board, Topology};
use xdoku_solver::{Solver, Trace};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character grid; read from standard input when omitted.
    grid: Option<String>,

    /// Constrain both main diagonals as well (X-Sudoku).
    #[arg(long)]
    diagonals: bool,

    /// Report the number of solving snapshots recorded.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let text = match read_grid(args.grid.as_deref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };
    let board: Board = match text.parse() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let topology = if args.diagonals {
        Topology::with_diagonals()
    } else {
        Topology::new()
    };
    let solver = Solver::new(topology);

    let mut trace = Trace::new();
    let result = if args.trace {
        solver.solve_traced(&board, &mut trace)
    } else {
        solver.solve(&board)
    };

    match result {
        Ok(solved) => {
            print!("{solved}");
            if args.trace {
                println!("{} snapshots recorded", trace.len());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn read_grid(arg: Option<&str>) -> io::Result<String> {
    match arg {
        Some(grid) => Ok(grid.to_owned()),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
