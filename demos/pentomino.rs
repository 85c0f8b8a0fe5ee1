//! Tile a board with the twelve pentominoes and print every solution.
//! Usage:
//!
//! ```bash
//! cargo run --release --example pentomino -- --fill 3,3 --fill 4,3 --fill 3,4 --fill 4,4
//! ```

use clap::Parser;
use polyomino_cover::{pentomino, render, Board, OrientationTable, Solver};
use std::process::ExitCode;

#[derive(Parser)]
#[command(about = "Enumerate pentomino tilings of a rectangular board")]
struct Cli {
    /// Board width in cells
    #[arg(short = 'w', long, default_value_t = 8)]
    width: usize,

    /// Board height in cells
    #[arg(short = 'H', long, default_value_t = 8)]
    height: usize,

    /// Pre-filled cell as `x,y`, may be repeated
    #[arg(short, long = "fill", value_parser = parse_cell)]
    fill: Vec<(i32, i32)>,

    /// Stop after this many solutions
    #[arg(short, long)]
    limit: Option<usize>,

    /// Only print the number of solutions
    #[arg(short, long)]
    quiet: bool,
}

fn parse_cell(value: &str) -> Result<(i32, i32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{value}`"))?;
    let x = x.trim().parse().map_err(|err| format!("bad x in `{value}`: {err}"))?;
    let y = y.trim().parse().map_err(|err| format!("bad y in `{value}`: {err}"))?;

    Ok((x, y))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let board = match Board::new(cli.width, cli.height, cli.fill) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let shapes = pentomino::shapes();
    let table = OrientationTable::new(&shapes, board.width());
    let solver = match Solver::new(board.clone(), &table) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut count = 0;
    for solution in solver.take(cli.limit.unwrap_or(usize::MAX)) {
        count += 1;
        if cli.quiet {
            continue;
        }

        match render(&solution, &table, &board) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let legend: String = pentomino::NAMES
        .iter()
        .enumerate()
        .map(|(tile, name)| format!(" {}={}", char::from(b'A' + tile as u8), name))
        .collect();
    println!("{count} solutions, tiles:{legend}");

    ExitCode::SUCCESS
}
