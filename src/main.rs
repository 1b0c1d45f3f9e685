use std::error::Error;

use clap::Parser;
use crossterm::style::Stylize;
use env_logger::Env;
use log::{info, warn};

use eight_puzzle::puzzle::BLANK;
use eight_puzzle::scramble::{DEFAULT_SCRAMBLE_STEPS, MAX_SCRAMBLE_STEPS};
use eight_puzzle::{scramble_from_goal, solve, Heuristic, State, DEFAULT_EXPANSION_LIMIT};

#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(about = "Scramble and optimally solve the 8-puzzle with A*")]
struct Cli {
    /// Random slides applied to the goal board
    #[arg(long, default_value_t = DEFAULT_SCRAMBLE_STEPS,
          value_parser = clap::value_parser!(i64).range(0..=MAX_SCRAMBLE_STEPS))]
    steps: i64,

    /// Explicit start board, e.g. "8,1,3|4,_,2|7,6,5" (overrides --steps)
    #[arg(long)]
    start: Option<State>,

    /// manhattan, misplaced or uninformed
    #[arg(long, default_value = "manhattan")]
    heuristic: Heuristic,

    /// Hard cap on node expansions (0 = unlimited)
    #[arg(long, default_value_t = DEFAULT_EXPANSION_LIMIT)]
    max_expansions: usize,

    /// Only print the summary line
    #[arg(long)]
    quiet: bool,
}

fn render(state: &State) -> String {
    let mut out = String::new();
    for row in state.rows() {
        for &tile in row {
            let cell = if tile == BLANK {
                format!("{:>2} ", "_").dark_grey().to_string()
            } else {
                format!("{:>2} ", tile).bold().to_string()
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let start = match cli.start {
        Some(state) => state,
        None => {
            let state = scramble_from_goal(cli.steps)?;
            info!("Scrambled with {} valid steps.", cli.steps);
            state
        }
    };

    if start.is_goal() {
        info!("Already at the goal state.");
    }
    if !start.is_solvable() {
        warn!("{} has odd parity; the search will exhaust the frontier", start);
    }

    info!("Solving {} with the {} heuristic", start, cli.heuristic);
    let result = solve(start, cli.heuristic, cli.max_expansions)?;

    if !cli.quiet {
        println!("Start:\n{}", render(&start));
        let total = result.moves();
        for (i, (movement, state)) in result
            .steps()
            .into_iter()
            .zip(result.path.iter().skip(1))
            .enumerate()
        {
            println!("Step {} / {} ({})\n{}", i + 1, total, movement, render(state));
        }
    }

    println!(
        "Solution in {} steps • nodes expanded: {}",
        result.moves(),
        result.expanded
    );
    Ok(())
}
