//! Puzzle Solver
//!
//! Times depth-first and breadth-first search on peg solitaire boards,
//! sliding-tile puzzles and word ladders, printing each solution found.

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn, Level};
use tracing_subscriber::fmt::SubscriberBuilder;

use puzzler::peg::CLASSIC_5X5;
use puzzler::{persistence, GridPegSolitaire, Puzzle, SlidingPuzzle, SolutionPath, Strategy, WordLadder};

/// Solves puzzles by state-space search and reports how long it took.
#[derive(Parser)]
#[command(name = "puzzler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which search strategy to run.
    #[arg(long, short, value_enum, default_value_t = StrategyArg::Both, global = true)]
    strategy: StrategyArg,

    /// Log search statistics.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    DepthFirst,
    BreadthFirst,
    Both,
}

impl StrategyArg {
    fn strategies(self) -> &'static [Strategy] {
        match self {
            StrategyArg::DepthFirst => &[Strategy::DepthFirst],
            StrategyArg::BreadthFirst => &[Strategy::BreadthFirst],
            StrategyArg::Both => &Strategy::ALL,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Solve a peg solitaire board ('*' peg, '.' hole, '#' unused).
    Peg {
        /// Board rows separated by '/'.
        #[arg(long, default_value = CLASSIC_5X5, conflicts_with = "file")]
        board: String,
        /// Read the board from a file, one row per line.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Solve a sliding-tile puzzle ('*' marks the blank).
    Slide {
        /// Starting rows separated by '/'.
        #[arg(long)]
        from: String,
        /// Target rows separated by '/'.
        #[arg(long, default_value = "123/45*")]
        to: String,
    },
    /// Solve a word ladder using a word list.
    Ladder {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Whitespace-separated word list.
        #[arg(long, default_value = "words.txt")]
        words: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let strategies = cli.strategy.strategies();
    match cli.command {
        Command::Peg { board, file } => {
            let text = match file {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("failed to read board {}", path.display()))?,
                None => board,
            };
            run(text.parse::<GridPegSolitaire>()?, strategies);
        }
        Command::Slide { from, to } => {
            run(SlidingPuzzle::parse(&from, &to)?, strategies);
        }
        Command::Ladder { from, to, words } => {
            let words = persistence::load_words(&words)?;
            if !words.contains(&to) {
                warn!(word = %to, "target word is not in the word list");
            }
            run(WordLadder::new(from, to, Rc::new(words)), strategies);
        }
    }

    Ok(())
}

/// Runs each strategy on a fresh copy of the puzzle and prints the outcome.
fn run<P: Puzzle + Clone + Display>(puzzle: P, strategies: &[Strategy]) {
    for &strategy in strategies {
        let start = Instant::now();
        let (path, stats) = strategy.solve_with_stats(puzzle.clone());
        let elapsed = start.elapsed();

        info!(
            %strategy,
            expanded = stats.expanded,
            visited = stats.visited,
            seconds = elapsed.as_secs_f64(),
            "search complete"
        );
        println!("{}", format_report(strategy, path.as_ref()));
        println!("Took {:.3} seconds.\n", elapsed.as_secs_f64());
    }
}

/// Formats a search outcome as a human-readable block.
fn format_report<P: Display>(strategy: Strategy, path: Option<&SolutionPath<P>>) -> String {
    match path {
        Some(path) => format!(
            "Using {} search ({} moves):\n{}",
            strategy,
            path.moves(),
            path
        ),
        None => format!("Using {} search: no solution", strategy),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sliding_report_snapshot() {
        let puzzle = SlidingPuzzle::parse("*23/145", "123/45*").unwrap();
        let path = Strategy::BreadthFirst.solve(puzzle);
        let report = format_report(Strategy::BreadthFirst, path.as_ref());

        insta::assert_snapshot!(report, @r"
        Using breadth-first search (3 moves):
        *23
        145

        123
        *45

        123
        4*5

        123
        45*
        ");
    }

    #[test]
    fn test_no_solution_report() {
        let puzzle = WordLadder::new("same", "cost", Rc::default());
        let path = Strategy::DepthFirst.solve(puzzle);
        assert_eq!(
            format_report(Strategy::DepthFirst, path.as_ref()),
            "Using depth-first search: no solution"
        );
    }

    #[test]
    fn test_cli_parses_strategy_and_board_file() {
        let cli = Cli::try_parse_from(["puzzler", "peg", "--file", "board.txt", "-s", "breadth-first"])
            .unwrap();
        assert_eq!(cli.strategy.strategies(), &[Strategy::BreadthFirst]);
        match cli.command {
            Command::Peg { board, file } => {
                assert_eq!(board, CLASSIC_5X5);
                assert_eq!(file, Some(PathBuf::from("board.txt")));
            }
            _ => panic!("expected the peg subcommand"),
        }

        let conflicting = Cli::try_parse_from(["puzzler", "peg", "--board", "**.", "--file", "b.txt"]);
        assert!(conflicting.is_err());
        assert!(Cli::try_parse_from(["puzzler", "slide", "--from", "*23/145", "-s", "best-first"]).is_err());
    }

    #[test]
    fn test_strategy_arg_expands() {
        assert_eq!(StrategyArg::Both.strategies(), &Strategy::ALL);
        assert_eq!(
            StrategyArg::BreadthFirst.strategies(),
            &[Strategy::BreadthFirst]
        );
    }
}
