//! Tic-Tac-Toe advisor CLI
//!
//! - Suggest a move for the AI player on a given board
//! - Compare the search algorithms on the same position
//! - Describe the available algorithms

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt-advisor")]
#[command(version, about = "Game-tree search move advisor for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest the AI's next move
    Advise(advisor::cli::commands::advise::AdviseArgs),

    /// Run every algorithm on one board and compare the statistics
    Compare(advisor::cli::commands::compare::CompareArgs),

    /// List the search algorithms
    Algorithms(advisor::cli::commands::algorithms::AlgorithmsArgs),
}

fn main() -> Result<()> {
    advisor::cli::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Advise(args) => advisor::cli::commands::advise::execute(args),
        Commands::Compare(args) => advisor::cli::commands::compare::execute(args),
        Commands::Algorithms(args) => advisor::cli::commands::algorithms::execute(args),
    }
}
