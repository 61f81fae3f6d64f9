//! Compare command - run every algorithm on the same board

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::output::{format_number, print_board, print_section},
    search::{Algorithm, Difficulty, SearchEngine, SeededSource},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Compare minimax, alpha-beta and depth-limited search on one board")]
pub struct CompareArgs {
    /// Board in row-major order, e.g. "X...O...." ('.' or '_' for empty)
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Search depth shared by all algorithms
    #[arg(long, default_value_t = 9)]
    pub max_depth: usize,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    if let Some(outcome) = board.outcome() {
        bail!("board is already finished ({outcome})");
    }

    let engine = SearchEngine::default();
    // Hard difficulty never consults the random source.
    let mut rng = SeededSource::from_seed(0);

    print_section(&format!("Algorithm comparison (depth {})", args.max_depth));
    print_board(&board);
    println!();
    println!(
        "  {:<15} {:>6} {:>10} {:>8} {:>6} {:>7} {:>10}",
        "algorithm", "move", "nodes", "pruned", "depth", "score", "time (ms)"
    );

    for algorithm in Algorithm::ALL {
        let (mv, analysis) = engine.get_best_move(
            &board,
            algorithm,
            Difficulty::Hard,
            Some(args.max_depth),
            &mut rng,
        )?;
        println!(
            "  {:<15} {:>6} {:>10} {:>8} {:>6} {:>7} {:>10.3}",
            algorithm.as_str(),
            mv.to_string(),
            format_number(analysis.nodes_explored),
            format_number(analysis.pruned_branches),
            analysis.max_depth_reached,
            analysis.evaluation_score,
            analysis.thinking_time * 1000.0,
        );
    }

    Ok(())
}
