//! Advise command - ask the engine for a move on a given board

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    advisor::{AdviceRequest, Advisor},
    cli::{
        load_config,
        output::{print_analysis, print_board, print_kv, print_section},
    },
    search::{Algorithm, Difficulty, SearchEngine},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Suggest a move for O on the given board")]
pub struct AdviseArgs {
    /// Board in row-major order, e.g. "XX./O../..." ('.' or '_' for empty)
    #[arg(long, short = 'b')]
    pub board: String,

    /// Search algorithm (minimax, alpha_beta, depth_limited)
    #[arg(long, short = 'a')]
    pub algorithm: Option<Algorithm>,

    /// Difficulty (easy, medium, hard)
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Override the difficulty's search depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Random seed for the easy-difficulty substitution
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON engine configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the advice as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AdviseArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let advisor = Advisor::new(SearchEngine::new(config)?);
    let mut rng = advisor.engine().random_source();

    let board = Board::from_string(&args.board)?;
    let mut request = AdviceRequest::for_board(&board);
    request.algorithm = args.algorithm.map(|a| a.as_str().to_string());
    request.difficulty = args.difficulty.map(|d| d.as_str().to_string());
    request.max_depth = args.max_depth;

    let advice = advisor.advise(&request, &mut rng)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
        return Ok(());
    }

    print_section("Move advice");
    print_board(&board);
    println!();
    print_kv("Algorithm", advice.algorithm.as_str());
    print_kv("Difficulty", advice.difficulty.as_str());
    print_kv("Move", &advice.mv.to_string());
    print_analysis(&advice.analysis);

    println!();
    print_board(&advice.board);
    let status = advice.board.status();
    match status.outcome {
        Some(outcome) => println!("\nGame over: {outcome}"),
        None => println!("\n{} to move", status.current_player),
    }

    Ok(())
}
