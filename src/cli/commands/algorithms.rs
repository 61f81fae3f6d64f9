//! Algorithms command - list the available search algorithms

use anyhow::Result;
use clap::Parser;

use crate::{
    advisor::Advisor,
    cli::output::{print_kv, print_section, print_subsection},
};

#[derive(Parser, Debug)]
#[command(about = "Describe the available search algorithms")]
pub struct AlgorithmsArgs {
    /// Print the catalogue as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AlgorithmsArgs) -> Result<()> {
    let catalogue = Advisor::default().algorithms();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalogue)?);
        return Ok(());
    }

    print_section("Search algorithms");
    for info in catalogue {
        print_subsection(&info.name);
        print_kv("Description", &info.description);
        print_kv("Complexity", &info.complexity);
        print_kv("Best for", &info.best_for);
    }

    Ok(())
}
