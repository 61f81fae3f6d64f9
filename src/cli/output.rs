//! Output formatting for the CLI

use crate::{search::Analysis, tictactoe::Board};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the board with row and column indices
pub fn print_board(board: &Board) {
    println!("    0 1 2");
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| board.get(row, col).to_char().to_string())
            .collect();
        println!("  {row} {}", cells.join(" "));
    }
}

/// Print the statistics of one search
pub fn print_analysis(analysis: &Analysis) {
    print_kv("Reasoning", &analysis.move_reasoning);
    print_kv("Evaluation", &analysis.evaluation_score.to_string());
    print_kv("Nodes explored", &format_number(analysis.nodes_explored));
    print_kv("Branches pruned", &format_number(analysis.pruned_branches));
    print_kv("Max depth reached", &analysis.max_depth_reached.to_string());
    print_kv(
        "Thinking time",
        &format!("{:.3} ms", analysis.thinking_time * 1000.0),
    );
}
