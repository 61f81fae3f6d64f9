//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The first completed line in [`WINNING_LINES`] order, if any
    pub fn completed_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
        WINNING_LINES.iter().copied().find(|line| {
            let first = cells[line[0]];
            first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first)
        })
    }

    /// The mark occupying the first completed line, if any
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        Self::completed_line(cells).and_then(|line| cells[line[0]].to_player())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
        assert_eq!(LineAnalyzer::completed_line(&cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_vertical_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_diagonal_win() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
        assert_eq!(LineAnalyzer::completed_line(&cells), Some([2, 4, 6]));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut cells = [Cell::Empty; 9];
            for idx in line {
                cells[idx] = Cell::O;
            }
            assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O), "{line:?}");
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert_eq!(LineAnalyzer::winner(&cells), None);
        assert_eq!(LineAnalyzer::completed_line(&cells), None);
    }
}
