//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    game::{GameOutcome, GameStatus, Move},
    lines::LineAnalyzer,
};

/// Number of rows (and columns) on the board
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | ' ' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Parse the grid notation used by callers: `"X"`, `"O"` or `""`.
    pub fn from_mark(mark: &str) -> Option<Cell> {
        match mark {
            "" => Some(Cell::Empty),
            "X" => Some(Cell::X),
            "O" => Some(Cell::O),
            _ => None,
        }
    }

    /// The grid notation for this cell (`""` when empty).
    pub fn as_mark(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::X => "X",
            Cell::O => "O",
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player (mark) in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable 3x3 board, cells stored in row-major order.
///
/// `Board` is `Copy` (9 bytes), so every move produces a fresh value and the
/// search can explore sibling branches without any of them observing another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; CELL_COUNT],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from the compact string notation, e.g. `"XX.O....."`.
    ///
    /// Whitespace and `/` row separators are ignored, so `"XX./O../..."` is
    /// accepted too. Piece counts are not checked here; use [`Board::is_valid`]
    /// or [`Board::from_grid`] when the board comes from an untrusted caller.
    ///
    /// # Errors
    ///
    /// Returns error if the board does not have exactly 9 cells or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| *c != '/' && *c != '\n' && *c != '\t')
            .collect();
        // Spaces are a legal empty-cell glyph, but only when the string is
        // otherwise the right length; strip them for "X X O ..." inputs.
        let chars = if chars.len() == CELL_COUNT {
            chars
        } else {
            chars.into_iter().filter(|c| !c.is_whitespace()).collect()
        };

        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Create a board from a grid of marks (`"X"`, `"O"` or `""`).
    ///
    /// This is the validating constructor for caller-supplied boards: the grid
    /// must be exactly 3x3, hold only known marks, and satisfy the
    /// alternating-turn piece counts.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoard`] naming the first shape or content
    /// defect, or [`crate::Error::InvalidPieceCounts`] when the counts are off.
    pub fn from_grid<R, S>(rows: &[R]) -> Result<Self, crate::Error>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        if rows.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoard {
                reason: format!("expected {BOARD_SIZE} rows, got {}", rows.len()),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (row, cols) in rows.iter().enumerate() {
            let cols = cols.as_ref();
            if cols.len() != BOARD_SIZE {
                return Err(crate::Error::InvalidBoard {
                    reason: format!(
                        "row {row} has {} cells, expected {BOARD_SIZE}",
                        cols.len()
                    ),
                });
            }
            for (col, mark) in cols.iter().enumerate() {
                let mark = mark.as_ref();
                cells[row * BOARD_SIZE + col] =
                    Cell::from_mark(mark).ok_or_else(|| crate::Error::InvalidBoard {
                        reason: format!(
                            "cell ({row}, {col}) holds '{mark}', expected \"X\", \"O\" or \"\""
                        ),
                    })?;
            }
        }

        let board = Board { cells };
        let count = board.count_pieces();
        if !Self::counts_alternate(&count) {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Grid form of the board, the inverse of [`Board::from_grid`].
    pub fn to_grid(&self) -> [[&'static str; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[""; BOARD_SIZE]; BOARD_SIZE];
        for (i, cell) in self.cells.iter().enumerate() {
            grid[i / BOARD_SIZE][i % BOARD_SIZE] = cell.as_mark();
        }
        grid
    }

    /// Compact form accepted by [`Board::from_string`], e.g. `"XX.O....."`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// X moves first, so O may trail X by one but never lead.
    pub(crate) fn counts_alternate(count: &PieceCount) -> bool {
        count.x == count.o || count.x == count.o + 1
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Get the cell at (row, col). Panics if out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * BOARD_SIZE + col]
    }

    /// Check if (row, col) is on the board and empty
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE && self.get(row, col) == Cell::Empty
    }

    /// Place `player`'s mark at the move's cell and return the new board.
    ///
    /// Legality is not checked; moves from [`Board::available_moves`] are
    /// always legal. Call [`Board::is_valid_move`] first for anything else.
    #[must_use = "apply_move returns a new board; the input is unchanged"]
    pub fn apply_move(&self, mv: Move, player: Player) -> Board {
        let mut next = *self;
        next.cells[mv.index()] = player.to_cell();
        next
    }

    /// All empty cells as moves, in row-major scan order.
    pub fn available_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::new(i / BOARD_SIZE, i % BOARD_SIZE))
            .collect()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or draw)
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || self.is_draw()
    }

    /// Outcome of the game, if it has finished
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(player) => Some(GameOutcome::Win(player)),
            None if self.is_draw() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Summarise whose turn it is, the outcome and the move count.
    pub fn status(&self) -> GameStatus {
        let count = self.count_pieces();
        let current_player = if count.x > count.o {
            Player::O
        } else {
            Player::X
        };

        GameStatus {
            board: *self,
            current_player,
            outcome: self.outcome(),
            move_count: count.x + count.o,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIZE) && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
