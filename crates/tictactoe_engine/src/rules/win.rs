//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of scanning a board for three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinResult {
    /// No line is complete.
    NoWinner,
    /// `player` owns every cell of `line`.
    Winner {
        /// The player holding the line.
        player: Player,
        /// The completed line.
        line: [Position; 3],
    },
}

impl WinResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            WinResult::Winner { player, .. } => Some(*player),
            WinResult::NoWinner => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            WinResult::Winner { line, .. } => Some(*line),
            WinResult::NoWinner => None,
        }
    }

    /// Returns the completed line as board indices.
    pub fn indices(&self) -> Option<[usize; 3]> {
        self.line().map(|line| line.map(Position::to_index))
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are checked rows first, then columns, then diagonals; the first
/// complete line is reported even if the board holds more than one.
#[instrument]
pub fn evaluate_winner(board: &Board) -> WinResult {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let cell = board.get(a);
        if let Some(player) = cell.player()
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return WinResult::Winner { player, line };
        }
    }

    WinResult::NoWinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell::{self, Empty, O, X};

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate_winner(&Board::new()), WinResult::NoWinner);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Cell::O);
            }
            let result = evaluate_winner(&board);
            assert_eq!(result.winner(), Some(Player::O));
            assert_eq!(result.line(), Some(line));
        }
    }

    #[test]
    fn test_winner_top_row_indices() {
        let board = Board::from_cells([X, X, X, O, O, Empty, Empty, Empty, Empty]);
        assert_eq!(evaluate_winner(&board).indices(), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_cells([X, O, O, X, O, Empty, O, X, X]);
        let result = evaluate_winner(&board);
        assert_eq!(result.winner(), Some(Player::O));
        assert_eq!(result.indices(), Some([2, 4, 6]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_cells([X, X, Empty, Empty, Empty, Empty, Empty, Empty, Empty]);
        assert_eq!(evaluate_winner(&board), WinResult::NoWinner);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_cells([X, O, X, Empty, Empty, Empty, Empty, Empty, Empty]);
        assert_eq!(evaluate_winner(&board), WinResult::NoWinner);
    }

    #[test]
    fn test_first_match_wins_priority() {
        // Column 0 and the main diagonal are both X; the column comes first.
        let board = Board::from_cells([X, O, O, X, X, O, X, O, X]);
        assert_eq!(evaluate_winner(&board).indices(), Some([0, 3, 6]));

        // Top row (X) outranks the bottom row (O).
        let board = Board::from_cells([X, X, X, Empty, Empty, Empty, O, O, O]);
        let result = evaluate_winner(&board);
        assert_eq!(result.winner(), Some(Player::X));
        assert_eq!(result.indices(), Some([0, 1, 2]));
    }

    #[test]
    fn test_draw_board_has_no_winner() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate_winner(&board), WinResult::NoWinner);
    }
}
