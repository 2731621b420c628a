//! Plain-text rendering of the board.
//!
//! Each row holds one `r` value from `-N` to `N`, indented so the rows form a
//! hexagon. Empty cells are `_`, Black discs `X` and White discs `O`.

use crate::board::{Board, CellState};
use crate::hex::CubeCoord;
use std::fmt;

/// Borrowing text view of a board
pub struct TextView<'a> {
    board: &'a Board,
}

impl<'a> TextView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    fn symbol(state: CellState) -> char {
        match state {
            CellState::Empty => '_',
            CellState::Black => 'X',
            CellState::White => 'O',
        }
    }

    /// The rendered rows, top to bottom
    pub fn rows(&self) -> Vec<String> {
        let n = self.board.radius() as i32;
        (-n..=n)
            .map(|r| {
                let first = (-n).max(-r - n);
                let last = n.min(-r + n);
                let cells: Vec<String> = (first..=last)
                    .map(|q| {
                        let state = self.board.get(&CubeCoord::axial(q, r)).unwrap_or_default();
                        Self::symbol(state).to_string()
                    })
                    .collect();
                format!("{}{}", " ".repeat(r.unsigned_abs() as usize + 1), cells.join(" "))
            })
            .collect()
    }
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rows().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::game::GameState;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_board() {
        let game = GameState::new(3).unwrap();
        let expected = [
            "    _ _ _ _",
            "   _ _ _ _ _",
            "  _ _ X O _ _",
            " _ _ O _ X _ _",
            "  _ _ X O _ _",
            "   _ _ _ _ _",
            "    _ _ _ _",
        ]
        .join("\n");
        assert_eq!(TextView::new(game.board()).to_string(), expected);
    }

    #[test]
    fn test_after_move() {
        let mut game = GameState::new(3).unwrap();
        game.make_move(CubeCoord::axial(1, -2), Color::Black).unwrap();
        let expected = [
            "    _ _ _ _",
            "   _ _ X _ _",
            "  _ _ X X _ _",
            " _ _ O _ X _ _",
            "  _ _ X O _ _",
            "   _ _ _ _ _",
            "    _ _ _ _",
        ]
        .join("\n");
        assert_eq!(TextView::new(game.board()).to_string(), expected);
    }

    #[test]
    fn test_row_lengths() {
        let game = GameState::new(5).unwrap();
        let rows = TextView::new(game.board()).rows();
        assert_eq!(rows.len(), 11);
        let cells: usize = rows.iter().map(|row| row.split_whitespace().count()).sum();
        assert_eq!(cells, Board::cell_count(5));
    }
}
