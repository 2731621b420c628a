//! Board representation: the hexagon of cells and the discs placed on them.
//!
//! This module contains:
//! - `Color` (the two sides) and `CellState` (what a cell holds)
//! - The `Board` grid, keyed by cube coordinate
//! - Ray casting along the six directions, used for capture counting and flipping

use crate::game::GameError;
use crate::hex::{CubeCoord, DIRECTIONS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Largest supported board radius
pub const MAX_RADIUS: u32 = 100;

/// One of the two sides in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors, in turn order
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// The other side
    pub const fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Black,
    White,
}

impl CellState {
    /// The disc color in this cell, if any
    pub const fn color(self) -> Option<Color> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Color::Black),
            CellState::White => Some(Color::White),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// The opposing disc. An empty cell has no opposite.
    pub fn opposite(self) -> Result<CellState, GameError> {
        match self.color() {
            Some(color) => Ok(color.opposite().into()),
            None => Err(GameError::InvalidOperand(
                "an empty cell has no opposite".to_string(),
            )),
        }
    }
}

impl From<Color> for CellState {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => CellState::Black,
            Color::White => CellState::White,
        }
    }
}

impl TryFrom<CellState> for Color {
    type Error = GameError;

    fn try_from(state: CellState) -> Result<Self, Self::Error> {
        state
            .color()
            .ok_or_else(|| GameError::InvalidOperand("an empty cell is not a player".to_string()))
    }
}

/// The hexagonal game board.
///
/// The key set is fixed at construction; moves only change values. Cloning
/// produces a fully independent copy of every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Distance from the center to each edge
    radius: u32,
    /// Every cell on the board, ordered by (q, r)
    cells: BTreeMap<CubeCoord, CellState>,
}

impl Board {
    /// Create a board of the given radius with the six starting discs placed.
    pub fn new(radius: u32) -> Result<Self, GameError> {
        let n = match i32::try_from(radius) {
            Ok(n) if (1..=MAX_RADIUS as i32).contains(&n) => n,
            _ => return Err(GameError::InvalidRadius(radius)),
        };

        let mut cells = BTreeMap::new();
        for q in -n..=n {
            for r in (-n).max(-q - n)..=n.min(-q + n) {
                cells.insert(CubeCoord::axial(q, r), CellState::Empty);
            }
        }

        let mut board = Self { radius, cells };
        for (coord, color) in Self::starting_discs() {
            board.set(coord, color.into())?;
        }
        Ok(board)
    }

    /// The six fixed discs around the origin, alternating colors
    fn starting_discs() -> [(CubeCoord, Color); 6] {
        [
            (CubeCoord::axial(0, -1), Color::Black),
            (CubeCoord::axial(1, -1), Color::White),
            (CubeCoord::axial(-1, 0), Color::White),
            (CubeCoord::axial(-1, 1), Color::Black),
            (CubeCoord::axial(0, 1), Color::White),
            (CubeCoord::axial(1, 0), Color::Black),
        ]
    }

    /// Number of cells on a board of this radius: `3n² + 3n + 1`
    pub fn cell_count(radius: u32) -> usize {
        let n = radius as usize;
        3 * n * n + 3 * n + 1
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Whether the coordinate is a cell of this board
    pub fn contains(&self, coord: &CubeCoord) -> bool {
        self.cells.contains_key(coord)
    }

    /// Get the state of a cell
    pub fn get(&self, coord: &CubeCoord) -> Result<CellState, GameError> {
        self.cells
            .get(coord)
            .copied()
            .ok_or(GameError::OutOfBounds(*coord))
    }

    /// All cells, ordered by (q, r)
    pub fn cells(&self) -> &BTreeMap<CubeCoord, CellState> {
        &self.cells
    }

    /// All cells holding a disc
    pub fn occupied(&self) -> impl Iterator<Item = (CubeCoord, Color)> + '_ {
        self.cells
            .iter()
            .filter_map(|(coord, state)| state.color().map(|color| (*coord, color)))
    }

    /// All empty cells
    pub fn empty_cells(&self) -> impl Iterator<Item = CubeCoord> + '_ {
        self.cells
            .iter()
            .filter(|(_, state)| state.is_empty())
            .map(|(coord, _)| *coord)
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    /// Number of discs of the given color
    pub fn count(&self, color: Color) -> u32 {
        self.cells
            .values()
            .filter(|state| **state == CellState::from(color))
            .count() as u32
    }

    /// The six corner cells of the hexagon
    pub fn corners(&self) -> [CubeCoord; 6] {
        let n = self.radius as i32;
        [
            CubeCoord::axial(-n, n),
            CubeCoord::axial(0, n),
            CubeCoord::axial(n, 0),
            CubeCoord::axial(n, -n),
            CubeCoord::axial(0, -n),
            CubeCoord::axial(-n, 0),
        ]
    }

    pub fn is_corner(&self, coord: &CubeCoord) -> bool {
        self.corners().contains(coord)
    }

    /// Whether the cell touches any corner
    pub fn is_next_to_corner(&self, coord: &CubeCoord) -> bool {
        self.corners()
            .iter()
            .any(|corner| coord.is_adjacent_to(corner))
    }

    /// The opponent discs `color` would bracket by playing at `from` along
    /// `direction`.
    ///
    /// Walks away from `from` while cells hold the opponent's color. The run
    /// counts only if it is closed by a disc of `color`; hitting an empty cell
    /// or the edge of the board yields nothing.
    pub fn bracketed_run(&self, from: CubeCoord, direction: CubeCoord, color: Color) -> Vec<CubeCoord> {
        let own = CellState::from(color);
        let opponent = CellState::from(color.opposite());
        let mut run = Vec::new();
        let mut current = from + direction;

        loop {
            match self.cells.get(&current) {
                Some(state) if *state == opponent => run.push(current),
                Some(state) if *state == own => return run,
                _ => return Vec::new(),
            }
            current = current + direction;
        }
    }

    /// Number of discs captured in one direction
    pub fn captures_in_direction(&self, from: CubeCoord, direction: CubeCoord, color: Color) -> u32 {
        self.bracketed_run(from, direction, color).len() as u32
    }

    /// Every opponent disc that a move at `from` would flip, in direction order
    pub fn captured_by(&self, from: CubeCoord, color: Color) -> Vec<CubeCoord> {
        DIRECTIONS
            .iter()
            .flat_map(|direction| self.bracketed_run(from, *direction, color))
            .collect()
    }

    /// Remove every disc
    pub(crate) fn clear(&mut self) {
        for state in self.cells.values_mut() {
            *state = CellState::Empty;
        }
    }

    /// Place a disc without any rule checks.
    pub(crate) fn set(&mut self, coord: CubeCoord, state: CellState) -> Result<(), GameError> {
        match self.cells.get_mut(&coord) {
            Some(cell) => {
                *cell = state;
                Ok(())
            }
            None => Err(GameError::OutOfBounds(coord)),
        }
    }
}
