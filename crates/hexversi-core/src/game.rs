//! Core game state machine.
//!
//! This module contains the main `GameState` struct and all rule enforcement:
//! legal moves, captures, the move/pass protocol and game-over detection.

use crate::actions::{GameAction, GameEvent};
use crate::board::{Board, CellState, Color};
use crate::hex::{CubeCoord, DIRECTIONS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Board radius used when none is given
pub const DEFAULT_RADIUS: u32 = 3;

/// Errors that can occur when building or playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Invalid cube coordinate ({q}, {r}, {s}): components must sum to zero")]
    InvalidCoordinate { q: i32, r: i32, s: i32 },

    #[error("Coordinate {0} is not on the board")]
    OutOfBounds(CubeCoord),

    #[error("Illegal move at {0}")]
    IllegalMove(CubeCoord),

    #[error("Game is over")]
    GameOver,

    #[error("Not your turn")]
    NotYourTurn,

    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    #[error("Board radius must be between 1 and {}, got {0}", crate::board::MAX_RADIUS)]
    InvalidRadius(u32),
}

/// Disc counts for both players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub black: u32,
    pub white: u32,
}

impl Scores {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn total(&self) -> u32 {
        self.black + self.white
    }

    /// The leading color, or `None` when tied
    pub fn leader(&self) -> Option<Color> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// The complete game state.
///
/// Cloning yields an independent game that can be played forward without
/// touching the original; the lookahead strategy relies on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The game board
    board: Board,
    /// Whose turn it is
    current_player: Color,
}

impl GameState {
    /// Create a new game on a board of the given radius. Black moves first.
    pub fn new(radius: u32) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(radius)?,
            current_player: Color::Black,
        })
    }

    /// Build a game from an arbitrary position: the given discs on an
    /// otherwise empty board, with `to_move` on turn.
    pub fn from_position(radius: u32, discs: &[(CubeCoord, Color)], to_move: Color) -> Result<Self, GameError> {
        let mut board = Board::new(radius)?;
        board.clear();
        for (coord, color) in discs {
            board.set(*coord, (*color).into())?;
        }
        Ok(Self {
            board,
            current_player: to_move,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn radius(&self) -> u32 {
        self.board.radius()
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub(crate) fn set_current_player(&mut self, player: Color) {
        self.current_player = player;
    }

    /// The opposing player
    pub fn opposite(&self, player: Color) -> Color {
        player.opposite()
    }

    /// State of the cell at `coord`
    pub fn cell(&self, coord: &CubeCoord) -> Result<CellState, GameError> {
        self.board.get(coord)
    }

    /// State of the cell at axial `(q, r)`; `s` is derived
    pub fn cell_at(&self, q: i32, r: i32) -> Result<CellState, GameError> {
        self.board.get(&CubeCoord::axial(q, r))
    }

    /// Every cell on the board and its state
    pub fn cells(&self) -> &BTreeMap<CubeCoord, CellState> {
        self.board.cells()
    }

    /// Only the cells that hold a disc
    pub fn occupied_cells(&self) -> BTreeMap<CubeCoord, Color> {
        self.board.occupied().collect()
    }

    pub fn corners(&self) -> [CubeCoord; 6] {
        self.board.corners()
    }

    /// Whether `player` placing at `coord` would capture anything.
    ///
    /// Occupied cells are not checked here; see [`GameState::legal_moves`].
    pub fn can_capture(&self, coord: &CubeCoord, player: Color) -> bool {
        let opponent = CellState::from(player.opposite());
        coord.neighbors().iter().zip(DIRECTIONS).any(|(neighbor, direction)| {
            self.board.get(neighbor) == Ok(opponent)
                && !self.board.bracketed_run(*coord, direction, player).is_empty()
        })
    }

    /// Every empty cell where `player` would capture, ordered by (q, r)
    pub fn legal_moves(&self, player: Color) -> Vec<CubeCoord> {
        self.board
            .empty_cells()
            .filter(|coord| self.can_capture(coord, player))
            .collect()
    }

    /// Whether the player to move has any legal move
    pub fn has_legal_moves(&self) -> bool {
        self.has_moves(self.current_player)
    }

    fn has_moves(&self, player: Color) -> bool {
        self.board
            .empty_cells()
            .any(|coord| self.can_capture(&coord, player))
    }

    /// Total discs `player` would flip by playing at `coord`
    pub fn calculate_captures(&self, coord: &CubeCoord, player: Color) -> u32 {
        DIRECTIONS
            .iter()
            .map(|direction| self.board.captures_in_direction(*coord, *direction, player))
            .sum()
    }

    /// The legal move with the most captures.
    ///
    /// Ties go to the move that comes first in [`CubeCoord::upper_left_cmp`].
    pub fn find_best_move(&self, player: Color) -> Option<CubeCoord> {
        self.legal_moves(player)
            .into_iter()
            .map(|coord| (coord, self.calculate_captures(&coord, player)))
            .max_by(|(a, a_captures), (b, b_captures)| {
                a_captures
                    .cmp(b_captures)
                    .then_with(|| b.upper_left_cmp(a))
            })
            .map(|(coord, _)| coord)
    }

    pub fn scores(&self) -> Scores {
        Scores {
            black: self.board.count(Color::Black),
            white: self.board.count(Color::White),
        }
    }

    /// True when neither player can move or the board is full
    pub fn is_game_over(&self) -> bool {
        self.board.is_full() || Color::ALL.iter().all(|player| !self.has_moves(*player))
    }

    /// The winner of a finished game. `None` while playing or on a tie.
    pub fn winner(&self) -> Option<Color> {
        if self.is_game_over() {
            self.scores().leader()
        } else {
            None
        }
    }

    /// Place a disc for `player` at `coord`, flip every bracketed run and
    /// hand the turn over.
    ///
    /// All checks run before anything changes, so a failed move leaves the
    /// game untouched.
    pub fn make_move(&mut self, coord: CubeCoord, player: Color) -> Result<Vec<GameEvent>, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if player != self.current_player {
            return Err(GameError::NotYourTurn);
        }
        if !self.board.get(&coord)?.is_empty() {
            return Err(GameError::IllegalMove(coord));
        }

        let flipped = self.board.captured_by(coord, player);
        if flipped.is_empty() {
            return Err(GameError::IllegalMove(coord));
        }

        self.board.set(coord, player.into())?;
        for captured in &flipped {
            self.board.set(*captured, player.into())?;
        }
        debug!(%player, at = %coord, flipped = flipped.len(), "disc placed");

        let mut events = vec![GameEvent::DiscPlaced {
            player,
            at: coord,
            flipped,
        }];
        events.extend(self.advance_turn());
        Ok(events)
    }

    /// End the current player's turn without placing a disc.
    ///
    /// If the opponent then has no legal move, the turn comes straight back.
    pub fn pass(&mut self) -> Vec<GameEvent> {
        let player = self.current_player;
        debug!(%player, "pass");

        let mut events = vec![GameEvent::Passed { player }];
        events.extend(self.advance_turn());
        events
    }

    /// Apply an action on behalf of `player`
    pub fn apply_action(&mut self, player: Color, action: GameAction) -> Result<Vec<GameEvent>, GameError> {
        match action {
            GameAction::Move(coord) => self.make_move(coord, player),
            GameAction::Pass => {
                if self.is_game_over() {
                    return Err(GameError::GameOver);
                }
                if player != self.current_player {
                    return Err(GameError::NotYourTurn);
                }
                Ok(self.pass())
            }
        }
    }

    fn advance_turn(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let previous = self.current_player;

        self.current_player = previous.opposite();
        if !self.has_legal_moves() {
            debug!(skipped = %self.current_player, "no legal moves, turn skipped");
            events.push(GameEvent::TurnSkipped {
                skipped: self.current_player,
                player: previous,
            });
            self.current_player = previous;
        }
        events.push(GameEvent::TurnChanged {
            player: self.current_player,
        });

        if self.is_game_over() {
            let winner = self.scores().leader();
            debug!(?winner, scores = ?self.scores(), "game over");
            events.push(GameEvent::GameOver { winner });
        }

        events
    }

    /// Serializable view of the game for external consumers
    pub fn snapshot(&self) -> GameSnapshot {
        let game_over = self.is_game_over();
        GameSnapshot {
            radius: self.radius(),
            current_player: self.current_player,
            discs: self
                .board
                .occupied()
                .map(|(coord, color)| DiscJson { coord, color })
                .collect(),
            scores: self.scores(),
            game_over,
            winner: if game_over { self.scores().leader() } else { None },
        }
    }
}

/// A placed disc, as it appears in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscJson {
    pub coord: CubeCoord,
    pub color: Color,
}

/// JSON-friendly view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub radius: u32,
    pub current_player: Color,
    pub discs: Vec<DiscJson>,
    pub scores: Scores,
    pub game_over: bool,
    pub winner: Option<Color>,
}

impl GameSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
