//! Hexversi - Reversi on a hexagonal board
//!
//! This crate provides the rules engine and computer opponents:
//! - Cube coordinate system for the hexagonal grid
//! - Board representation with capture ray casting
//! - Game state machine with move, pass and game-over rules
//! - Move-scoring strategies, including a one-ply lookahead
//!
//! # Modules
//!
//! - [`hex`]: Cube coordinates and the six directions
//! - [`board`]: Cells, colors and the hexagon of a given radius
//! - [`game`]: Turn protocol, legality and scoring
//! - [`actions`]: Actions, events and the listener contract
//! - [`strategy`]: Move evaluation for computer players
//! - [`player`]: Computer players and seat configuration
//! - [`session`]: Turn loop between two players
//! - [`render`]: Text rendering of the board

pub mod actions;
pub mod board;
pub mod game;
pub mod hex;
pub mod player;
pub mod render;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use actions::{dispatch, GameAction, GameEvent, GameListener};
pub use board::{Board, CellState, Color, MAX_RADIUS};
pub use game::{GameError, GameSnapshot, GameState, Scores, DEFAULT_RADIUS};
pub use hex::{CubeCoord, DIRECTIONS};
pub use player::{ComputerPlayer, Player, PlayerKind};
pub use render::TextView;
pub use session::{Session, SessionOutcome};
pub use strategy::{MoveOption, Strategy, StrategyKind};
