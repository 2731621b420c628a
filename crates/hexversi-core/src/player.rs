//! Players that decide what to do on their turn.
//!
//! This module contains:
//! - The `Player` trait used by a [`crate::session::Session`] to ask for actions
//! - `ComputerPlayer`, which picks moves with a [`StrategyKind`]
//! - `PlayerKind`, the seat configuration parsed from the command line

use crate::actions::GameAction;
use crate::board::Color;
use crate::game::{GameError, GameState};
use crate::strategy::{Strategy, StrategyKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Something that can take a turn.
pub trait Player {
    /// The color this player plays
    fn color(&self) -> Color;

    /// Decide on an action for the current position. `None` means the player
    /// abandons the game.
    fn choose_action(&mut self, game: &GameState) -> Option<GameAction>;
}

/// Who sits in a seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl FromStr for PlayerKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            other => Err(GameError::InvalidOperand(format!(
                "invalid player type '{}', expected 'human' or 'computer'",
                other
            ))),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => f.write_str("human"),
            PlayerKind::Computer => f.write_str("computer"),
        }
    }
}

/// A player driven entirely by a strategy
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    pub color: Color,
    pub strategy: StrategyKind,
}

impl ComputerPlayer {
    pub fn new(color: Color, strategy: StrategyKind) -> Self {
        Self { color, strategy }
    }

    /// Pick an action for the player on turn in `game`.
    ///
    /// Plays the first option the strategy lists and passes when it lists
    /// none. For the composite strategy the list is sorted ascending, so the
    /// first option is its lowest-scored one.
    // TODO: switch to the last option once the composite ordering is settled
    pub fn select(&self, game: &GameState) -> GameAction {
        let player = game.current_player();
        if player != self.color {
            debug!(seat = %self.color, on_turn = %player, "computer asked out of turn");
        }
        let options = self.strategy.evaluate(game, player);
        match options.first() {
            Some(option) => {
                debug!(player = %player, strategy = %self.strategy, at = %option.coord, score = option.score, "computer move");
                GameAction::Move(option.coord)
            }
            None => {
                debug!(player = %player, strategy = %self.strategy, "computer pass");
                GameAction::Pass
            }
        }
    }
}

impl Player for ComputerPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_action(&mut self, game: &GameState) -> Option<GameAction> {
        Some(self.select(game))
    }
}
