//! Game actions that players can take.
//!
//! This module defines the two possible actions in the game, the events
//! that result from those actions, and the listener contract used to
//! observe them.

use crate::board::Color;
use crate::hex::CubeCoord;
use serde::{Deserialize, Serialize};

/// All possible actions a player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Place a disc at a cell
    Move(CubeCoord),
    /// Give up the turn
    Pass,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A disc was placed and the bracketed discs flipped
    DiscPlaced {
        player: Color,
        at: CubeCoord,
        flipped: Vec<CubeCoord>,
    },

    /// A player passed
    Passed { player: Color },

    /// The opponent had no legal move, so control stayed with `player`
    TurnSkipped { skipped: Color, player: Color },

    /// It is now `player`'s turn
    TurnChanged { player: Color },

    /// Nobody can move any more. `winner` is `None` on a tie.
    GameOver { winner: Option<Color> },
}

/// Receives turn and game-over notifications.
pub trait GameListener {
    /// Called with the player to move after every successful action
    fn on_player_turn(&mut self, player: Color);

    /// Called once the game has ended
    fn on_game_over(&mut self, winner: Option<Color>);
}

/// Forward the notification events in `events` to `listener`, in order.
pub fn dispatch<L: GameListener + ?Sized>(events: &[GameEvent], listener: &mut L) {
    for event in events {
        match event {
            GameEvent::TurnChanged { player } => listener.on_player_turn(*player),
            GameEvent::GameOver { winner } => listener.on_game_over(*winner),
            GameEvent::DiscPlaced { .. } | GameEvent::Passed { .. } | GameEvent::TurnSkipped { .. } => {}
        }
    }
}
