//! Turn loop that seats two players at a game.

use crate::actions::{dispatch, GameAction, GameEvent, GameListener};
use crate::board::Color;
use crate::game::{GameError, GameState, Scores};
use crate::player::Player;
use tracing::{debug, warn};

/// Passes in a row, with no disc placed in between, after which a session
/// stops instead of looping forever.
pub const MAX_CONSECUTIVE_PASSES: u32 = 2;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The game reached its natural end
    Finished { winner: Option<Color>, scores: Scores },
    /// Both sides kept passing while moves were still available
    Stalled { scores: Scores },
    /// A player walked away
    Abandoned { by: Color },
}

/// A game plus the two players taking turns in it
pub struct Session {
    game: GameState,
    black: Box<dyn Player>,
    white: Box<dyn Player>,
    consecutive_passes: u32,
}

impl Session {
    pub fn new(game: GameState, black: Box<dyn Player>, white: Box<dyn Player>) -> Self {
        debug_assert_eq!(black.color(), Color::Black);
        debug_assert_eq!(white.color(), Color::White);
        Self {
            game,
            black,
            white,
            consecutive_passes: 0,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Ask the player on turn for an action and apply it.
    ///
    /// Returns `Ok(None)` when the player abandons the game.
    pub fn play_turn(&mut self) -> Result<Option<Vec<GameEvent>>, GameError> {
        let color = self.game.current_player();
        let player = match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        };
        let Some(action) = player.choose_action(&self.game) else {
            return Ok(None);
        };

        let events = self.game.apply_action(color, action)?;
        match action {
            GameAction::Pass => self.consecutive_passes += 1,
            GameAction::Move(_) => self.consecutive_passes = 0,
        }
        Ok(Some(events))
    }

    /// Play until the game ends, forwarding notifications to `listener`.
    pub fn run<L: GameListener + ?Sized>(&mut self, listener: &mut L) -> Result<SessionOutcome, GameError> {
        listener.on_player_turn(self.game.current_player());

        while !self.game.is_game_over() {
            if self.consecutive_passes >= MAX_CONSECUTIVE_PASSES {
                warn!(passes = self.consecutive_passes, "both players keep passing, stopping");
                return Ok(SessionOutcome::Stalled {
                    scores: self.game.scores(),
                });
            }

            let color = self.game.current_player();
            match self.play_turn()? {
                Some(events) => dispatch(&events, listener),
                None => {
                    debug!(player = %color, "player left the game");
                    return Ok(SessionOutcome::Abandoned { by: color });
                }
            }
        }

        Ok(SessionOutcome::Finished {
            winner: self.game.winner(),
            scores: self.game.scores(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ComputerPlayer;
    use crate::strategy::StrategyKind;

    #[derive(Default)]
    struct Tracker {
        turns: usize,
        winner: Option<Option<Color>>,
    }

    impl GameListener for Tracker {
        fn on_player_turn(&mut self, _player: Color) {
            self.turns += 1;
        }

        fn on_game_over(&mut self, winner: Option<Color>) {
            self.winner = Some(winner);
        }
    }

    struct Quitter(Color);

    impl Player for Quitter {
        fn color(&self) -> Color {
            self.0
        }

        fn choose_action(&mut self, _game: &GameState) -> Option<GameAction> {
            None
        }
    }

    fn computer(color: Color, strategy: StrategyKind) -> Box<dyn Player> {
        Box::new(ComputerPlayer::new(color, strategy))
    }

    #[test]
    fn test_computer_vs_computer_finishes() {
        let game = GameState::new(3).unwrap();
        let mut session = Session::new(
            game,
            computer(Color::Black, StrategyKind::MaximizeCaptures),
            computer(Color::White, StrategyKind::OnePlyLookahead),
        );
        let mut tracker = Tracker::default();
        let outcome = session.run(&mut tracker).unwrap();

        match outcome {
            SessionOutcome::Finished { winner, scores } => {
                assert!(session.game().is_game_over());
                assert_eq!(winner, scores.leader());
                assert_eq!(tracker.winner, Some(winner));
            }
            other => panic!("expected a finished game, got {:?}", other),
        }
        assert!(tracker.turns > 1);
    }

    #[test]
    fn test_abandoned_session() {
        let game = GameState::new(3).unwrap();
        let mut session = Session::new(
            game,
            Box::new(Quitter(Color::Black)),
            computer(Color::White, StrategyKind::default()),
        );
        let outcome = session.run(&mut Tracker::default()).unwrap();
        assert_eq!(outcome, SessionOutcome::Abandoned { by: Color::Black });
    }

    #[test]
    fn test_stalled_session_stops() {
        // Neither side will play next to a corner, and on radius 2 every
        // opening move does
        let game = GameState::new(2).unwrap();
        let mut session = Session::new(
            game,
            computer(Color::Black, StrategyKind::AvoidCornerAdjacency),
            computer(Color::White, StrategyKind::AvoidCornerAdjacency),
        );
        let outcome = session.run(&mut Tracker::default()).unwrap();
        assert_eq!(
            outcome,
            SessionOutcome::Stalled {
                scores: Scores { black: 3, white: 3 }
            }
        );
    }
}
