//! Move-evaluation strategies for computer players.
//!
//! Every strategy scores the legal moves of a position:
//! - MaximizeCaptures: as many flips as possible
//! - AvoidCornerAdjacency: never play next to a corner
//! - PreferCorners: take a corner whenever one is available
//! - OnePlyLookahead: minimize the opponent's best reply
//! - Composite: merge the results of several strategies
//!
//! The set is closed. A strategy is picked by name through [`StrategyKind`].

use crate::board::Color;
use crate::game::{GameError, GameState};
use crate::hex::CubeCoord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Score given to a corner by [`StrategyKind::PreferCorners`]
pub const CORNER_SCORE: i32 = i32::MAX;

/// A candidate move and how a strategy rated it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOption {
    pub coord: CubeCoord,
    pub score: i32,
}

impl MoveOption {
    pub fn new(coord: CubeCoord, score: i32) -> Self {
        Self { coord, score }
    }
}

/// Scores moves for a player without touching the game it is given.
pub trait Strategy {
    fn evaluate(&self, game: &GameState, player: Color) -> Vec<MoveOption>;
}

/// The available strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    MaximizeCaptures,
    AvoidCornerAdjacency,
    PreferCorners,
    OnePlyLookahead,
    Composite(Vec<StrategyKind>),
}

impl StrategyKind {
    /// Names accepted by [`FromStr`], in display order
    pub const NAMES: [&'static str; 5] = ["captures", "avoid-corners", "corners", "lookahead", "composite"];

    /// The composite used by computer players unless told otherwise
    pub fn standard_composite() -> Self {
        StrategyKind::Composite(vec![
            StrategyKind::MaximizeCaptures,
            StrategyKind::AvoidCornerAdjacency,
            StrategyKind::PreferCorners,
            StrategyKind::OnePlyLookahead,
        ])
    }
}

impl Default for StrategyKind {
    fn default() -> Self {
        Self::standard_composite()
    }
}

impl Strategy for StrategyKind {
    fn evaluate(&self, game: &GameState, player: Color) -> Vec<MoveOption> {
        match self {
            StrategyKind::MaximizeCaptures => maximize_captures(game, player),
            StrategyKind::AvoidCornerAdjacency => avoid_corner_adjacency(game, player),
            StrategyKind::PreferCorners => prefer_corners(game, player),
            StrategyKind::OnePlyLookahead => one_ply_lookahead(game, player),
            StrategyKind::Composite(parts) => composite(parts, game, player),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::MaximizeCaptures => "captures",
            StrategyKind::AvoidCornerAdjacency => "avoid-corners",
            StrategyKind::PreferCorners => "corners",
            StrategyKind::OnePlyLookahead => "lookahead",
            StrategyKind::Composite(_) => "composite",
        };
        f.write_str(name)
    }
}

impl FromStr for StrategyKind {
    type Err = GameError;

    /// Parse a strategy name. `composite` always means the standard composite.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "captures" | "maximize-captures" => Ok(StrategyKind::MaximizeCaptures),
            "avoid-corners" | "avoid-corner-adjacency" => Ok(StrategyKind::AvoidCornerAdjacency),
            "corners" | "prefer-corners" => Ok(StrategyKind::PreferCorners),
            "lookahead" | "minimax" => Ok(StrategyKind::OnePlyLookahead),
            "composite" => Ok(StrategyKind::standard_composite()),
            other => Err(GameError::InvalidOperand(format!(
                "unknown strategy '{}', expected one of: {}",
                other,
                StrategyKind::NAMES.join(", ")
            ))),
        }
    }
}

fn to_score(captures: u32) -> i32 {
    i32::try_from(captures).unwrap_or(i32::MAX)
}

fn maximize_captures(game: &GameState, player: Color) -> Vec<MoveOption> {
    game.legal_moves(player)
        .into_iter()
        .map(|coord| MoveOption::new(coord, to_score(game.calculate_captures(&coord, player))))
        .collect()
}

fn avoid_corner_adjacency(game: &GameState, player: Color) -> Vec<MoveOption> {
    let board = game.board();
    game.legal_moves(player)
        .into_iter()
        .filter(|coord| !board.is_next_to_corner(coord))
        .map(|coord| MoveOption::new(coord, to_score(game.calculate_captures(&coord, player))))
        .collect()
}

fn prefer_corners(game: &GameState, player: Color) -> Vec<MoveOption> {
    let board = game.board();
    game.legal_moves(player)
        .into_iter()
        .map(|coord| {
            let score = if board.is_corner(&coord) {
                CORNER_SCORE
            } else {
                to_score(game.calculate_captures(&coord, player))
            };
            MoveOption::new(coord, score)
        })
        .collect()
}

/// Play each move on a copy of the game and score it by the negated capture
/// count of the opponent's best reply.
fn one_ply_lookahead(game: &GameState, player: Color) -> Vec<MoveOption> {
    let opponent = player.opposite();
    game.legal_moves(player)
        .into_iter()
        .map(|coord| {
            let mut hypothetical = game.clone();
            hypothetical.set_current_player(player);
            let reply_captures = match hypothetical.make_move(coord, player) {
                Ok(_) => hypothetical
                    .find_best_move(opponent)
                    .map(|reply| hypothetical.calculate_captures(&reply, opponent))
                    .unwrap_or(0),
                Err(_) => 0,
            };
            MoveOption::new(coord, -to_score(reply_captures))
        })
        .collect()
}

/// Concatenate the sub-strategy results, drop exact duplicates and sort by
/// ascending score. The best option is therefore the *last* one.
fn composite(parts: &[StrategyKind], game: &GameState, player: Color) -> Vec<MoveOption> {
    let mut seen = HashSet::new();
    let mut options: Vec<MoveOption> = parts
        .iter()
        .flat_map(|part| part.evaluate(game, player))
        .filter(|option| seen.insert(*option))
        .collect();
    options.sort_by_key(|option| option.score);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(q: i32, r: i32, s: i32) -> CubeCoord {
        CubeCoord::new(q, r, s).unwrap()
    }

    fn coords(options: &[MoveOption]) -> HashSet<CubeCoord> {
        options.iter().map(|o| o.coord).collect()
    }

    #[test]
    fn test_maximize_captures_covers_legal_moves() {
        let game = GameState::new(3).unwrap();
        let options = StrategyKind::MaximizeCaptures.evaluate(&game, Color::Black);
        let legal: HashSet<_> = game.legal_moves(Color::Black).into_iter().collect();

        assert_eq!(coords(&options), legal);
        assert_eq!(options.len(), legal.len());
        assert!(options.iter().all(|o| o.score == 1));
    }

    #[test]
    fn test_avoid_corner_adjacency_drops_moves() {
        // On a radius 2 board the opening moves sit next to corners
        let game = GameState::new(2).unwrap();
        let options = StrategyKind::AvoidCornerAdjacency.evaluate(&game, Color::Black);
        let board = game.board();

        for option in &options {
            assert!(!board.is_next_to_corner(&option.coord));
        }
        let excluded = game
            .legal_moves(Color::Black)
            .into_iter()
            .filter(|c| board.is_next_to_corner(c))
            .count();
        assert!(excluded > 0);
        assert_eq!(options.len() + excluded, game.legal_moves(Color::Black).len());
    }

    #[test]
    fn test_prefer_corners_scores_corner_highest() {
        // Black can take the corner (2,-2,0) or the inner cell (1,0,-1)
        let game = GameState::from_position(
            2,
            &[
                (cube(-1, 0, 1), Color::Black),
                (cube(0, 0, 0), Color::White),
                (cube(1, -2, 1), Color::White),
                (cube(0, -2, 2), Color::Black),
            ],
            Color::Black,
        )
        .unwrap();
        let options = StrategyKind::PreferCorners.evaluate(&game, Color::Black);

        assert_eq!(
            options,
            vec![
                MoveOption::new(cube(1, 0, -1), 1),
                MoveOption::new(cube(2, -2, 0), CORNER_SCORE),
            ]
        );
    }

    #[test]
    fn test_lookahead_does_not_touch_game() {
        let game = GameState::new(3).unwrap();
        let before = game.clone();
        let options = StrategyKind::OnePlyLookahead.evaluate(&game, Color::Black);

        assert_eq!(game, before);
        assert_eq!(options.len(), 6);
        assert!(options.iter().all(|o| o.score <= 0));
    }

    #[test]
    fn test_lookahead_scores_opponent_reply() {
        let game = GameState::new(3).unwrap();
        let mv = cube(-1, 2, -1);
        let options = StrategyKind::OnePlyLookahead.evaluate(&game, Color::Black);
        let option = options.iter().find(|o| o.coord == mv).unwrap();

        let mut expected = game.clone();
        expected.make_move(mv, Color::Black).unwrap();
        let reply = expected.find_best_move(Color::White).unwrap();
        let reply_captures = expected.calculate_captures(&reply, Color::White) as i32;

        assert_eq!(option.score, -reply_captures);
    }

    #[test]
    fn test_lookahead_without_opponent_reply() {
        // Black's only move takes White's last disc, leaving no reply
        let game = GameState::from_position(
            2,
            &[(cube(0, 0, 0), Color::White), (cube(1, 0, -1), Color::Black)],
            Color::Black,
        )
        .unwrap();
        let options = StrategyKind::OnePlyLookahead.evaluate(&game, Color::Black);

        assert_eq!(options, vec![MoveOption::new(cube(-1, 0, 1), 0)]);
    }

    #[test]
    fn test_composite_keeps_first_occurrence_order() {
        let game = GameState::new(3).unwrap();
        let doubled = StrategyKind::Composite(vec![
            StrategyKind::MaximizeCaptures,
            StrategyKind::MaximizeCaptures,
        ]);
        let options = doubled.evaluate(&game, Color::Black);

        // All scores tie, so the stable sort leaves the first pass in place
        assert_eq!(options, StrategyKind::MaximizeCaptures.evaluate(&game, Color::Black));
    }

    #[test]
    fn test_lookahead_for_player_not_on_turn() {
        // Evaluating for the side that is not to move must still work
        let game = GameState::new(3).unwrap();
        let options = StrategyKind::OnePlyLookahead.evaluate(&game, Color::White);
        assert_eq!(options.len(), game.legal_moves(Color::White).len());
    }

    #[test]
    fn test_composite_dedups_and_sorts_ascending() {
        let game = GameState::new(3).unwrap();
        let options = StrategyKind::standard_composite().evaluate(&game, Color::Black);

        let unique: HashSet<_> = options.iter().collect();
        assert_eq!(unique.len(), options.len());
        assert!(options.windows(2).all(|pair| pair[0].score <= pair[1].score));

        // No opening move touches a corner, so the capture-based strategies
        // produce identical options that merge into one
        let captures = StrategyKind::MaximizeCaptures.evaluate(&game, Color::Black);
        for option in &captures {
            assert_eq!(options.iter().filter(|o| *o == option).count(), 1);
        }
    }

    #[test]
    fn test_empty_when_no_moves() {
        let game = GameState::new(1).unwrap();
        for name in StrategyKind::NAMES {
            let kind: StrategyKind = name.parse().unwrap();
            assert!(kind.evaluate(&game, Color::Black).is_empty());
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("captures".parse::<StrategyKind>().unwrap(), StrategyKind::MaximizeCaptures);
        assert_eq!("Minimax".parse::<StrategyKind>().unwrap(), StrategyKind::OnePlyLookahead);
        assert_eq!("composite".parse::<StrategyKind>().unwrap(), StrategyKind::default());
        assert!(matches!(
            "random".parse::<StrategyKind>(),
            Err(GameError::InvalidOperand(_))
        ));
        for name in StrategyKind::NAMES {
            assert_eq!(name.parse::<StrategyKind>().unwrap().to_string(), name);
        }
    }
}
