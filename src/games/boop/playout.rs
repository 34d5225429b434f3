//! Uniform-random self-play through the framework interface.
//!
//! Used for smoke tests, benchmarks and quick data generation. Every call
//! owns a fresh `GameRng`, so the same seed always replays the same game.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{GameRng, Player, Result};
use crate::nn::tensor::BoardTensor;
use crate::rules::{Outcome, TwoPlayerGame};

use super::game::BoopGame;

/// One decision: the board before the move, who moved, and the action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayoutStep {
    pub board: BoardTensor,
    pub player: Player,
    pub action: usize,
}

/// A finished (or truncated) random game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playout {
    pub steps: Vec<PlayoutStep>,
    pub final_board: BoardTensor,
    /// Player to act on `final_board`.
    pub final_player: Player,
    /// Result from player A's point of view.
    pub outcome: Outcome,
}

impl Playout {
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The winner, if the game ended with one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Outcome::Win => Some(Player::A),
            Outcome::Loss => Some(Player::B),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }
}

/// Play uniformly random legal actions from the initial board.
///
/// Stops when the game ends, when the player to act has no legal action, or
/// after `max_moves` actions.
pub fn random_playout(game: &BoopGame, seed: u64, max_moves: usize) -> Result<Playout> {
    play(game, GameRng::new(seed), max_moves)
}

/// Play `count` independent games, each on its own fork of `seed`.
pub fn random_playouts(
    game: &BoopGame,
    seed: u64,
    count: usize,
    max_moves: usize,
) -> Result<Vec<Playout>> {
    let mut root = GameRng::new(seed);
    (0..count)
        .map(|_| play(game, root.fork(), max_moves))
        .collect()
}

fn play(game: &BoopGame, mut rng: GameRng, max_moves: usize) -> Result<Playout> {
    let seed = rng.seed();
    let mut board = game.initial_board();
    let mut player = Player::A;
    let mut steps = Vec::new();

    while steps.len() < max_moves {
        if game.game_ended(&board, player)?.is_terminal() {
            break;
        }
        let mask = game.valid_moves(&board, player)?;
        let Some(action) = rng.choose_legal(&mask) else {
            warn!(%player, "no legal action, stopping playout");
            break;
        };

        let (next_board, next_player) = game.next_state(&board, player, action as i64)?;
        steps.push(PlayoutStep {
            board,
            player,
            action,
        });
        board = next_board;
        player = next_player;
    }

    let outcome = game.game_ended(&board, Player::A)?;
    debug!(seed, moves = steps.len(), ?outcome, "playout finished");

    Ok(Playout {
        steps,
        final_board: board,
        final_player: player,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playout_is_deterministic() {
        let game = BoopGame::default();
        let a = random_playout(&game, 7, 200).unwrap();
        let b = random_playout(&game, 7, 200).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_playout_respects_max_moves() {
        let game = BoopGame::default();
        let playout = random_playout(&game, 1, 5).unwrap();
        assert_eq!(playout.len(), 5);
        assert_eq!(playout.steps[0].player, Player::A);
        assert_eq!(playout.steps[1].player, Player::B);
        assert_eq!(playout.outcome, Outcome::Ongoing);
        assert_eq!(playout.winner(), None);
    }

    #[test]
    fn test_zero_moves() {
        let game = BoopGame::default();
        let playout = random_playout(&game, 3, 0).unwrap();
        assert!(playout.is_empty());
        assert_eq!(playout.final_board, game.initial_board());
    }

    #[test]
    fn test_every_recorded_action_was_legal() {
        let game = BoopGame::default();
        let playout = random_playout(&game, 11, 300).unwrap();
        for step in &playout.steps {
            let mask = game.valid_moves(&step.board, step.player).unwrap();
            assert_eq!(mask[step.action], 1);
        }
    }

    #[test]
    fn test_batch_games_are_independent() {
        let game = BoopGame::default();
        let batch = random_playouts(&game, 3, 4, 30).unwrap();
        assert_eq!(batch.len(), 4);
        assert_ne!(batch[0], batch[1]);

        let prefix = random_playouts(&game, 3, 2, 30).unwrap();
        assert_eq!(&batch[..2], prefix.as_slice());
    }

    #[test]
    fn test_playout_serialization() {
        let game = BoopGame::default();
        let playout = random_playout(&game, 5, 4).unwrap();
        let json = serde_json::to_string(&playout).unwrap();
        let deserialized: Playout = serde_json::from_str(&json).unwrap();
        assert_eq!(playout, deserialized);
    }
}
