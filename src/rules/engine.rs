//! Two-player game contract for AlphaZero-style frameworks.
//!
//! The framework never looks inside a board. It asks the game for legal
//! moves, applies actions by flat index, and reads back outcomes and
//! symmetries. Implementations:
//! - Must be deterministic: the same board, player and action always give
//!   the same result
//! - Report outcomes from the perspective of the player passed in
//! - Reject malformed input with an error rather than panicking

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::core::player::Player;
use crate::core::Result;

/// Status of a game from one player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has won yet.
    Ongoing,
    /// The queried player has won.
    Win,
    /// The queried player's opponent has won.
    Loss,
    /// Both players met the win condition at once.
    Draw,
}

impl Outcome {
    /// Framework value: `0` ongoing, `1` win, `-1` loss, `draw_value` draw.
    ///
    /// `draw_value` must be non-zero so a draw is distinguishable from an
    /// ongoing game.
    #[must_use]
    pub fn value(self, draw_value: f32) -> f32 {
        match self {
            Outcome::Ongoing => 0.0,
            Outcome::Win => 1.0,
            Outcome::Loss => -1.0,
            Outcome::Draw => draw_value,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// Rules contract used by the training framework.
///
/// ## Implementation Notes
///
/// - `next_state`: returns the player to act next, which may be the same
///   player when a turn has several steps
/// - `valid_moves`: a 0/1 mask over the whole action space
/// - `symmetries`: identity first; policies are permuted alongside boards
pub trait TwoPlayerGame {
    /// Board representation exchanged with the framework.
    type Board;

    /// Board at the start of a game.
    fn initial_board(&self) -> Self::Board;

    /// `(rows, cols)` of the playing area.
    fn board_size(&self) -> (usize, usize);

    /// Number of distinct action indices.
    fn action_size(&self) -> usize;

    /// Apply `action` for `player`, returning the new board and the next
    /// player to act.
    fn next_state(
        &self,
        board: &Self::Board,
        player: Player,
        action: i64,
    ) -> Result<(Self::Board, Player)>;

    /// Legal-action mask of length `action_size()`.
    fn valid_moves(&self, board: &Self::Board, player: Player) -> Result<Vec<u8>>;

    /// Game status from `player`'s point of view.
    fn game_ended(&self, board: &Self::Board, player: Player) -> Result<Outcome>;

    /// The board as seen by `player` when it is re-labelled as the first
    /// player. Applying it twice for the same player restores the board.
    fn canonical_form(&self, board: &Self::Board, player: Player) -> Self::Board;

    /// Every symmetric variant of `(board, pi)`, identity first.
    fn symmetries(&self, board: &Self::Board, pi: &[f32]) -> Result<Vec<(Self::Board, Vec<f32>)>>;

    /// Lossless string key for the board.
    fn string_representation(&self, board: &Self::Board) -> Result<String>;

    /// Hash of `string_representation`, for transposition tables.
    fn fingerprint_key(&self, board: &Self::Board) -> Result<u64> {
        let mut hasher = FxHasher::default();
        self.string_representation(board)?.hash(&mut hasher);
        Ok(hasher.finish())
    }
}
