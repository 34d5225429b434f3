//! # boop-zero
//!
//! The Boop board game as a plug-in for AlphaZero-style training.
//!
//! ## Design Principles
//!
//! 1. **Stateless Facade**: `BoopGame` holds only configuration. Every call
//!    decodes the board it is handed, so the framework owns all state.
//!
//! 2. **Two Codecs, One Truth**: `GameState` is the human-readable form.
//!    `BoardTensor` (9x6x6) and the flat action index are lossless views of
//!    it for the network.
//!
//! 3. **Errors, Not Panics**: malformed tensors and illegal actions come
//!    back as `BoopError`.
//!
//! ## Turn Structure
//!
//! A turn is a placement, optionally followed by one or more graduation
//! choices by the same player. `next_state` reports who acts next, so the
//! framework never needs to know about the sub-phase.
//!
//! ## Modules
//!
//! - `core`: Players, pieces, cells, state, moves, configuration, RNG
//! - `nn`: Board tensor and the state encoder
//! - `rules`: `TwoPlayerGame` contract, outcomes, board symmetries
//! - `games`: The Boop facade and random playouts
//!
//! ## Example
//!
//! ```
//! use boop_zero::{BoopGame, Outcome, Player, TwoPlayerGame};
//!
//! let game = BoopGame::default();
//! let board = game.initial_board();
//! let (board, next) = game.next_state(&board, Player::A, 14).unwrap();
//! assert_eq!(next, Player::B);
//! assert_eq!(game.game_ended(&board, next).unwrap(), Outcome::Ongoing);
//! ```

pub mod core;
pub mod nn;
pub mod rules;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoopConfig, BoopError, Cell, GameRng, GameState, Graduation, Line, Move, Phase, Piece,
    Player, PlayerMap, PromotionRule, Rank, Result, Triple, ACTION_SPACE_SIZE, BOARD_SIZE,
};

pub use crate::nn::{BoardTensor, PlaneEncoder, StateEncoder};

pub use crate::rules::{Outcome, Symmetry, TwoPlayerGame};

pub use crate::games::boop::{random_playout, random_playouts, BoopGame, Playout, PlayoutStep};
