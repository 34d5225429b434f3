//! Core engine types: players, pieces, state, moves, errors, configuration.
//!
//! Everything here is a plain value. The game facade in `games::boop`
//! composes these with the tensor codec in `nn`.

pub mod player;
pub mod piece;
pub mod error;
pub mod config;
pub mod action;
pub mod state;
pub mod rng;

pub use player::{Player, PlayerMap};
pub use piece::{Cell, Piece, Rank, BOARD_SIZE, CELL_COUNT};
pub use error::{BoopError, Result};
pub use config::{BoopConfig, PromotionRule};
pub use action::{Graduation, Line, Move, Triple, ACTION_SPACE_SIZE};
pub use state::{Candidates, GameState, Phase};
pub use rng::GameRng;
