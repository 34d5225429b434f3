//! Boop: a 6x6 placement game where new pieces push their neighbours.
//!
//! - Each player starts with kittens in inventory
//! - Placing a piece boops adjacent pieces one cell outwards
//! - Three kittens in a row graduate into cats
//! - Three cats in a row wins

mod game;
mod playout;

pub use game::BoopGame;
pub use playout::{random_playout, random_playouts, Playout, PlayoutStep};
