//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Boop is strictly two-player. The training framework talks about players
//! as `+1` and `-1`; inside the engine they are `Player::A` and `Player::B`.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
///
/// `A` moves first and corresponds to the framework's `+1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Both players in seat order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// Map a framework player value to a player: `+1` is `A`, `-1` is `B`.
    #[must_use]
    pub const fn from_sign(sign: i32) -> Option<Self> {
        match sign {
            1 => Some(Player::A),
            -1 => Some(Player::B),
            _ => None,
        }
    }

    /// The framework player value: `+1` for `A`, `-1` for `B`.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    /// Seat index (0 for `A`, 1 for `B`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use boop_zero::core::{Player, PlayerMap};
///
/// let mut placed: PlayerMap<u8> = PlayerMap::with_value(0);
/// placed[Player::B] = 3;
/// assert_eq!(placed[Player::A], 0);
/// assert_eq!(placed[Player::B], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
