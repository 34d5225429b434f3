//! Rule configuration.
//!
//! The engine owns one `BoopConfig` value handed in at construction time.
//! Nothing here is global: two games with different configs can run side
//! by side.

use serde::{Deserialize, Serialize};

/// What a graduated kitten triple turns into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromotionRule {
    /// One kitten of the three returns as a cat, the other two return as
    /// kittens: kitten inventory +2, cat inventory +1.
    #[default]
    PromoteOne,
    /// All three kittens return as cats (tabletop rule): cat inventory +3.
    PromoteAll,
}

/// Boop rule configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoopConfig {
    /// Kittens in each player's starting inventory. Also the total number
    /// of pieces a player ever owns.
    pub kittens_per_player: u8,

    /// Push adjacent pieces away from a newly placed piece.
    pub booping: bool,

    /// Promotion arithmetic for kitten triples.
    pub promotion: PromotionRule,

    /// Value reported for a drawn game. Must be non-zero so the framework
    /// can tell a draw from an ongoing game.
    pub draw_value: f32,
}

impl Default for BoopConfig {
    fn default() -> Self {
        Self {
            kittens_per_player: 8,
            booping: true,
            promotion: PromotionRule::PromoteOne,
            draw_value: 1e-4,
        }
    }
}

impl BoopConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting kitten count per player.
    pub fn with_kittens_per_player(mut self, kittens: u8) -> Self {
        self.kittens_per_player = kittens;
        self
    }

    /// Enable or disable the push mechanic.
    pub fn with_booping(mut self, booping: bool) -> Self {
        self.booping = booping;
        self
    }

    pub fn with_promotion(mut self, promotion: PromotionRule) -> Self {
        self.promotion = promotion;
        self
    }

    pub fn with_draw_value(mut self, draw_value: f32) -> Self {
        self.draw_value = draw_value;
        self
    }
}
