//! Game contract and board symmetries.
//!
//! `TwoPlayerGame` is the seam the training framework calls through;
//! `Symmetry` supplies the dihedral transforms used for data augmentation.

pub mod engine;
pub mod symmetry;

pub use engine::{Outcome, TwoPlayerGame};
pub use symmetry::Symmetry;
