//! Neural network integration.
//!
//! The network itself lives in the training framework. This module owns the
//! boundary: the fixed-shape `BoardTensor` and the `StateEncoder` that turns
//! a `GameState` into one and back.
//!
//! ## Usage
//!
//! ```
//! use boop_zero::core::GameState;
//! use boop_zero::nn::{PlaneEncoder, StateEncoder};
//!
//! let encoder = PlaneEncoder;
//! let state = GameState::new(8);
//! let tensor = encoder.encode(&state);
//! assert_eq!(tensor.shape(), [9, 6, 6]);
//! assert_eq!(encoder.decode(&tensor).unwrap(), state);
//! ```

pub mod encoder;
pub mod tensor;

pub use encoder::{PlaneEncoder, StateEncoder};
pub use tensor::BoardTensor;
