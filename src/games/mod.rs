//! Game implementations.

pub mod boop;
