//! Core types: tiles, directions, RNG.

pub mod direction;
pub mod rng;
pub mod tile;

pub use direction::Direction;
pub use rng::{GameRng, GameRngState};
pub use tile::Tile;
