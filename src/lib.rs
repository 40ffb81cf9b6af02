//! # twenty48
//!
//! Core shift-and-merge engine for the 2048 sliding-tile puzzle.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: Input loops, rendering, and win/loss presentation
//!    belong to the host. The crate exposes the grid mutation engine and a
//!    thin token-dispatch controller.
//!
//! 2. **Deterministic**: The spawn RNG is seeded at construction, so a fixed
//!    seed replays an identical game. Tests script exact tile sequences.
//!
//! 3. **In-place mutation**: One grid per session, mutated only through
//!    `shift_and_merge`/`spawn_tile`, never rebuilt mid-game.
//!
//! ## Modules
//!
//! - `core`: Tiles, directions, RNG
//! - `grid`: The board and the shift-and-merge sweep
//! - `game`: Controller dispatching direction tokens
//!
//! ## Example
//!
//! ```
//! use twenty48::{Game, MoveOutcome};
//!
//! let mut game = Game::new(42);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! match game.play_move("left") {
//!     MoveOutcome::Moved => println!("{}", game.grid()),
//!     MoveOutcome::Blocked => println!("Move not possible!"),
//!     MoveOutcome::UnknownDirection => println!("Invalid move"),
//! }
//! ```

pub mod core;
pub mod game;
pub mod grid;

// Re-export commonly used types
pub use crate::core::{Direction, GameRng, GameRngState, Tile};
pub use crate::game::{Game, MoveOutcome, DEFAULT_SIZE};
pub use crate::grid::{EmptySlots, Grid};
