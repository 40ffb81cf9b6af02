//! Game controller: token dispatch over the grid engine.
//!
//! A host (CLI loop, test harness) hands `play_move` a direction token and
//! gets back a three-way [`MoveOutcome`]. The controller never mutates the
//! board for an unknown token or a blocked direction; a host typically
//! renders the grid after `Moved` and reports the other two outcomes.

use serde::{Deserialize, Serialize};

use crate::core::Direction;
use crate::grid::Grid;

/// Default board side length.
pub const DEFAULT_SIZE: usize = 4;

/// What happened to a requested move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The board changed; a new tile has spawned.
    Moved,
    /// The direction is known but no tile can slide or merge that way.
    Blocked,
    /// The token is not one of `up`/`down`/`left`/`right`.
    UnknownDirection,
}

impl MoveOutcome {
    /// Whether the board changed.
    #[must_use]
    pub const fn moved(self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }
}

/// One game session: a grid plus the direction dispatch.
pub struct Game {
    grid: Grid,
}

impl Game {
    /// Start a game on the default 4×4 board.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_size(DEFAULT_SIZE, seed)
    }

    /// Start a game on a `size × size` board.
    #[must_use]
    pub fn with_size(size: usize, seed: u64) -> Self {
        Self {
            grid: Grid::new(size, seed),
        }
    }

    /// Wrap an existing board (scenario setup, tests).
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// The current board, for display.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Dispatch a textual direction token.
    ///
    /// Unknown tokens and blocked directions leave the board untouched.
    pub fn play_move(&mut self, token: &str) -> MoveOutcome {
        let Some(direction) = Direction::parse(token) else {
            return MoveOutcome::UnknownDirection;
        };
        self.play_direction(direction)
    }

    /// Apply an already-parsed direction.
    pub fn play_direction(&mut self, direction: Direction) -> MoveOutcome {
        if self.grid.shift_and_merge(direction) {
            MoveOutcome::Moved
        } else {
            MoveOutcome::Blocked
        }
    }
}
