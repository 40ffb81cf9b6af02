//! Move directions.
//!
//! The four directions a move can shift the board. Each direction carries a
//! `(row, col)` step delta used both by the validity check and by the
//! slide/merge sweep; `parse` maps the textual tokens a host feeds in.

use serde::{Deserialize, Serialize};

/// A direction to shift and merge tiles in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// One-step `(row, col)` delta for this direction.
    ///
    /// ```
    /// use twenty48::core::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (-1, 0));
    /// assert_eq!(Direction::Right.delta(), (0, 1));
    /// ```
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Parse a direction token.
    ///
    /// Trims surrounding whitespace and ignores case. Returns `None` for
    /// anything other than `up`, `down`, `left`, or `right`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Whether tiles travel toward higher indices (down/right) or lower
    /// (up/left).
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{name}")
    }
}
