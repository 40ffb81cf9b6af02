//! Tiles: the numbered pieces sliding around the grid.
//!
//! A tile is a value plus its current board position. The value is always a
//! power of two: freshly spawned tiles start at 2 or 4 (equal probability)
//! and only ever change by doubling when an equal-valued neighbor merges
//! into them. The position is kept in sync by the grid on every slide step.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// A single tile on the board.
///
/// Invariant: `value` is a power of two, at least 2. The grid keeps
/// `(row, col)` matching the slot the tile currently occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Current value (2, 4, 8, ...).
    pub value: u32,
    /// Row of the slot holding this tile.
    pub row: usize,
    /// Column of the slot holding this tile.
    pub col: usize,
}

impl Tile {
    /// Create a tile with an explicit value (scenario setup, tests).
    #[must_use]
    pub const fn new(row: usize, col: usize, value: u32) -> Self {
        Self { value, row, col }
    }

    /// Spawn a tile with value 2 or 4, chosen with equal probability.
    ///
    /// Consumes exactly one draw from the RNG.
    #[must_use]
    pub fn spawn(row: usize, col: usize, rng: &mut GameRng) -> Self {
        let value = if rng.gen_bool(0.5) { 2 } else { 4 };
        Self { value, row, col }
    }

    /// Double this tile's value.
    ///
    /// Only called by the merge step, which has already confirmed the
    /// incoming tile holds an equal value.
    pub fn double(&mut self) {
        self.value *= 2;
    }

    /// Re-sync the stored position after the grid slides this tile.
    pub fn set_position(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }

    /// The stored position as a `(row, col)` pair.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let tile = Tile::new(1, 2, 8);
        assert_eq!(tile.value, 8);
        assert_eq!(tile.position(), (1, 2));
    }

    #[test]
    fn test_spawn_values_are_two_or_four() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            let tile = Tile::spawn(0, 0, &mut rng);
            assert!(tile.value == 2 || tile.value == 4);
        }
    }

    #[test]
    fn test_spawn_is_deterministic() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        for _ in 0..50 {
            assert_eq!(
                Tile::spawn(0, 0, &mut rng1).value,
                Tile::spawn(0, 0, &mut rng2).value
            );
        }
    }

    #[test]
    fn test_spawn_produces_both_values() {
        let mut rng = GameRng::new(42);

        let values: Vec<u32> = (0..100).map(|_| Tile::spawn(0, 0, &mut rng).value).collect();
        assert!(values.contains(&2));
        assert!(values.contains(&4));
    }

    #[test]
    fn test_double() {
        let mut tile = Tile::new(0, 0, 2);

        tile.double();
        assert_eq!(tile.value, 4);

        tile.double();
        assert_eq!(tile.value, 8);
    }

    #[test]
    fn test_set_position() {
        let mut tile = Tile::new(0, 0, 2);

        tile.set_position(3, 1);
        assert_eq!(tile.position(), (3, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Tile::new(0, 0, 128)), "128");
    }

    #[test]
    fn test_serialization() {
        let tile = Tile::new(2, 3, 16);
        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, deserialized);
    }
}
