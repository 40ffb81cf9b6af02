//! The board: slot ownership, spawning, and the shift-and-merge sweep.
//!
//! ## Board representation
//!
//! A `size × size` board stored row-major as `Vec<Option<Tile>>`. Each slot
//! holds at most one tile, and a tile's stored `(row, col)` always matches
//! the slot that owns it. The grid is mutated in place by every move and
//! never rebuilt mid-game.
//!
//! ## Move semantics
//!
//! `shift_and_merge` is gated by `is_move_possible`: a direction in which no
//! tile can slide or merge returns `false` without touching the board. An
//! accepted move sweeps the board starting from the edge the tiles travel
//! toward, slides each tile through empty slots, merges it into an
//! equal-valued neighbor at most once per destination slot, and finishes by
//! spawning exactly one new tile.

use smallvec::SmallVec;

use crate::core::{Direction, GameRng, Tile};

/// Scratch list of empty slot coordinates.
///
/// Inline capacity covers the default 4×4 board, so collecting empties for a
/// spawn does not allocate in the common case.
pub type EmptySlots = SmallVec<[(usize, usize); 16]>;

/// The 2048 board and its spawn RNG.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    slots: Vec<Option<Tile>>,
    rng: GameRng,
}

impl Grid {
    /// Create a board with two freshly spawned tiles.
    ///
    /// Sizes below 2 degenerate (the game is unplayable) but are not
    /// rejected: a 0×0 or 1×1 board constructs, spawns what it can, and
    /// reports every direction as blocked.
    #[must_use]
    pub fn new(size: usize, seed: u64) -> Self {
        let mut grid = Self::empty(size, seed);
        grid.spawn_tile();
        grid.spawn_tile();
        grid
    }

    /// Create a board with no tiles (scenario setup, tests).
    #[must_use]
    pub fn empty(size: usize, seed: u64) -> Self {
        Self {
            size,
            slots: vec![None; size * size],
            rng: GameRng::new(seed),
        }
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The tile at `(row, col)`, if the slot is occupied.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.slots[self.index(row, col)].as_ref()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Sum of all tile values on the board.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.slots
            .iter()
            .flatten()
            .map(|tile| u64::from(tile.value))
            .sum()
    }

    /// Coordinates of every empty slot, in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> EmptySlots {
        let mut empties = EmptySlots::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.slots[self.index(row, col)].is_none() {
                    empties.push((row, col));
                }
            }
        }
        empties
    }

    /// The board as rows of values, 0 marking an empty slot.
    ///
    /// This is the display surface a host renders after each accepted move.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u32>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.tile(row, col).map_or(0, |tile| tile.value))
                    .collect()
            })
            .collect()
    }

    /// Put a tile with the given value into a slot (scenario setup, tests).
    ///
    /// Overwrites whatever the slot held.
    pub fn place(&mut self, row: usize, col: usize, value: u32) {
        let index = self.index(row, col);
        self.slots[index] = Some(Tile::new(row, col, value));
    }

    /// Spawn one tile in a uniformly chosen empty slot.
    ///
    /// A full board is a no-op, never an error: the spawner must tolerate a
    /// board that filled up during merging.
    pub fn spawn_tile(&mut self) {
        let empties = self.empty_positions();
        if let Some(&(row, col)) = self.rng.choose(&empties) {
            let index = self.index(row, col);
            self.slots[index] = Some(Tile::spawn(row, col, &mut self.rng));
        }
    }

    /// Whether any tile can slide or merge one step along `direction`.
    ///
    /// True as soon as some occupied slot has an in-bounds neighbor in that
    /// direction which is either empty or holds an equal value.
    #[must_use]
    pub fn is_move_possible(&self, direction: Direction) -> bool {
        for row in 0..self.size {
            for col in 0..self.size {
                let Some(tile) = self.tile(row, col) else {
                    continue;
                };
                if let Some((nrow, ncol)) = self.neighbor(row, col, direction) {
                    match self.tile(nrow, ncol) {
                        None => return true,
                        Some(other) if other.value == tile.value => return true,
                        Some(_) => {}
                    }
                }
            }
        }
        false
    }

    /// One full move: shift and merge along `direction`, then spawn.
    ///
    /// Returns `false` with zero mutation when the direction is blocked.
    /// Otherwise the board is swept by [`Grid::shift`] and exactly one new
    /// tile spawns at the end (a no-op if the board is somehow full).
    pub fn shift_and_merge(&mut self, direction: Direction) -> bool {
        if !self.shift(direction) {
            return false;
        }
        self.spawn_tile();
        debug_assert!(self.positions_consistent());
        true
    }

    /// Shift and merge along `direction` without the trailing spawn.
    ///
    /// Returns `false` with zero mutation when the direction is blocked.
    /// Otherwise:
    ///
    /// - slots are swept starting from the edge the tiles travel toward, so
    ///   farther tiles settle before nearer ones and a single pass cascades;
    /// - each tile slides through empty neighbors, its stored coordinates
    ///   moving with it;
    /// - a tile whose final neighbor holds an equal value is absorbed into
    ///   it, doubling the survivor, unless that destination slot already
    ///   absorbed a merge this move (each slot merges at most once per
    ///   sweep, so `[2,2,2,2]` becomes `[4,4]`, never `[8]`).
    pub fn shift(&mut self, direction: Direction) -> bool {
        if !self.is_move_possible(direction) {
            return false;
        }

        // Merge-lock, keyed by destination slot for this move only.
        let mut merged = vec![false; self.size * self.size];

        let count = self.size * self.size;
        let scan: Box<dyn Iterator<Item = usize>> = if direction.is_forward() {
            Box::new((0..count).rev())
        } else {
            Box::new(0..count)
        };

        for index in scan {
            let Some(mut tile) = self.slots[index].take() else {
                continue;
            };
            let (mut row, mut col) = self.coords(index);

            // Slide through empty in-bounds neighbors.
            while let Some((nrow, ncol)) = self.neighbor(row, col, direction) {
                if self.slots[self.index(nrow, ncol)].is_some() {
                    break;
                }
                row = nrow;
                col = ncol;
            }
            tile.set_position(row, col);

            // Merge into the blocking neighbor if values match and that
            // slot has not already absorbed a merge this move.
            if let Some((nrow, ncol)) = self.neighbor(row, col, direction) {
                let target = self.index(nrow, ncol);
                if !merged[target] {
                    if let Some(other) = self.slots[target].as_mut() {
                        if other.value == tile.value {
                            other.double();
                            merged[target] = true;
                            // The absorbed tile is dropped here; its slot
                            // stays empty.
                            continue;
                        }
                    }
                }
            }

            let destination = self.index(row, col);
            self.slots[destination] = Some(tile);
        }

        true
    }

    /// Whether every tile's stored position matches the slot holding it.
    #[must_use]
    pub fn positions_consistent(&self) -> bool {
        (0..self.size * self.size).all(|index| {
            self.slots[index]
                .as_ref()
                .map_or(true, |tile| tile.position() == self.coords(index))
        })
    }

    /// Snapshot of the spawn RNG, for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> crate::core::GameRngState {
        self.rng.state()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// The in-bounds slot one step along `direction`, if any.
    fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let (drow, dcol) = direction.delta();
        let nrow = row.checked_add_signed(drow)?;
        let ncol = col.checked_add_signed(dcol)?;
        if nrow < self.size && ncol < self.size {
            Some((nrow, ncol))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.tile(row, col).map_or(0, |tile| tile.value);
                write!(f, "{value}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
