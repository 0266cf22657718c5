//! The simulation world.

use crate::{cells::State, communities, error::Error, grid::Grid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The seed pattern of the default world.
///
/// Five live cells on a 5×5 grid; the pattern dies out after four
/// generations.
const DEFAULT_SEED: [(usize, usize); 5] = [(1, 1), (1, 3), (2, 2), (3, 2), (3, 3)];

/// A running simulation.
///
/// The world owns exactly one [`Grid`] at a time. Advancing a
/// generation computes a wholly new grid and discards the old one; no
/// history is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct World {
    /// The current generation's cells.
    grid: Grid,

    /// How many generations have elapsed since construction.
    generation: u64,
}

impl World {
    /// Creates a world starting from the given grid.
    pub fn new(grid: Grid) -> Self {
        World {
            grid,
            generation: 0,
        }
    }

    /// The current grid.
    #[inline]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The number of generations elapsed since construction.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Whether at least one cell is alive.
    pub fn is_alive(&self) -> bool {
        self.grid.has_live_cells()
    }

    /// The state of the cell at an in-bounds position.
    pub fn cell_state(&self, row: usize, col: usize) -> Result<State, Error> {
        self.grid.get(row, col)
    }

    /// Computes the next generation without advancing the world.
    #[must_use]
    pub fn next_grid(&self) -> Grid {
        self.grid.step()
    }

    /// Advances the world by one generation.
    pub fn step(&mut self) {
        self.grid = self.grid.step();
        self.generation += 1;
        log::trace!(
            "generation {}: population {}",
            self.generation,
            self.grid.population()
        );
    }

    /// Advances the world by `n` generations.
    ///
    /// `n = 0` leaves the world unchanged.
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Counts the distinct communities of live cells in the current
    /// generation.
    pub fn count_communities(&self) -> usize {
        communities::count_communities(&self.grid)
    }
}

impl Default for World {
    /// The default world: a 5×5 grid seeded with five live cells.
    fn default() -> Self {
        let grid = Grid::from_coords(5, 5, &DEFAULT_SEED)
            .expect("the default seed pattern is in bounds");
        World::new(grid)
    }
}
