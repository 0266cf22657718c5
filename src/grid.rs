//! The toroidal grid.

use crate::{cells::State, error::Error, rules};
use rand::{thread_rng, Rng};
use std::fmt::{self, Display, Formatter, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The offsets of the eight cells in a neighborhood.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size grid of cells whose edges wrap around.
///
/// The dimensions never change after construction. Cells are stored in
/// a flat buffer in row-major order, addressed by `row * cols + col`.
///
/// Direct accessors like [`get`](Self::get) take in-bounds positions
/// only; wraparound happens solely inside neighbor counting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    /// Number of rows.
    rows: usize,

    /// Number of columns.
    cols: usize,

    /// The cells, in row-major order.
    cells: Box<[State]>,
}

impl Grid {
    /// Creates a grid of dead cells with the given dimensions.
    ///
    /// Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::NonPositiveError);
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![State::Dead; rows * cols].into_boxed_slice(),
        })
    }

    /// Creates a grid with the cells at the given positions alive.
    pub fn from_coords(
        rows: usize,
        cols: usize,
        live: &[(usize, usize)],
    ) -> Result<Self, Error> {
        let mut grid = Grid::new(rows, cols)?;
        for &(row, col) in live {
            grid.set(row, col, State::Alive)?;
        }
        Ok(grid)
    }

    /// Creates a grid where each cell is alive with probability
    /// `density`.
    ///
    /// The density must lie within `[0, 1]`.
    pub fn random(rows: usize, cols: usize, density: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::DensityError(density));
        }
        let mut grid = Grid::new(rows, cols)?;
        let mut rng = thread_rng();
        for cell in grid.cells.iter_mut() {
            *cell = State::from(rng.gen_bool(density));
        }
        Ok(grid)
    }

    /// Assembles a grid from its parts.
    ///
    /// The caller guarantees `cells.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<State>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Grid {
            rows,
            cols,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Converts an in-bounds position to its index in the flat cell
    /// buffer.
    #[inline]
    pub(crate) const fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Normalizes a signed coordinate onto `0..dim`.
    #[inline]
    fn wrap(i: isize, dim: usize) -> usize {
        i.rem_euclid(dim as isize) as usize
    }

    /// The state of the cell at an in-bounds position.
    pub fn get(&self, row: usize, col: usize) -> Result<State, Error> {
        if row < self.rows && col < self.cols {
            Ok(self.cells[self.flat_index(row, col)])
        } else {
            Err(Error::OutOfBounds(row, col))
        }
    }

    /// Sets the state of the cell at an in-bounds position.
    pub fn set(&mut self, row: usize, col: usize, state: State) -> Result<(), Error> {
        if row < self.rows && col < self.cols {
            let index = self.flat_index(row, col);
            self.cells[index] = state;
            Ok(())
        } else {
            Err(Error::OutOfBounds(row, col))
        }
    }

    /// The state at an in-bounds position, without the bounds check.
    #[inline]
    pub(crate) fn state_at(&self, row: usize, col: usize) -> State {
        self.cells[self.flat_index(row, col)]
    }

    /// The number of live cells.
    ///
    /// Recomputed by scanning the grid, so it can never drift from the
    /// cell contents.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Whether at least one cell is alive.
    pub fn has_live_cells(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_alive())
    }

    /// Iterates over the positions of the live cells in row-major
    /// order.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| (index / self.cols, index % self.cols))
    }

    /// The eight wrapped neighbor positions of an in-bounds cell.
    pub(crate) fn neighborhood(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        NBHD.iter().map(move |&(dr, dc)| {
            (
                Self::wrap(row as isize + dr, self.rows),
                Self::wrap(col as isize + dc, self.cols),
            )
        })
    }

    /// Counts the live cells around an in-bounds position.
    ///
    /// Sums the wrapped 3×3 block around the position, then discounts
    /// the center cell itself, so the result is within `[0, 8]`.
    fn neighbor_count(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                let wrapped_row = Self::wrap(row as isize + dr, self.rows);
                let wrapped_col = Self::wrap(col as isize + dc, self.cols);
                if self.state_at(wrapped_row, wrapped_col).is_alive() {
                    count += 1;
                }
            }
        }
        if self.state_at(row, col).is_alive() {
            count -= 1;
        }
        count
    }

    /// Counts the live neighbors of the cell at an in-bounds position.
    ///
    /// The eight neighbors wrap across the grid edges; the cell itself
    /// is excluded from the count.
    pub fn live_neighbors(&self, row: usize, col: usize) -> Result<usize, Error> {
        if row < self.rows && col < self.cols {
            Ok(self.neighbor_count(row, col))
        } else {
            Err(Error::OutOfBounds(row, col))
        }
    }

    /// Computes the next generation.
    ///
    /// Applies the transition rule to every cell simultaneously, based
    /// on this grid's state, and returns a wholly new grid. `self` is
    /// left untouched.
    #[must_use]
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                rules::transition(self.state_at(row, col), self.neighbor_count(row, col))
            })
            .collect();
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

/// Renders the grid as rows of text.
///
/// Dead cells are represented by `.`, live cells by `O`.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for &cell in row {
                f.write_char(if cell.is_alive() { 'O' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
