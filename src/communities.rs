//! Counting connected communities of live cells.

use crate::{dsu::DisjointSets, grid::Grid};
use std::collections::HashSet;

/// Counts the distinct communities of live cells on the grid.
///
/// A community is a maximal set of live cells connected through a
/// chain of 8-direction adjacency, with adjacency wrapping across the
/// grid edges. An isolated live cell is a community of one; a grid
/// with no live cells has zero communities.
///
/// The grouping is computed with a fresh [`DisjointSets`] per call:
/// every live cell is unioned with each live cell in its wrapped
/// neighborhood, and the distinct roots among the live cells are then
/// counted.
pub fn count_communities(grid: &Grid) -> usize {
    if !grid.has_live_cells() {
        return 0;
    }

    let mut sets = DisjointSets::new(grid.rows() * grid.cols());
    for (row, col) in grid.iter_live() {
        let id = grid.flat_index(row, col);
        for (nbhd_row, nbhd_col) in grid.neighborhood(row, col) {
            if grid.state_at(nbhd_row, nbhd_col).is_alive() {
                sets.union(id, grid.flat_index(nbhd_row, nbhd_col));
            }
        }
    }

    let mut roots = HashSet::new();
    for (row, col) in grid.iter_live() {
        roots.insert(sets.find(grid.flat_index(row, col)));
    }
    log::debug!(
        "{} communities among {} live cells",
        roots.len(),
        grid.population()
    );
    roots.len()
}
