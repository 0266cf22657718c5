//! The generation-transition rule.

use crate::cells::State;

/// Applies the survival and birth rules to a single cell.
///
/// The rules, in precedence order:
///
/// 1. A live cell with at most 1 live neighbor dies of loneliness.
/// 2. A live cell with 2 or 3 live neighbors survives.
/// 3. A dead cell with exactly 3 live neighbors becomes alive
///    by reproduction.
/// 4. Every other cell is dead in the next generation; this covers
///    live cells with 4 or more live neighbors, which die of
///    overpopulation.
#[inline]
pub const fn transition(state: State, live_neighbors: usize) -> State {
    match state {
        State::Alive if live_neighbors <= 1 => State::Dead,
        State::Alive if live_neighbors <= 3 => State::Alive,
        State::Dead if live_neighbors == 3 => State::Alive,
        _ => State::Dead,
    }
}
