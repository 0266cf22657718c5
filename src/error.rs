//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Cell position ({0}, {1}) is out of bounds.
    OutOfBounds(usize, usize),
    /// Rows / columns should be positive.
    NonPositiveError,
    /// Fill density {0} is outside the range [0, 1].
    DensityError(f64),
    /// Pattern data ended before all declared cells were read.
    UnexpectedEnd,
    /// Invalid token in pattern data: {0:?}.
    InvalidToken(String),
    /// Pattern data continues after the declared cells.
    TrailingData,
}
