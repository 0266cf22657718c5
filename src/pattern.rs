//! Parsing the textual construction input.
//!
//! The input is an ordered sequence of whitespace-separated tokens:
//! the number of rows, the number of columns, then one boolean token
//! per cell in row-major order. Boolean tokens are spelled `true` /
//! `false` or `1` / `0`.

use crate::{cells::State, error::Error, grid::Grid};
use std::str::FromStr;

impl FromStr for Grid {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut tokens = input.split_whitespace();
        let rows = parse_dimension(tokens.next())?;
        let cols = parse_dimension(tokens.next())?;
        let mut cells = Vec::with_capacity(rows * cols);
        for _ in 0..rows * cols {
            cells.push(parse_state(tokens.next())?);
        }
        if tokens.next().is_some() {
            return Err(Error::TrailingData);
        }
        Ok(Grid::from_parts(rows, cols, cells))
    }
}

/// Parses a row or column count.
fn parse_dimension(token: Option<&str>) -> Result<usize, Error> {
    let token = token.ok_or(Error::UnexpectedEnd)?;
    let value = token
        .parse::<usize>()
        .map_err(|_| Error::InvalidToken(token.to_owned()))?;
    if value == 0 {
        Err(Error::NonPositiveError)
    } else {
        Ok(value)
    }
}

/// Parses a single cell value.
fn parse_state(token: Option<&str>) -> Result<State, Error> {
    match token.ok_or(Error::UnexpectedEnd)? {
        "true" | "1" => Ok(State::Alive),
        "false" | "0" => Ok(State::Dead),
        other => Err(Error::InvalidToken(other.to_owned())),
    }
}
