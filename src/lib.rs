mod cells;
mod communities;
mod dsu;
mod error;
mod grid;
mod pattern;
pub mod rules;
mod world;

pub use cells::State;
pub use communities::count_communities;
pub use dsu::DisjointSets;
pub use error::Error;
pub use grid::Grid;
pub use world::World;
