/// Provides common definitions used across the crate
pub mod common;

/// Provides individual algorithm implementations
pub mod algorithms;

/// Provides the per-search data structures used by the algorithms
pub mod data_structures;

/// Provides a configurable pathfinder over a tile grid
pub mod pathfinder;

/// Provides helper methods to simplify using algorithms
pub mod utils;

#[cfg(test)]
mod pathfinder_tests;

pub use common::{ConfigurationError, Direction, Grid, PathfindingError, Point, Result};
pub use pathfinder::Pathfinder;
