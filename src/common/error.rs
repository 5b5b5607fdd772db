//! Error types for pathfinding

use thiserror::Error;

/// A precondition on the pathfinder's configuration was violated.
///
/// Retrying the same call without changing the configuration will always fail the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("you can't find a path without first setting acceptable tiles")]
    NoAcceptableTiles,

    #[error("you can't find a path without first setting a grid")]
    NoGrid,

    #[error("coordinate ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("grid must contain at least one row and one column")]
    EmptyGrid,

    #[error("grid row {row} has {found} tiles, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cost must be a positive, finite number, got {0}")]
    InvalidCost(f64),
}

/// Errors returned by a search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathfindingError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The frontier was exhausted without reaching the goal.
    #[error("path not found")]
    PathNotFound,

    /// The configured operation limit was reached before the search finished.
    #[error("search aborted after {ops} operations")]
    SearchAborted { ops: u32 },
}

pub type Result<T> = std::result::Result<T, PathfindingError>;
