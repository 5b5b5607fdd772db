/// Error types shared by configuration and search
pub mod error;

/// The tile grid being searched
pub mod grid;

/// Search flags
pub mod options;

/// Grid coordinates and movement directions
pub mod point;

/// Traits used by the search algorithms
pub mod traits;

pub use error::{ConfigurationError, PathfindingError, Result};
pub use grid::Grid;
pub use options::{GoalTermination, SearchOptions};
pub use point::{Direction, Point};
