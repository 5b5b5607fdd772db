/// Heuristic function builders
pub mod heuristics;

/// Tile cost resolution and move costs
pub mod movement_costs;

/// Neighbor generation under the diagonal and corner-cutting rules
pub mod neighbors;

/// Helpers for following a computed path
pub mod pathing;

/// Walkability checks
pub mod traversability;

pub use movement_costs::movement_costs_from_tables;
pub use traversability::walkable_from_tiles;
