/// Provides methods for pathfinding using the A* algorithm.
///
/// Most callers will want the configured [Pathfinder](crate::pathfinder::Pathfinder)
/// instead; [shortest_path_generic](crate::algorithms::astar::shortest_path_generic)
/// takes the cost, walkability and avoidance rules as closures.
pub mod astar;
