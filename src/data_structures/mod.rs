/// Min-priority open set used by the A* search
pub mod frontier;

/// Per-search storage of discovered nodes
pub mod node_registry;

pub use frontier::{Frontier, FrontierEntry};
pub use node_registry::{NodeId, NodeRegistry, SearchNode};
