use serde::{Deserialize, Serialize};

/// When a search is allowed to stop once the goal has been seen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalTermination {
    /// Return as soon as any expanded node has the goal as a neighbor.
    ///
    /// The final step into the goal is never compared against other arrivals,
    /// so this can return a costlier path when tile costs vary.
    #[default]
    FirstTouch,
    /// Register the goal like any other node and return once it is popped
    /// from the frontier.
    ///
    /// [Pathfinder](crate::Pathfinder) scales the straight-line estimate by the
    /// cheapest configured cost, so the returned path is the cheapest one even
    /// when costs are below 1.0.
    Settled,
}

/// Movement and termination flags for a search.
///
/// # Example
/// ```rust
/// use tile_pathfinding::common::options::SearchOptions;
///
/// let options: SearchOptions = serde_json::from_str(r#"{ "allow_diagonals": true }"#).unwrap();
/// assert!(options.allow_diagonals);
/// assert!(!options.allow_corner_cutting);
/// assert_eq!(options.max_ops, None);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Allow the four diagonal moves
    pub allow_diagonals: bool,
    /// Allow diagonal moves past unwalkable flanking tiles
    pub allow_corner_cutting: bool,
    /// Maximum number of node expansions before the search is aborted
    pub max_ops: Option<u32>,
    pub goal_termination: GoalTermination,
}
