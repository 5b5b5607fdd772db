// https://en.wikipedia.org/wiki/A*_search_algorithm

use log::{debug, trace};

use crate::common::{GoalTermination, Grid, PathfindingError, Point, Result, SearchOptions};
use crate::data_structures::{Frontier, NodeId, NodeRegistry, SearchNode};
use crate::utils::heuristics::heuristic_straight_line;
use crate::utils::neighbors::ranked_neighbors;

#[derive(Debug, Clone, PartialEq)]
pub struct AStarSearchResults {
    ops_used: u32,
    cost: f64,
    path: Vec<Point>,
}

impl AStarSearchResults {
    fn trivial() -> Self {
        Self {
            ops_used: 0,
            cost: 0.0,
            path: Vec::new(),
        }
    }

    /// The number of expand node operations used
    pub fn ops(&self) -> u32 {
        self.ops_used
    }

    /// The movement cost of the result path
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The path from the start node to the goal node, both inclusive.
    ///
    /// Empty if the start and goal are the same, or the goal tile isn't walkable.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Consumes the results, returning only the path.
    pub fn into_path(self) -> Vec<Point> {
        self.path
    }
}

/// Calculates a path from `start` to `goal` over `grid` using A*.
///
/// - `cost_fn` returns the cost multiplier for entering a tile
/// - `walkable_fn` returns whether a tile can be passed through
/// - `avoid_fn` returns whether a tile must never be entered, regardless of walkability
///
/// Each call owns its own node registry and frontier, so nothing is shared between searches.
///
/// The start tile itself doesn't need to be walkable. If the goal tile isn't walkable,
/// or `start == goal`, the search succeeds immediately with an empty path.
///
/// With [GoalTermination::FirstTouch] the search returns the first time the goal
/// shows up as a neighbor of an expanded node, without checking whether a cheaper
/// arrival exists. That is optimal for uniform tile costs, but can pick a
/// costlier final step when tile costs differ around the goal. Use
/// [GoalTermination::Settled] to have the goal relaxed like every other node.
///
/// # Example
/// ```rust
/// use tile_pathfinding::common::{Grid, Point, SearchOptions};
///
/// let grid = Grid::new(vec![vec![1; 5]; 5]).unwrap();
/// let options = SearchOptions {
///     allow_diagonals: true,
///     ..Default::default()
/// };
///
/// let search_results = tile_pathfinding::algorithms::astar::shortest_path_generic(
///     &grid,
///     Point::new(4, 4),
///     Point::new(2, 2),
///     |_| 1.0,
///     |_| true,
///     |_| false,
///     &options,
/// )
/// .unwrap();
///
/// assert_eq!(
///     search_results.path(),
///     &[Point::new(4, 4), Point::new(3, 3), Point::new(2, 2)]
/// );
/// ```
pub fn shortest_path_generic<C, W, A>(
    grid: &Grid,
    start: Point,
    goal: Point,
    cost_fn: C,
    walkable_fn: W,
    avoid_fn: A,
    options: &SearchOptions,
) -> Result<AStarSearchResults>
where
    C: Fn(Point) -> f64,
    W: Fn(Point) -> bool,
    A: Fn(Point) -> bool,
{
    shortest_path_with_heuristic(
        grid,
        start,
        goal,
        cost_fn,
        walkable_fn,
        avoid_fn,
        heuristic_straight_line(goal),
        options,
    )
}

/// Like [shortest_path_generic], with a caller-supplied estimate of the remaining cost.
///
/// `heuristic_fn` only affects the frontier priority; candidate ranking always uses
/// the straight-line distance. With [GoalTermination::Settled] the returned path is
/// the cheapest one whenever `heuristic_fn` never overestimates, e.g.
/// [heuristic_scaled_straight_line](crate::utils::heuristics::heuristic_scaled_straight_line)
/// with an [admissible_scale](crate::utils::heuristics::admissible_scale).
#[allow(clippy::too_many_arguments)]
pub fn shortest_path_with_heuristic<C, W, A, H>(
    grid: &Grid,
    start: Point,
    goal: Point,
    cost_fn: C,
    walkable_fn: W,
    avoid_fn: A,
    heuristic_fn: H,
    options: &SearchOptions,
) -> Result<AStarSearchResults>
where
    C: Fn(Point) -> f64,
    W: Fn(Point) -> bool,
    A: Fn(Point) -> bool,
    H: Fn(Point) -> f64,
{
    grid.check_bounds(start)?;
    grid.check_bounds(goal)?;

    trace!("[AStar] shortest_path: start={:?} goal={:?}", start, goal);

    if start == goal {
        return Ok(AStarSearchResults::trivial());
    }

    if !walkable_fn(goal) {
        debug!("[AStar] goal {:?} is not walkable, returning empty path", goal);
        return Ok(AStarSearchResults::trivial());
    }

    let settle_goal = options.goal_termination == GoalTermination::Settled;

    let mut registry = NodeRegistry::new(grid);
    let mut frontier = Frontier::new();
    let mut ops_used: u32 = 0;

    let start_id = registry
        .insert(SearchNode {
            position: start,
            g_score: 0.0,
            h_score: heuristic_fn(start),
            parent: None,
        })
        .ok_or(PathfindingError::PathNotFound)?;
    let start_node = registry.node(start_id);
    frontier.push(start_id, start_node.g_score, start_node.f_score());

    // Examine the frontier with lower cost nodes first (min-heap)
    while let Some(entry) = frontier.pop() {
        let current = registry.node(entry.node);

        // Important as we may have already found a better way
        if entry.g_score > current.g_score {
            continue;
        }

        let position = current.position;
        let g_score = current.g_score;

        if settle_goal && position == goal {
            return Ok(finish(&registry, entry.node, None, g_score, ops_used));
        }

        // Stop searching if we've run out of operations we're allowed to perform
        if let Some(max_ops) = options.max_ops {
            if ops_used >= max_ops {
                debug!("[AStar] aborted after {} ops", ops_used);
                return Err(PathfindingError::SearchAborted { ops: ops_used });
            }
        }
        ops_used += 1;

        for candidate in ranked_neighbors(grid, position, goal, options, &cost_fn, &walkable_fn) {
            let next = candidate.destination;
            if avoid_fn(next) {
                continue;
            }

            let next_g_score = g_score + candidate.cost;

            if !settle_goal && next == goal {
                return Ok(finish(
                    &registry,
                    entry.node,
                    Some(goal),
                    next_g_score,
                    ops_used,
                ));
            }

            if !walkable_fn(next) {
                continue;
            }

            match registry.get_id(next) {
                Some(existing) => {
                    // Relaxation, we have now found a better way
                    if registry.relax(existing, next_g_score, entry.node) {
                        let f_score = registry.node(existing).f_score();
                        frontier.push(existing, next_g_score, f_score);
                    }
                }
                None => {
                    let node = SearchNode {
                        position: next,
                        g_score: next_g_score,
                        h_score: heuristic_fn(next),
                        parent: Some(entry.node),
                    };
                    let f_score = node.f_score();
                    if let Some(id) = registry.insert(node) {
                        frontier.push(id, next_g_score, f_score);
                    }
                }
            }
        }
    }

    // Goal not reachable
    debug!(
        "[AStar] path not found after {} ops, {} nodes discovered",
        ops_used,
        registry.len()
    );
    Err(PathfindingError::PathNotFound)
}

fn finish(
    registry: &NodeRegistry,
    last: NodeId,
    goal: Option<Point>,
    cost: f64,
    ops_used: u32,
) -> AStarSearchResults {
    let path = get_path_from_registry(registry, last, goal);
    trace!(
        "[AStar] found path of {} tiles, cost {:.2}, {} ops",
        path.len(),
        cost,
        ops_used
    );
    AStarSearchResults {
        ops_used,
        cost,
        path,
    }
}

/// Builds the start-to-goal path ending in `last`, followed by `goal` when the goal
/// was matched as a neighbor rather than registered.
fn get_path_from_registry(
    registry: &NodeRegistry,
    last: NodeId,
    goal: Option<Point>,
) -> Vec<Point> {
    let mut path: Vec<Point> = goal.into_iter().chain(registry.ancestry(last)).collect();
    path.reverse();
    path
}
