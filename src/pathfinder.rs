use std::collections::{HashMap, HashSet};

use log::debug;

use crate::algorithms::astar::{shortest_path_with_heuristic, AStarSearchResults};
use crate::common::{ConfigurationError, GoalTermination, Grid, Point, Result, SearchOptions};
use crate::utils::heuristics::{admissible_scale, heuristic_scaled_straight_line};
use crate::utils::movement_costs::DEFAULT_TILE_COST;
use crate::utils::{movement_costs_from_tables, walkable_from_tiles};

/// A reusable pathfinding configuration for a single tile grid.
///
/// Configuration is only read during a search; every call to [Pathfinder::find_path]
/// builds and discards its own search state, so searches can run concurrently
/// against a shared `&Pathfinder`.
///
/// # Example
/// ```rust
/// use tile_pathfinding::{Grid, Pathfinder, Point};
///
/// let mut pathfinder = Pathfinder::new();
/// pathfinder.set_grid(Grid::new(vec![
///     vec![1, 1, 0, 1, 1],
///     vec![1, 1, 0, 1, 1],
///     vec![1, 1, 0, 1, 1],
///     vec![1, 1, 1, 1, 1],
///     vec![1, 1, 1, 1, 1],
/// ]).unwrap());
/// pathfinder.set_acceptable_tiles([1]);
///
/// let path = pathfinder.find_path(1, 2, 3, 2).unwrap();
/// assert_eq!(path.len(), 5);
/// assert_eq!(path[2], Point::new(2, 3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pathfinder {
    grid: Option<Grid>,
    acceptable_tiles: HashSet<i32>,
    tile_costs: HashMap<i32, f64>,
    point_costs: HashMap<Point, f64>,
    avoided_points: HashSet<Point>,
    options: SearchOptions,
}

impl Pathfinder {
    /// Creates a pathfinder with no grid, no acceptable tiles and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pathfinder with the given search options.
    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Sets the tiles which are deemed acceptable to pass through, replacing any previous set.
    pub fn set_acceptable_tiles<I: IntoIterator<Item = i32>>(&mut self, tiles: I) {
        self.acceptable_tiles = tiles.into_iter().collect();
    }

    pub fn acceptable_tiles(&self) -> &HashSet<i32> {
        &self.acceptable_tiles
    }

    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = Some(grid);
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn enable_diagonals(&mut self) {
        self.options.allow_diagonals = true;
    }

    pub fn disable_diagonals(&mut self) {
        self.options.allow_diagonals = false;
    }

    pub fn diagonals_enabled(&self) -> bool {
        self.options.allow_diagonals
    }

    /// Allows diagonal moves past unwalkable tiles.
    pub fn enable_corner_cutting(&mut self) {
        self.options.allow_corner_cutting = true;
    }

    pub fn disable_corner_cutting(&mut self) {
        self.options.allow_corner_cutting = false;
    }

    pub fn corner_cutting_enabled(&self) -> bool {
        self.options.allow_corner_cutting
    }

    /// Limits the number of node expansions a search may perform.
    ///
    /// Searches that hit the limit fail with
    /// [SearchAborted](crate::common::PathfindingError::SearchAborted). `None` removes the limit.
    pub fn set_max_ops(&mut self, max_ops: Option<u32>) {
        self.options.max_ops = max_ops;
    }

    pub fn set_goal_termination(&mut self, goal_termination: GoalTermination) {
        self.options.goal_termination = goal_termination;
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    /// Sets the cost multiplier for entering any tile with the given identifier.
    pub fn set_tile_cost(
        &mut self,
        tile: i32,
        cost: f64,
    ) -> std::result::Result<(), ConfigurationError> {
        validate_cost(cost)?;
        self.tile_costs.insert(tile, cost);
        Ok(())
    }

    pub fn remove_tile_cost(&mut self, tile: i32) {
        self.tile_costs.remove(&tile);
    }

    /// The cost multiplier for a tile identifier, falling back to the default of 1.0.
    pub fn tile_cost(&self, tile: i32) -> f64 {
        self.tile_costs
            .get(&tile)
            .copied()
            .unwrap_or(DEFAULT_TILE_COST)
    }

    /// Sets the cost multiplier for a particular point.
    ///
    /// Overrides the cost from [Pathfinder::set_tile_cost].
    pub fn set_point_cost(
        &mut self,
        x: i32,
        y: i32,
        cost: f64,
    ) -> std::result::Result<(), ConfigurationError> {
        validate_cost(cost)?;
        self.point_costs.insert(Point::new(x, y), cost);
        Ok(())
    }

    pub fn remove_point_cost(&mut self, x: i32, y: i32) {
        self.point_costs.remove(&Point::new(x, y));
    }

    pub fn remove_all_point_costs(&mut self) {
        self.point_costs.clear();
    }

    pub fn point_cost(&self, x: i32, y: i32) -> Option<f64> {
        self.point_costs.get(&Point::new(x, y)).copied()
    }

    /// Avoids a particular point on the grid, regardless of whether or not it is an
    /// acceptable tile.
    pub fn avoid_point(&mut self, x: i32, y: i32) {
        self.avoided_points.insert(Point::new(x, y));
    }

    pub fn stop_avoiding_point(&mut self, x: i32, y: i32) {
        self.avoided_points.remove(&Point::new(x, y));
    }

    pub fn stop_avoiding_all_points(&mut self) {
        self.avoided_points.clear();
    }

    pub fn is_avoided(&self, x: i32, y: i32) -> bool {
        self.avoided_points.contains(&Point::new(x, y))
    }

    /// Finds a path from the start point to the end point.
    ///
    /// Returns the points from start to end inclusive, or an empty path if start and
    /// end are the same tile or the end tile isn't acceptable.
    pub fn find_path(
        &self,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
    ) -> Result<Vec<Point>> {
        self.search(Point::new(start_x, start_y), Point::new(end_x, end_y))
            .map(AStarSearchResults::into_path)
    }

    /// Like [Pathfinder::find_path], also reporting the path cost and the number of
    /// node expansions used.
    pub fn search(&self, start: Point, goal: Point) -> Result<AStarSearchResults> {
        if self.acceptable_tiles.is_empty() {
            debug!("[Pathfinder] search requested without acceptable tiles");
            return Err(ConfigurationError::NoAcceptableTiles.into());
        }

        let Some(grid) = self.grid.as_ref() else {
            debug!("[Pathfinder] search requested without a grid");
            return Err(ConfigurationError::NoGrid.into());
        };

        // First-touch keeps the plain straight-line estimate; settled searches need
        // one that never overestimates to return the cheapest path.
        let scale = match self.options.goal_termination {
            GoalTermination::FirstTouch => 1.0,
            GoalTermination::Settled => {
                admissible_scale(self.lowest_cost_multiplier(), self.options.allow_diagonals)
            }
        };

        shortest_path_with_heuristic(
            grid,
            start,
            goal,
            movement_costs_from_tables(grid, &self.tile_costs, &self.point_costs),
            walkable_from_tiles(grid, &self.acceptable_tiles),
            |xy| self.avoided_points.contains(&xy),
            heuristic_scaled_straight_line(goal, scale),
            &self.options,
        )
    }

    /// The cheapest multiplier any tile can resolve to, never above the default of 1.0.
    fn lowest_cost_multiplier(&self) -> f64 {
        self.tile_costs
            .values()
            .chain(self.point_costs.values())
            .copied()
            .fold(DEFAULT_TILE_COST, f64::min)
    }
}

fn validate_cost(cost: f64) -> std::result::Result<(), ConfigurationError> {
    if cost.is_finite() && cost > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidCost(cost))
    }
}
