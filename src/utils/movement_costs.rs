use std::collections::HashMap;

use crate::common::{Direction, Grid, Point};

/// Base cost of a cardinal move.
pub const STRAIGHT_COST: f64 = 1.0;

/// Base cost of a diagonal move.
pub const DIAGONAL_COST: f64 = 1.4;

/// Multiplier used for tile identifiers missing from the tile cost table.
pub const DEFAULT_TILE_COST: f64 = 1.0;

/// Resolves the cost multiplier for entering `xy`.
///
/// A point override wins over the tile cost table; tiles without an entry in the
/// table cost [DEFAULT_TILE_COST]. Out-of-bounds points also resolve to the default.
pub fn tile_cost(
    grid: &Grid,
    tile_costs: &HashMap<i32, f64>,
    point_costs: &HashMap<Point, f64>,
    xy: Point,
) -> f64 {
    if let Some(cost) = point_costs.get(&xy) {
        return *cost;
    }

    grid.get(xy)
        .and_then(|tile| tile_costs.get(&tile))
        .copied()
        .unwrap_or(DEFAULT_TILE_COST)
}

/// Cost of a single move in `direction` onto a tile with the given multiplier.
pub fn move_cost(direction: Direction, tile_cost: f64) -> f64 {
    if direction.is_diagonal() {
        DIAGONAL_COST * tile_cost
    } else {
        STRAIGHT_COST * tile_cost
    }
}

/// Builds a cost function closure that resolves tile multipliers from a tile cost table
/// and per-point overrides.
///
/// # Example
/// ```rust
/// use std::collections::HashMap;
/// use tile_pathfinding::common::{Grid, Point};
///
/// let grid = Grid::new(vec![vec![0, 1], vec![1, 1]]).unwrap();
/// let tile_costs = HashMap::from([(1, 3.0)]);
/// let point_costs = HashMap::from([(Point::new(1, 1), 0.5)]);
///
/// let costs_fn = tile_pathfinding::utils::movement_costs::movement_costs_from_tables(
///     &grid,
///     &tile_costs,
///     &point_costs,
/// );
///
/// assert_eq!(costs_fn(Point::new(0, 0)), 1.0);
/// assert_eq!(costs_fn(Point::new(1, 0)), 3.0);
/// assert_eq!(costs_fn(Point::new(1, 1)), 0.5);
/// ```
pub fn movement_costs_from_tables<'a>(
    grid: &'a Grid,
    tile_costs: &'a HashMap<i32, f64>,
    point_costs: &'a HashMap<Point, f64>,
) -> impl Fn(Point) -> f64 + 'a {
    move |xy| tile_cost(grid, tile_costs, point_costs, xy)
}
