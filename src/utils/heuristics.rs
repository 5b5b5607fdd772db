use std::f64::consts::SQRT_2;

use crate::common::traits::GetDistanceTo;
use crate::utils::movement_costs::{DIAGONAL_COST, STRAIGHT_COST};

/// Helper function to create a heuristic cost function closure for a single goal node.
///
/// This heuristic cost is the straight-line distance between the provided node and the goal node.
/// It never overestimates the remaining cost as long as no tile costs less than 1.0 to enter
/// and diagonal moves are disabled.
///
/// # Examples
/// ```rust
/// use tile_pathfinding::common::Point;
/// use tile_pathfinding::utils::heuristics::heuristic_straight_line;
///
/// let h = heuristic_straight_line(Point::new(3, 4));
/// assert_eq!(h(Point::new(0, 0)), 5.0);
/// ```
pub fn heuristic_straight_line<T: GetDistanceTo + Copy + 'static>(goal: T) -> impl Fn(T) -> f64 {
    heuristic_scaled_straight_line(goal, 1.0)
}

/// Straight-line distance to the goal, multiplied by `scale`.
///
/// Use [admissible_scale] to pick a scale that keeps the estimate a lower bound.
pub fn heuristic_scaled_straight_line<T: GetDistanceTo + Copy + 'static>(
    goal: T,
    scale: f64,
) -> impl Fn(T) -> f64 {
    move |node: T| node.get_distance_to(goal) * scale
}

/// The largest factor the straight-line distance can be multiplied by without
/// overestimating the cost of any remaining route.
///
/// `lowest_tile_cost` is the cheapest cost multiplier any tile can resolve to.
/// Diagonal moves cost slightly less per unit of distance than cardinal ones,
/// so they lower the scale further.
///
/// # Examples
/// ```rust
/// use tile_pathfinding::utils::heuristics::admissible_scale;
///
/// assert_eq!(admissible_scale(1.0, false), 1.0);
/// assert_eq!(admissible_scale(0.25, false), 0.25);
/// assert!(admissible_scale(1.0, true) < 1.0);
/// ```
pub fn admissible_scale(lowest_tile_cost: f64, allow_diagonals: bool) -> f64 {
    let per_step = if allow_diagonals {
        STRAIGHT_COST.min(DIAGONAL_COST / SQRT_2)
    } else {
        STRAIGHT_COST
    };
    per_step * lowest_tile_cost
}
