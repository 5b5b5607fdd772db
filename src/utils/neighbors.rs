use crate::common::traits::GetDistanceTo;
use crate::common::{Direction, Grid, Point, SearchOptions};

use super::movement_costs::move_cost;

/// A possible move out of the node being expanded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NeighborCandidate {
    pub direction: Direction,
    pub destination: Point,
    /// Cost of this single move, base move cost times the destination's tile cost
    pub cost: f64,
    /// `cost` plus the straight-line distance from `destination` to the goal
    pub rank: f64,
}

/// Generates the moves available from `origin`, ranked for exploration.
///
/// Cardinal moves come first (top, right, bottom, left), followed by diagonals
/// when enabled. A diagonal is only generated if corner cutting is allowed or
/// both cardinal tiles it passes between are walkable. Moves leaving the grid
/// are never generated. Walkability of the destination itself is not checked.
///
/// The result is sorted by `rank` in descending order; the sort is stable, so
/// equally ranked moves keep their generation order.
pub fn ranked_neighbors<C, W>(
    grid: &Grid,
    origin: Point,
    goal: Point,
    options: &SearchOptions,
    cost_fn: &C,
    walkable_fn: &W,
) -> Vec<NeighborCandidate>
where
    C: Fn(Point) -> f64,
    W: Fn(Point) -> bool,
{
    let mut candidates = Vec::with_capacity(8);

    let mut push = |direction: Direction| {
        if let Some(destination) = grid.checked_add_direction(origin, direction) {
            let cost = move_cost(direction, cost_fn(destination));
            candidates.push(NeighborCandidate {
                direction,
                destination,
                cost,
                rank: cost + destination.get_distance_to(goal),
            });
        }
    };

    for direction in Direction::CARDINAL {
        push(direction);
    }

    if options.allow_diagonals {
        for direction in Direction::DIAGONAL {
            if !options.allow_corner_cutting && !corners_walkable(origin, direction, walkable_fn) {
                continue;
            }
            push(direction);
        }
    }

    candidates.sort_by(|a, b| b.rank.total_cmp(&a.rank));
    candidates
}

fn corners_walkable<W>(origin: Point, direction: Direction, walkable_fn: &W) -> bool
where
    W: Fn(Point) -> bool,
{
    match direction.flanking() {
        Some((a, b)) => {
            walkable_fn(origin.add_direction(a)) && walkable_fn(origin.add_direction(b))
        }
        None => true,
    }
}
