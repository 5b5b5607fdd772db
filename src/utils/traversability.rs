use std::collections::HashSet;

use crate::common::{Grid, Point};

/// Whether `xy` is inside the grid and holds one of the acceptable tiles.
///
/// Avoided points are not considered here; the search rejects them separately.
pub fn is_walkable(grid: &Grid, acceptable_tiles: &HashSet<i32>, xy: Point) -> bool {
    grid.get(xy)
        .map(|tile| acceptable_tiles.contains(&tile))
        .unwrap_or(false)
}

/// Builds a walkability closure over a grid and a set of acceptable tiles.
pub fn walkable_from_tiles<'a>(
    grid: &'a Grid,
    acceptable_tiles: &'a HashSet<i32>,
) -> impl Fn(Point) -> bool + 'a {
    move |xy| is_walkable(grid, acceptable_tiles, xy)
}
