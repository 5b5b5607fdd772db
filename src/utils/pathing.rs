use crate::common::{Direction, Point};

/// Utility function for converting a position and a path
/// into a direction for the next movement on the path.
///
/// If the position is not on the path, it will return
/// the direction towards the first position of the path,
/// provided that position is adjacent.
///
/// Returns None if the current position is the final
/// position in the path, or if the path is empty.
///
/// # Example
/// ```rust
/// use tile_pathfinding::common::{Direction, Point};
/// use tile_pathfinding::utils::pathing::get_next_step_direction;
///
/// let path = [Point::new(0, 0), Point::new(1, 1), Point::new(1, 2)];
///
/// assert_eq!(get_next_step_direction(Point::new(0, 0), &path), Some(Direction::BottomRight));
/// assert_eq!(get_next_step_direction(Point::new(1, 1), &path), Some(Direction::Bottom));
/// assert_eq!(get_next_step_direction(Point::new(1, 2), &path), None);
/// ```
pub fn get_next_step_direction(current_pos: Point, path: &[Point]) -> Option<Direction> {
    if let Some(idx) = path.iter().position(|p| *p == current_pos) {
        return path
            .get(idx + 1)
            .and_then(|next_pos| current_pos.get_direction_to(*next_pos));
    }

    // Not on the path at all, move towards the path start
    path.first()
        .and_then(|path_pos| current_pos.get_direction_to(*path_pos))
}
