use serde::{Deserialize, Serialize};

/// A cell coordinate on a tile grid.
///
/// Coordinates are signed so that callers can hand in arbitrary values and
/// have them rejected by bounds checks instead of wrapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point one step away in the given direction.
    ///
    /// This does no bounds checking; see [Grid::checked_add_direction](crate::common::grid::Grid::checked_add_direction).
    pub fn add_direction(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the direction from this point to an adjacent point.
    ///
    /// Returns None if the points are equal or not adjacent (including diagonally).
    pub fn get_direction_to(self, other: Point) -> Option<Direction> {
        Direction::from_offset(other.x - self.x, other.y - self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the eight unit moves on a grid.
///
/// `y` grows downward, so [Direction::Top] is `(0, -1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Direction {
    /// Cardinal directions, in neighbor generation order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Diagonal directions, in neighbor generation order.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::TopLeft,
        Direction::BottomRight,
        Direction::TopRight,
        Direction::BottomLeft,
    ];

    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::TopLeft => (-1, -1),
        }
    }

    pub fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Top),
            (1, -1) => Some(Direction::TopRight),
            (1, 0) => Some(Direction::Right),
            (1, 1) => Some(Direction::BottomRight),
            (0, 1) => Some(Direction::Bottom),
            (-1, 1) => Some(Direction::BottomLeft),
            (-1, 0) => Some(Direction::Left),
            (-1, -1) => Some(Direction::TopLeft),
            _ => None,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::TopRight
                | Direction::BottomRight
                | Direction::BottomLeft
                | Direction::TopLeft
        )
    }

    /// The two cardinal directions a diagonal move passes between.
    ///
    /// Returns None for cardinal directions.
    pub const fn flanking(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::TopRight => Some((Direction::Top, Direction::Right)),
            Direction::BottomRight => Some((Direction::Bottom, Direction::Right)),
            Direction::BottomLeft => Some((Direction::Bottom, Direction::Left)),
            Direction::TopLeft => Some((Direction::Top, Direction::Left)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_round_trip_through_from_offset() {
        for direction in Direction::CARDINAL.iter().chain(Direction::DIAGONAL.iter()) {
            let (dx, dy) = direction.offset();
            assert_eq!(Direction::from_offset(dx, dy), Some(*direction));
        }
        assert_eq!(Direction::from_offset(0, 0), None);
        assert_eq!(Direction::from_offset(2, 0), None);
    }

    #[test]
    fn flanking_cells_of_diagonals() {
        let origin = Point::new(5, 5);
        let (a, b) = Direction::TopLeft.flanking().unwrap();
        assert_eq!(origin.add_direction(a), Point::new(5, 4));
        assert_eq!(origin.add_direction(b), Point::new(4, 5));
        assert_eq!(Direction::Right.flanking(), None);
    }

    #[test]
    fn get_direction_to_adjacent_only() {
        let p = Point::new(3, 3);
        assert_eq!(p.get_direction_to(Point::new(4, 2)), Some(Direction::TopRight));
        assert_eq!(p.get_direction_to(Point::new(3, 4)), Some(Direction::Bottom));
        assert_eq!(p.get_direction_to(Point::new(5, 3)), None);
        assert_eq!(p.get_direction_to(p), None);
    }
}
