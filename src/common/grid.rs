use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;
use super::point::{Direction, Point};

/// A rectangular, row-major grid of tile identifiers.
///
/// Serializes as a list of rows, and is validated the same way as [Grid::new]
/// when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<i32>,
}

impl Grid {
    /// Builds a grid from a list of rows.
    ///
    /// Returns an error if there are no rows, the rows are empty, or the rows
    /// don't all share the same length.
    ///
    /// # Example
    /// ```rust
    /// use tile_pathfinding::common::grid::Grid;
    ///
    /// let grid = Grid::new(vec![vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    ///
    /// assert!(Grid::new(vec![vec![1, 0], vec![1]]).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<i32>>) -> Result<Self, ConfigurationError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if width == 0 {
            return Err(ConfigurationError::EmptyGrid);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ConfigurationError::RaggedGrid {
                    row: row_idx,
                    expected: width,
                    found: row.len(),
                });
            }
            tiles.extend(row);
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells in the grid.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Grids are never empty; provided alongside [Grid::len].
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Flat row-major index of an in-bounds point.
    pub fn index(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// The tile identifier at `p`, or None if `p` is out of bounds.
    pub fn get(&self, p: Point) -> Option<i32> {
        self.index(p).map(|idx| self.tiles[idx])
    }

    /// Returns the neighboring point in `direction`, if it is inside the grid.
    pub fn checked_add_direction(&self, p: Point, direction: Direction) -> Option<Point> {
        let next = p.add_direction(direction);
        self.in_bounds(next).then_some(next)
    }

    /// Validates that `p` lies inside the grid.
    pub fn check_bounds(&self, p: Point) -> Result<(), ConfigurationError> {
        if self.in_bounds(p) {
            Ok(())
        } else {
            Err(ConfigurationError::OutOfBounds {
                x: p.x,
                y: p.y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl TryFrom<Vec<Vec<i32>>> for Grid {
    type Error = ConfigurationError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Grid::new(rows)
    }
}

impl From<Grid> for Vec<Vec<i32>> {
    fn from(grid: Grid) -> Self {
        grid.tiles
            .chunks(grid.width)
            .map(|row| row.to_vec())
            .collect()
    }
}
