use super::point::Point;

/// Trait that encapsulates being able to get a straight-line distance
/// from one node to another.
pub trait GetDistanceTo {
    fn get_distance_to(self, other: Self) -> f64;
}

impl GetDistanceTo for Point {
    fn get_distance_to(self, other: Self) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}
