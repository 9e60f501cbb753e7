//! Continuous points, grid cells and the eight search directions.
use std::fmt;

use strum::EnumIter;

/// A position in world units (one world unit == one raster pixel).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point at fraction `t` of the way from `self` to `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Ordered waypoints returned by a path query.
///
/// The query's start point is implicit; the last element is the exact
/// requested destination.
pub type Path = Vec<Point>;

/// Rounds half-up, matching how pixel and grid coordinates are sampled.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Integer cell coordinate of the search lattice.
///
/// The world position of a cell is `key * cell_size`, so two keys are equal
/// exactly when they name the same snapped point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridKey {
    pub x: i32,
    pub y: i32,
}

impl GridKey {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snaps a point to the nearest lattice cell.
    pub fn snap(point: Point, cell_size: f64) -> Self {
        Self {
            x: round_half_up(point.x / cell_size) as i32,
            y: round_half_up(point.y / cell_size) as i32,
        }
    }

    pub fn to_point(self, cell_size: f64) -> Point {
        Point::new(f64::from(self.x) * cell_size, f64::from(self.y) * cell_size)
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The eight compass moves, in the order neighbors are generated.
///
/// The y axis points down (raster rows), so `South` increases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    East,
    West,
    South,
    North,
    SouthEast,
    NorthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
            Direction::SouthEast => (1, 1),
            Direction::NorthEast => (1, -1),
            Direction::SouthWest => (-1, 1),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn snap_rounds_half_up_like_pixel_sampling() {
        assert_eq!(GridKey::snap(Point::new(10.25, 10.2), 0.5), GridKey::new(21, 20));
        assert_eq!(GridKey::snap(Point::new(-0.25, 0.74), 0.5), GridKey::new(0, 1));
        assert_eq!(GridKey::snap(Point::new(7.0, 3.0), 2.0), GridKey::new(4, 2));
    }

    #[test]
    fn key_roundtrips_through_world_point() {
        let key = GridKey::new(21, -3);
        assert_eq!(GridKey::snap(key.to_point(0.5), 0.5), key);
        assert_eq!(key.to_point(0.5), Point::new(10.5, -1.5));
    }

    #[test]
    fn four_of_eight_directions_are_diagonal() {
        assert_eq!(Direction::iter().count(), 8);
        assert_eq!(Direction::iter().filter(|d| d.is_diagonal()).count(), 4);
        assert_eq!(Direction::iter().next(), Some(Direction::East));
    }

    #[test]
    fn lerp_hits_both_ends() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(5.0, -2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(3.0, 0.0));
        assert!((a.distance(b) - 32f64.sqrt()).abs() < 1e-12);
    }
}
