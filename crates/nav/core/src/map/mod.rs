//! Static walkability data consulted by every collision query.
//!
//! [`WalkabilityOracle`] is the read-only seam the probes and the planner are
//! written against; [`OccupancyMap`] is the raster-backed implementation built
//! once from the collision mask.
mod error;
mod occupancy;

pub use error::MapError;
pub use occupancy::OccupancyMap;

use crate::geometry::Point;

/// Read-only walkability lookups in world coordinates.
pub trait WalkabilityOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// Returns true iff the pixel nearest to `(x, y)` is inside the map and walkable.
    fn is_walkable(&self, x: f64, y: f64) -> bool;

    fn is_walkable_point(&self, point: Point) -> bool {
        self.is_walkable(point.x, point.y)
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        self.dimensions().pixel(x, y).is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Pixel sampled for a world coordinate, or `None` outside `[0, W) x [0, H)`.
    ///
    /// Coordinates are rounded half-up; non-finite input never maps to a pixel.
    pub fn pixel(&self, x: f64, y: f64) -> Option<(u32, u32)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let px = crate::geometry::round_half_up(x);
        let py = crate::geometry::round_half_up(y);
        if px < 0.0 || py < 0.0 || px >= f64::from(self.width) || py >= f64::from(self.height) {
            return None;
        }
        Some((px as u32, py as u32))
    }
}
