use super::{MapDimensions, MapError, WalkabilityOracle};

/// Immutable per-pixel walkability raster.
///
/// Built once from the alpha channel of the collision mask: a fully
/// transparent pixel (alpha == 0) is walkable, anything else blocks.
/// Coordinates outside the raster are always blocked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyMap {
    dimensions: MapDimensions,
    walkable: Vec<bool>,
}

impl OccupancyMap {
    /// Builds the map from one alpha byte per pixel, row-major.
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8]) -> Result<Self, MapError> {
        let dimensions = Self::checked_dimensions(width, height, alpha.len(), 1)?;
        let walkable = alpha.iter().map(|&a| a == 0).collect();
        Ok(Self {
            dimensions,
            walkable,
        })
    }

    /// Builds the map from an RGBA8 buffer, reading only the alpha channel.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, MapError> {
        let dimensions = Self::checked_dimensions(width, height, rgba.len(), 4)?;
        let walkable = rgba.chunks_exact(4).map(|px| px[3] == 0).collect();
        Ok(Self {
            dimensions,
            walkable,
        })
    }

    /// Builds the map by asking `is_walkable(x, y)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut is_walkable: impl FnMut(u32, u32) -> bool,
    ) -> Result<Self, MapError> {
        let dimensions = Self::checked_dimensions(width, height, 0, 0)?;
        let mut walkable = Vec::with_capacity(dimensions.area());
        for y in 0..height {
            for x in 0..width {
                walkable.push(is_walkable(x, y));
            }
        }
        Ok(Self {
            dimensions,
            walkable,
        })
    }

    /// A map with every pixel walkable.
    pub fn open(width: u32, height: u32) -> Result<Self, MapError> {
        Self::from_fn(width, height, |_, _| true)
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    /// Walkability of an integer pixel; `false` outside the raster.
    pub fn is_pixel_walkable(&self, x: u32, y: u32) -> bool {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return false;
        }
        self.walkable[self.index(x, y)]
    }

    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|&&w| w).count()
    }

    /// Fraction of walkable pixels, used when logging a freshly loaded mask.
    pub fn walkable_ratio(&self) -> f64 {
        self.walkable_count() as f64 / self.dimensions.area() as f64
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.dimensions.width as usize + x as usize
    }

    /// `bytes_per_pixel == 0` skips the buffer length check.
    fn checked_dimensions(
        width: u32,
        height: u32,
        actual: usize,
        bytes_per_pixel: usize,
    ) -> Result<MapDimensions, MapError> {
        let dimensions = MapDimensions::new(width, height);
        if dimensions.area() == 0 {
            return Err(MapError::EmptyRaster { width, height });
        }
        let expected = dimensions.area() * bytes_per_pixel;
        if bytes_per_pixel != 0 && actual != expected {
            return Err(MapError::BufferSize {
                width,
                height,
                expected,
                actual,
            });
        }
        Ok(dimensions)
    }
}

impl WalkabilityOracle for OccupancyMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn is_walkable(&self, x: f64, y: f64) -> bool {
        match self.dimensions.pixel(x, y) {
            Some((px, py)) => self.walkable[self.index(px, py)],
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_zero_is_walkable() {
        let map = OccupancyMap::from_alpha(2, 2, &[0, 255, 1, 0]).unwrap();
        assert!(map.is_walkable(0.0, 0.0));
        assert!(!map.is_walkable(1.0, 0.0));
        assert!(!map.is_walkable(0.0, 1.0));
        assert!(map.is_walkable(1.0, 1.0));
        assert_eq!(map.walkable_count(), 2);
    }

    #[test]
    fn rgba_reads_only_alpha() {
        #[rustfmt::skip]
        let rgba = [
            255, 255, 255, 0,   0, 0, 0, 0,
            0, 0, 0, 128,       12, 34, 56, 0,
        ];
        let map = OccupancyMap::from_rgba(2, 2, &rgba).unwrap();
        assert!(map.is_pixel_walkable(0, 0));
        assert!(map.is_pixel_walkable(1, 0));
        assert!(!map.is_pixel_walkable(0, 1));
        assert!(map.is_pixel_walkable(1, 1));
    }

    #[test]
    fn sub_pixel_queries_round_to_nearest_pixel() {
        let map = OccupancyMap::from_fn(3, 3, |x, y| !(x == 1 && y == 1)).unwrap();
        assert!(!map.is_walkable(1.4, 0.6));
        assert!(map.is_walkable(1.4, 0.4));
        assert!(map.is_walkable(1.6, 1.0) == map.is_pixel_walkable(2, 1));
    }

    #[test]
    fn outside_bounds_is_blocked() {
        let map = OccupancyMap::open(4, 4).unwrap();
        assert!(!map.is_walkable(-1.0, 0.0));
        assert!(!map.is_walkable(4.0, 0.0));
        assert!(!map.is_walkable(0.0, 3.6));
        assert!(!map.is_pixel_walkable(4, 0));
        assert!(!map.is_walkable(f64::NAN, 0.0));
        assert!(map.contains(3.0, 3.0));
        assert!(!map.contains(3.0, 4.0));
    }

    #[test]
    fn rejects_mismatched_buffers() {
        assert_eq!(
            OccupancyMap::from_alpha(2, 2, &[0, 0, 0]),
            Err(MapError::BufferSize {
                width: 2,
                height: 2,
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            OccupancyMap::from_rgba(0, 5, &[]),
            Err(MapError::EmptyRaster {
                width: 0,
                height: 5
            })
        );
    }
}
