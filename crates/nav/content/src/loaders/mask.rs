//! Collision mask loader.
//!
//! A mask is an ordinary raster whose alpha channel encodes walkability:
//! fully transparent pixels are walkable, everything else blocks. Colour
//! channels are ignored, so artists can paint masks in any hue.

use std::path::Path;

use image::DynamicImage;
use nav_core::{NavWorld, OccupancyMap};

use crate::loaders::LoadResult;

/// Loader for [`OccupancyMap`]s from image files.
pub struct MaskLoader;

impl MaskLoader {
    /// Decode the image at `path` into an occupancy map.
    pub fn load(path: &Path) -> LoadResult<OccupancyMap> {
        let image = image::open(path)
            .map_err(|e| anyhow::anyhow!("Failed to decode mask {}: {}", path.display(), e))?;
        Self::from_image(image)
    }

    /// Decode an in-memory encoded image (format sniffed from its header).
    pub fn from_bytes(bytes: &[u8]) -> LoadResult<OccupancyMap> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| anyhow::anyhow!("Failed to decode mask bytes: {}", e))?;
        Self::from_image(image)
    }

    /// Load the mask at `path` and install it into `world`.
    ///
    /// Returns `false` and leaves `world` untouched when the asset cannot be
    /// read or decoded. The failure is logged, not propagated.
    pub fn initialize(world: &mut NavWorld, path: &Path) -> bool {
        match Self::load(path) {
            Ok(map) => {
                world.initialize_collision(map);
                true
            }
            Err(error) => {
                tracing::error!(
                    path = %path.display(),
                    error = %format_args!("{error:#}"),
                    "failed to load collision mask"
                );
                false
            }
        }
    }

    fn from_image(image: DynamicImage) -> LoadResult<OccupancyMap> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let map = OccupancyMap::from_rgba(width, height, rgba.as_raw())?;
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{GrayImage, ImageFormat, Luma, Rgba, RgbaImage};
    use nav_core::{NavConfig, WalkabilityOracle};

    use super::*;

    /// 6x4 mask: transparent except an opaque column at x = 3.
    fn column_mask() -> RgbaImage {
        RgbaImage::from_fn(6, 4, |x, _| {
            if x == 3 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 0, 0, 0])
            }
        })
    }

    #[test]
    fn alpha_channel_decides_walkability() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        column_mask().save(&path).unwrap();

        let map = MaskLoader::load(&path).unwrap();
        assert_eq!((map.width(), map.height()), (6, 4));
        assert!(map.is_walkable(0.0, 0.0));
        assert!(map.is_walkable(5.0, 3.0));
        assert!(!map.is_walkable(3.0, 2.0));
        assert_eq!(map.walkable_count(), 20);
    }

    #[test]
    fn decodes_from_memory() {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(column_mask())
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let map = MaskLoader::from_bytes(&bytes).unwrap();
        assert!(!map.is_walkable(3.0, 0.0));
        assert!(map.is_walkable(2.0, 0.0));
    }

    #[test]
    fn images_without_alpha_are_fully_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(4, 4, Luma([0])).save(&path).unwrap();

        let map = MaskLoader::load(&path).unwrap();
        assert_eq!(map.walkable_count(), 0);
    }

    #[test]
    fn failed_initialization_leaves_world_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("mask.png");
        std::fs::write(&bogus, b"definitely not a png").unwrap();

        let mut world = NavWorld::new(NavConfig::default());
        assert!(!MaskLoader::initialize(&mut world, &bogus));
        assert!(!MaskLoader::initialize(&mut world, &dir.path().join("missing.png")));
        assert!(!world.is_initialized());
        assert!(!world.is_walkable(1.0, 1.0));
    }

    #[test]
    fn successful_initialization_enables_queries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        column_mask().save(&path).unwrap();

        let mut world = NavWorld::new(NavConfig::default());
        assert!(MaskLoader::initialize(&mut world, &path));
        assert!(world.is_initialized());
        assert!(world.is_walkable(1.0, 1.0));
        assert!(!world.is_walkable(3.0, 1.0));
    }
}
