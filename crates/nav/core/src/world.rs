//! The collision and pathing surface exposed to the rest of the game.
use crate::collision::DiscProbe;
use crate::config::NavConfig;
use crate::geometry::{Path, Point};
use crate::map::{OccupancyMap, WalkabilityOracle};
use crate::motion::MotionTimeline;
use crate::search::{PathError, Pathfinder, PlannedPath};

/// Owns the collision raster once it has been loaded.
///
/// Until [`initialize_collision`](Self::initialize_collision) runs every
/// point and disc query answers "blocked" and path queries fail with
/// [`PathError::Uninitialized`]. Re-initialising needs `&mut self`, so it
/// always completes before any later query observes the new raster.
#[derive(Debug, Default)]
pub struct NavWorld {
    config: NavConfig,
    map: Option<OccupancyMap>,
}

impl NavWorld {
    pub fn new(config: NavConfig) -> Self {
        Self { config, map: None }
    }

    pub fn with_map(config: NavConfig, map: OccupancyMap) -> Self {
        let mut world = Self::new(config);
        world.initialize_collision(map);
        world
    }

    pub fn initialize_collision(&mut self, map: OccupancyMap) {
        tracing::info!(
            width = map.width(),
            height = map.height(),
            walkable_ratio = map.walkable_ratio(),
            "collision map initialized"
        );
        self.map = Some(map);
    }

    pub fn is_initialized(&self) -> bool {
        self.map.is_some()
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn map(&self) -> Option<&OccupancyMap> {
        self.map.as_ref()
    }

    pub fn is_walkable(&self, x: f64, y: f64) -> bool {
        self.map.as_ref().is_some_and(|map| map.is_walkable(x, y))
    }

    pub fn can_circle_fit(&self, x: f64, y: f64, radius: f64) -> bool {
        self.map
            .as_ref()
            .is_some_and(|map| DiscProbe::new(map).can_disc_fit(Point::new(x, y), radius))
    }

    /// Route from `(start_x, start_y)` to `(end_x, end_y)`.
    ///
    /// `radius` defaults to [`NavConfig::default_radius`].
    pub fn find_path(
        &self,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
        radius: Option<f64>,
    ) -> Result<Path, PathError> {
        self.plan(start_x, start_y, end_x, end_y, radius)
            .map(|planned| planned.path)
    }

    pub fn plan(
        &self,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
        radius: Option<f64>,
    ) -> Result<PlannedPath, PathError> {
        let map = self.map.as_ref().ok_or_else(|| {
            tracing::warn!("path requested before collision map was initialized");
            PathError::Uninitialized
        })?;
        let radius = radius.unwrap_or(self.config.default_radius);
        Pathfinder::new(map, self.config.clone()).plan(
            Point::new(start_x, start_y),
            Point::new(end_x, end_y),
            radius,
        )
    }

    /// Plans a route and lays it out in time at `speed` units per second.
    pub fn plan_motion(
        &self,
        start: Point,
        end: Point,
        radius: Option<f64>,
        speed: f64,
    ) -> Result<MotionTimeline, PathError> {
        let path = self.find_path(start.x, start.y, end.x, end.y, radius)?;
        MotionTimeline::new(start, &path, speed).map_err(|_| PathError::InvalidInput {
            reason: "speed must be finite and positive",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_world_reports_blocked() {
        let world = NavWorld::new(NavConfig::default());
        assert!(!world.is_initialized());
        assert!(!world.is_walkable(1.0, 1.0));
        assert!(!world.can_circle_fit(1.0, 1.0, 0.0));
        assert_eq!(
            world.find_path(1.0, 1.0, 2.0, 2.0, None),
            Err(PathError::Uninitialized)
        );
    }

    #[test]
    fn initialized_world_answers_queries() {
        let map = OccupancyMap::open(100, 100).unwrap();
        let world = NavWorld::with_map(NavConfig::default(), map);
        assert!(world.is_walkable(50.0, 50.0));
        assert!(world.can_circle_fit(50.0, 50.0, 4.0));
        assert_eq!(
            world.find_path(5.0, 5.0, 90.0, 90.0, None),
            Ok(vec![Point::new(90.0, 90.0)])
        );
    }

    #[test]
    fn motion_plan_ends_at_destination() {
        let map = OccupancyMap::open(50, 50).unwrap();
        let world = NavWorld::with_map(NavConfig::default(), map);
        let timeline = world
            .plan_motion(Point::new(0.0, 0.0), Point::new(30.0, 40.0), None, 10.0)
            .unwrap();
        assert_eq!(timeline.total_duration(), 5.0);
        assert_eq!(timeline.destination(), Point::new(30.0, 40.0));
        assert!(matches!(
            world.plan_motion(Point::new(0.0, 0.0), Point::new(3.0, 4.0), None, 0.0),
            Err(PathError::InvalidInput { .. })
        ));
    }
}
