//! Footprint checks for a circular agent.
//!
//! A disc "fits" when its centre and a fixed set of samples on and inside its
//! rim are all walkable. The sample set is finite: a blocked pixel that falls
//! between samples goes unnoticed. This approximates full disc coverage; it
//! is not an exact sweep.
use std::f64::consts::TAU;

use arrayvec::ArrayVec;
use strum::IntoEnumIterator;

use crate::geometry::{Direction, Point};
use crate::map::WalkabilityOracle;

/// Radii below this are treated as a bare point.
const POINT_RADIUS: f64 = 0.1;

/// Minimum number of samples placed on the rim.
const MIN_RIM_SAMPLES: usize = 8;

/// Rim samples per world unit of radius.
const RIM_SAMPLES_PER_UNIT: f64 = 8.0;

/// Segments shorter than this collapse to a single placement.
const COINCIDENT_DISTANCE: f64 = 0.01;

/// Smallest step used by [`DiscProbe::walkable_neighbors`].
const MIN_NEIGHBOR_STEP: f64 = 0.5;

/// Up to eight accepted moves around a point.
pub type Neighbors = ArrayVec<(Direction, Point), 8>;

/// Disc placement and segment sweep queries against a borrowed map.
#[derive(Clone, Copy)]
pub struct DiscProbe<'a, M: WalkabilityOracle + ?Sized> {
    map: &'a M,
}

impl<'a, M: WalkabilityOracle + ?Sized> DiscProbe<'a, M> {
    pub fn new(map: &'a M) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &'a M {
        self.map
    }

    /// Can a disc of `radius` be centred on `center` without touching blocked pixels?
    pub fn can_disc_fit(&self, center: Point, radius: f64) -> bool {
        if !self.map.is_walkable_point(center) {
            return false;
        }
        if radius < POINT_RADIUS {
            return true;
        }

        let rim_samples = MIN_RIM_SAMPLES.max((radius * RIM_SAMPLES_PER_UNIT).ceil() as usize);
        for i in 0..rim_samples {
            let angle = TAU * i as f64 / rim_samples as f64;
            let sample = center.offset(angle.cos() * radius, angle.sin() * radius);
            if !self.map.is_walkable_point(sample) {
                return false;
            }
        }

        // Interior rings at radius/2 and radius, four cardinal samples each.
        let step = radius / 2.0;
        for ring in 1..=2 {
            let r = step * f64::from(ring);
            let cardinals = [(r, 0.0), (-r, 0.0), (0.0, r), (0.0, -r)];
            if cardinals
                .iter()
                .any(|&(dx, dy)| !self.map.is_walkable_point(center.offset(dx, dy)))
            {
                return false;
            }
        }

        true
    }

    /// Can the disc slide along the straight segment `from -> to`?
    ///
    /// Placements are spaced at most about one world unit apart and include
    /// both endpoints.
    pub fn can_traverse_segment(&self, from: Point, to: Point, radius: f64) -> bool {
        let distance = from.distance(to);
        if !distance.is_finite() {
            return false;
        }
        if distance < COINCIDENT_DISTANCE {
            return self.can_disc_fit(from, radius);
        }

        let samples = 2.max(distance.ceil() as usize);
        (0..samples).all(|i| {
            let t = i as f64 / (samples - 1) as f64;
            self.can_disc_fit(from.lerp(to, t), radius)
        })
    }

    /// Eight-way moves of `step` world units from `center` that keep the disc clear.
    pub fn neighbors_with_step(&self, center: Point, step: f64, radius: f64) -> Neighbors {
        self.clear_moves(radius, |dx, dy| {
            center.offset(f64::from(dx) * step, f64::from(dy) * step)
        })
    }

    /// Eight-way moves whose target for offset `(dx, dy)` is given by `locate`.
    ///
    /// A diagonal move is only accepted when both orthogonal moves it is made
    /// of (`(dx, 0)` and `(0, dy)`) keep the disc clear too, so the disc never
    /// cuts a blocked corner.
    pub fn clear_moves(&self, radius: f64, locate: impl Fn(i32, i32) -> Point) -> Neighbors {
        let mut accepted = Neighbors::new();
        for direction in Direction::iter() {
            let (dx, dy) = direction.delta();
            let candidate = locate(dx, dy);
            if !self.can_disc_fit(candidate, radius) {
                continue;
            }
            if direction.is_diagonal()
                && !(self.can_disc_fit(locate(dx, 0), radius)
                    && self.can_disc_fit(locate(0, dy), radius))
            {
                continue;
            }
            accepted.push((direction, candidate));
        }
        accepted
    }

    /// Neighbors at the agent's natural step of `max(0.5, radius)`.
    pub fn walkable_neighbors(&self, center: Point, radius: f64) -> Vec<Point> {
        let step = radius.max(MIN_NEIGHBOR_STEP);
        self.neighbors_with_step(center, step, radius)
            .into_iter()
            .map(|(_, point)| point)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::OccupancyMap;

    fn single_blocked(x: u32, y: u32) -> OccupancyMap {
        OccupancyMap::from_fn(20, 20, |px, py| !(px == x && py == y)).unwrap()
    }

    #[test]
    fn zero_radius_is_a_point_check() {
        let map = single_blocked(10, 10);
        let probe = DiscProbe::new(&map);
        assert!(!probe.can_disc_fit(Point::new(10.0, 10.0), 0.0));
        assert!(probe.can_disc_fit(Point::new(11.0, 10.0), 0.0));
        assert!(probe.can_disc_fit(Point::new(10.0, 9.0), 0.05));
    }

    #[test]
    fn rim_sample_detects_nearby_obstacle() {
        let map = single_blocked(10, 10);
        let probe = DiscProbe::new(&map);
        assert!(!probe.can_disc_fit(Point::new(8.0, 10.0), 2.0));
        assert!(probe.can_disc_fit(Point::new(5.0, 10.0), 2.0));
    }

    #[test]
    fn disc_must_stay_inside_the_map() {
        let map = OccupancyMap::open(20, 20).unwrap();
        let probe = DiscProbe::new(&map);
        assert!(probe.can_disc_fit(Point::new(3.0, 3.0), 3.0));
        assert!(!probe.can_disc_fit(Point::new(1.0, 10.0), 3.0));
    }

    #[test]
    fn segment_through_obstacle_is_rejected() {
        let map = single_blocked(10, 10);
        let probe = DiscProbe::new(&map);
        assert!(!probe.can_traverse_segment(Point::new(2.0, 10.0), Point::new(18.0, 10.0), 0.5));
        assert!(probe.can_traverse_segment(Point::new(2.0, 4.0), Point::new(18.0, 4.0), 0.5));
    }

    #[test]
    fn coincident_segment_degenerates_to_fit() {
        let map = single_blocked(10, 10);
        let probe = DiscProbe::new(&map);
        let p = Point::new(10.0, 10.0);
        assert!(!probe.can_traverse_segment(p, p.offset(0.001, 0.0), 0.0));
        let q = Point::new(4.0, 4.0);
        assert!(probe.can_traverse_segment(q, q, 1.0));
    }

    #[test]
    fn open_space_has_eight_neighbors() {
        let map = OccupancyMap::open(20, 20).unwrap();
        let probe = DiscProbe::new(&map);
        let neighbors = probe.walkable_neighbors(Point::new(10.0, 10.0), 1.0);
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&Point::new(11.0, 9.0)));
    }

    #[test]
    fn diagonal_is_dropped_when_corner_is_blocked() {
        // Blocking (11, 10) removes East, and with it SouthEast and NorthEast.
        let map = single_blocked(11, 10);
        let probe = DiscProbe::new(&map);
        let neighbors = probe.neighbors_with_step(Point::new(10.0, 10.0), 1.0, 0.0);
        let directions: Vec<Direction> = neighbors.iter().map(|(d, _)| *d).collect();
        assert!(!directions.contains(&Direction::East));
        assert!(!directions.contains(&Direction::SouthEast));
        assert!(!directions.contains(&Direction::NorthEast));
        assert_eq!(directions.len(), 5);
    }
}
