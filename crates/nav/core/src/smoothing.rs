//! Waypoint reduction for grid paths.
//!
//! Grid search yields one waypoint per cell. Two greedy passes collapse that
//! chain while only ever joining waypoints the disc can travel between in a
//! straight line:
//!
//! 1. From the current waypoint, scan backwards from the end of the path and
//!    jump to the first waypoint with line of sight.
//! 2. Drop any remaining interior waypoint whose predecessor in the output can
//!    already see its successor.
//!
//! The first and last waypoints are always kept, and paths shorter than three
//! points are returned untouched.
use crate::collision::DiscProbe;
use crate::geometry::{Path, Point};
use crate::map::WalkabilityOracle;

pub fn smooth_path<M>(probe: &DiscProbe<'_, M>, path: &[Point], radius: f64) -> Path
where
    M: WalkabilityOracle + ?Sized,
{
    if path.len() < 3 {
        return path.to_vec();
    }
    let jumped = farthest_visible(probe, path, radius);
    drop_redundant(probe, &jumped, radius)
}

fn farthest_visible<M>(probe: &DiscProbe<'_, M>, path: &[Point], radius: f64) -> Path
where
    M: WalkabilityOracle + ?Sized,
{
    let last = path.len() - 1;
    let mut smoothed = vec![path[0]];
    let mut current = 0;

    while current < last {
        // Adjacent waypoints are always mutually reachable, so fall back to the next one.
        let next = (current + 1..=last)
            .rev()
            .find(|&candidate| probe.can_traverse_segment(path[current], path[candidate], radius))
            .unwrap_or(current + 1);
        smoothed.push(path[next]);
        current = next;
    }

    smoothed
}

fn drop_redundant<M>(probe: &DiscProbe<'_, M>, path: &[Point], radius: f64) -> Path
where
    M: WalkabilityOracle + ?Sized,
{
    if path.len() < 3 {
        return path.to_vec();
    }

    let mut kept = vec![path[0]];
    for window in path.windows(3) {
        let (waypoint, successor) = (window[1], window[2]);
        let predecessor = kept[kept.len() - 1];
        if !probe.can_traverse_segment(predecessor, successor, radius) {
            kept.push(waypoint);
        }
    }
    kept.push(path[path.len() - 1]);

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::OccupancyMap;

    fn staircase() -> Vec<Point> {
        (1..=10).map(|i| Point::new(f64::from(i), f64::from(i))).collect()
    }

    #[test]
    fn short_paths_are_untouched() {
        let map = OccupancyMap::open(10, 10).unwrap();
        let probe = DiscProbe::new(&map);
        let path = vec![Point::new(1.0, 1.0), Point::new(8.0, 8.0)];
        assert_eq!(smooth_path(&probe, &path, 0.5), path);
    }

    #[test]
    fn open_space_collapses_to_endpoints() {
        let map = OccupancyMap::open(20, 20).unwrap();
        let probe = DiscProbe::new(&map);
        let path = staircase();
        let smoothed = smooth_path(&probe, &path, 0.5);
        assert_eq!(smoothed, vec![Point::new(1.0, 1.0), Point::new(10.0, 10.0)]);
    }

    #[test]
    fn keeps_the_corner_around_an_obstacle() {
        // Wall along x = 6 for y < 8; route goes down then across below it.
        let map = OccupancyMap::from_fn(20, 20, |x, y| !(x == 6 && y < 8)).unwrap();
        let probe = DiscProbe::new(&map);
        let mut path: Vec<Point> = (2..=10).map(|y| Point::new(3.0, f64::from(y))).collect();
        path.extend((4..=10).map(|x| Point::new(f64::from(x), 10.0)));
        path.extend((2..=9).rev().map(|y| Point::new(10.0, f64::from(y))));

        let smoothed = smooth_path(&probe, &path, 0.5);

        assert_eq!(smoothed.first(), path.first());
        assert_eq!(smoothed.last(), path.last());
        assert!(smoothed.len() < path.len());
        assert!(smoothed.len() >= 3);
        for pair in smoothed.windows(2) {
            assert!(probe.can_traverse_segment(pair[0], pair[1], 0.5));
        }
    }
}
