use std::collections::{HashMap, HashSet};

use crate::collision::DiscProbe;
use crate::config::NavConfig;
use crate::geometry::{GridKey, Path, Point};
use crate::map::WalkabilityOracle;
use crate::smoothing::smooth_path;

use super::open_set::OpenSet;
use super::{PathError, PathStats, PlannedPath};

/// A* planner bound to one walkability map.
pub struct Pathfinder<'a, M: WalkabilityOracle + ?Sized> {
    probe: DiscProbe<'a, M>,
    config: NavConfig,
}

/// Raw grid chain plus the number of cells closed to find it.
struct SearchOutcome {
    chain: Path,
    explored: usize,
}

impl<'a, M: WalkabilityOracle + ?Sized> Pathfinder<'a, M> {
    pub fn new(map: &'a M, config: NavConfig) -> Self {
        Self {
            probe: DiscProbe::new(map),
            config,
        }
    }

    pub fn probe(&self) -> &DiscProbe<'a, M> {
        &self.probe
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Waypoints from `start` (excluded) to exactly `end` for a disc of `radius`.
    pub fn find_path(&self, start: Point, end: Point, radius: f64) -> Result<Path, PathError> {
        self.plan(start, end, radius).map(|planned| planned.path)
    }

    /// Same as [`find_path`](Self::find_path), also reporting search statistics.
    pub fn plan(&self, start: Point, end: Point, radius: f64) -> Result<PlannedPath, PathError> {
        self.validate(start, end, radius)?;

        if self.probe.can_traverse_segment(start, end, radius) {
            tracing::debug!(%start, %end, radius, "straight segment clear, skipping search");
            return Ok(PlannedPath {
                path: vec![end],
                stats: PathStats {
                    waypoints: 1,
                    shortcut: true,
                    ..PathStats::default()
                },
            });
        }

        let SearchOutcome { chain, explored } = self.search(start, end, radius)?;
        let raw_waypoints = chain.len();
        let path = if self.config.smoothing {
            smooth_path(&self.probe, &chain, radius)
        } else {
            chain
        };

        tracing::debug!(
            %start,
            %end,
            radius,
            explored,
            raw_waypoints,
            waypoints = path.len(),
            "path found"
        );

        Ok(PlannedPath {
            stats: PathStats {
                explored,
                raw_waypoints,
                waypoints: path.len(),
                shortcut: false,
            },
            path,
        })
    }

    /// Unsmoothed A* chain, searched even when the straight segment is clear.
    pub fn raw_path(&self, start: Point, end: Point, radius: f64) -> Result<Path, PathError> {
        self.validate(start, end, radius)?;
        self.search(start, end, radius).map(|outcome| outcome.chain)
    }

    fn validate(&self, start: Point, end: Point, radius: f64) -> Result<(), PathError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PathError::InvalidInput {
                reason: "coordinates must be finite",
            });
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(PathError::InvalidInput {
                reason: "radius must be finite and non-negative",
            });
        }

        let map = self.probe.map();
        for point in [start, end] {
            if !map.contains(point.x, point.y) {
                tracing::warn!(%point, "path endpoint outside the map");
                return Err(PathError::OutOfBounds { point });
            }
        }
        if !self.probe.can_disc_fit(start, radius) {
            tracing::warn!(%start, radius, "start position blocked");
            return Err(PathError::StartBlocked { start, radius });
        }
        if !self.probe.can_disc_fit(end, radius) {
            tracing::warn!(%end, radius, "destination blocked");
            return Err(PathError::EndBlocked { end, radius });
        }
        Ok(())
    }

    fn search(&self, start: Point, end: Point, radius: f64) -> Result<SearchOutcome, PathError> {
        let cell = self.config.grid_size(radius);
        let start_key = GridKey::snap(start, cell);
        let goal_key = GridKey::snap(end, cell);
        let start_point = start_key.to_point(cell);
        let goal_point = goal_key.to_point(cell);

        let mut open = OpenSet::new();
        let mut closed: HashSet<GridKey> = HashSet::new();
        let mut came_from: HashMap<GridKey, GridKey> = HashMap::new();
        let mut g_scores: HashMap<GridKey, f64> = HashMap::new();

        g_scores.insert(start_key, 0.0);
        open.push(start_key, start_point.distance(goal_point));

        let mut explored = 0usize;
        while let Some(current) = open.pop() {
            if !closed.insert(current) {
                continue;
            }
            if explored >= self.config.max_explored_nodes {
                tracing::warn!(%start, %end, radius, explored, "search budget exhausted");
                return Err(PathError::Exhausted { explored });
            }
            explored += 1;

            let current_point = current.to_point(cell);
            if current_point.distance(goal_point) < cell {
                let chain = reconstruct(&came_from, current, cell, end);
                return Ok(SearchOutcome { chain, explored });
            }

            let current_g = g_scores.get(&current).copied().unwrap_or(f64::INFINITY);
            let moves = self.probe.clear_moves(radius, |dx, dy| {
                GridKey::new(current.x + dx, current.y + dy).to_point(cell)
            });

            for (direction, neighbor_point) in moves {
                let neighbor = current.step(direction);
                if closed.contains(&neighbor) {
                    continue;
                }

                let tentative_g = current_g + current_point.distance(neighbor_point);
                let known_g = g_scores.get(&neighbor).copied().unwrap_or(f64::INFINITY);
                if tentative_g >= known_g {
                    continue;
                }

                came_from.insert(neighbor, current);
                g_scores.insert(neighbor, tentative_g);
                let f_score = tentative_g
                    + neighbor_point.distance(goal_point)
                    + self.tie_break(neighbor_point, start_point, goal_point);
                open.push(neighbor, f_score);
            }
        }

        tracing::warn!(%start, %end, radius, explored, "destination unreachable");
        Err(PathError::Unreachable { explored })
    }

    /// Penalty growing with the distance of `point` from the start-goal line.
    ///
    /// Not admissible: it nudges the search towards straight routes when
    /// several cells share the same cost.
    fn tie_break(&self, point: Point, start: Point, goal: Point) -> f64 {
        let (dx1, dy1) = (point.x - goal.x, point.y - goal.y);
        let (dx2, dy2) = (start.x - goal.x, start.y - goal.y);
        (dx1 * dy2 - dx2 * dy1).abs() * self.config.tie_break_weight
    }
}

/// Follows back-links from `goal` to the start cell, which is left out.
///
/// The final waypoint is replaced by the exact requested destination.
fn reconstruct(
    came_from: &HashMap<GridKey, GridKey>,
    goal: GridKey,
    cell: f64,
    end: Point,
) -> Path {
    let mut chain = Vec::new();
    let mut cursor = goal;
    while let Some(&previous) = came_from.get(&cursor) {
        chain.push(cursor.to_point(cell));
        cursor = previous;
    }
    chain.reverse();

    match chain.last_mut() {
        Some(last) => *last = end,
        // Goal accepted at the start cell itself.
        None => chain.push(end),
    }
    chain
}
