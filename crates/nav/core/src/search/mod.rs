//! Route planning for a disc-shaped agent.
//!
//! A query moves through a fixed sequence of stages:
//!
//! 1. **Validate**: reject malformed input, endpoints outside the map, and
//!    endpoints where the disc does not fit.
//! 2. **Shortcut**: when the straight segment is clear, the route is just `[end]`.
//! 3. **Search**: A* over a lattice whose cell size is `max(0.5, radius)`.
//! 4. **Smooth**: collapse the grid chain with [`crate::smoothing`].
//!
//! The search keeps all of its state on the stack of a single call; a
//! [`Pathfinder`] only borrows the map and can serve any number of queries.
mod error;
mod open_set;
mod planner;

pub use error::PathError;
pub use planner::Pathfinder;

use crate::geometry::Path;

/// Diagnostics gathered while answering one query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStats {
    /// Cells closed by the A* search (0 when the shortcut applied).
    pub explored: usize,
    /// Waypoints produced by the grid search before smoothing.
    pub raw_waypoints: usize,
    /// Waypoints in the returned path.
    pub waypoints: usize,
    /// The straight segment was clear and the search was skipped.
    pub shortcut: bool,
}

/// A route together with the statistics of the query that produced it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedPath {
    pub path: Path,
    pub stats: PathStats,
}
