//! Movement planning for a continuous 2-D world backed by a raster collision mask.
//!
//! `nav-core` answers two questions for a circular agent: "can a disc of radius
//! `r` stand here?" and "which waypoints take it from A to B?". The raster is
//! wrapped in an [`OccupancyMap`], lifted to disc footprints by
//! [`collision::DiscProbe`], searched by [`search::Pathfinder`] and thinned by
//! [`smoothing`]. [`NavWorld`] bundles these behind the operations the rest of
//! the game calls. Nothing here performs I/O; decoding assets lives in
//! `nav-content`.
pub mod collision;
pub mod config;
pub mod error;
pub mod geometry;
pub mod map;
pub mod motion;
pub mod search;
pub mod smoothing;
pub mod world;

pub use collision::DiscProbe;
pub use config::NavConfig;
pub use error::{ErrorSeverity, NavError};
pub use geometry::{Direction, GridKey, Path, Point};
pub use map::{MapDimensions, MapError, OccupancyMap, WalkabilityOracle};
pub use motion::{MotionError, MotionSegment, MotionTimeline, PathFollower};
pub use search::{PathError, PathStats, Pathfinder, PlannedPath};
pub use world::NavWorld;
