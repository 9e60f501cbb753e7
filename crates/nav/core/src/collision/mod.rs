//! Disc-footprint queries layered on a [`WalkabilityOracle`](crate::map::WalkabilityOracle).
mod disc;

pub use disc::{DiscProbe, Neighbors};
