//! Asset loaders for the navigation core.
//!
//! `nav-core` never touches the filesystem. This crate turns files into the
//! values it consumes:
//! - collision masks (any raster the `image` crate decodes; alpha 0 = walkable)
//! - planner configuration (TOML)

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MaskLoader};
