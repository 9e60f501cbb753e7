//! Utility functions for xtask commands

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use nav_content::{ConfigLoader, MaskLoader};
use nav_core::{NavConfig, NavWorld, Point};

/// Parse an `X,Y` pair into a point (clap value parser).
pub fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{raw}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{}': {e}", part.trim()))
    };
    let point = Point::new(parse(x)?, parse(y)?);
    if !point.is_finite() {
        return Err(format!("coordinates must be finite, got '{raw}'"));
    }
    Ok(point)
}

/// Planner configuration from an optional TOML file, then `NAV_*` overrides.
///
/// - `NAV_RADIUS`: default agent radius
/// - `NAV_MAX_NODES`: search node budget
pub fn resolve_config(path: Option<&Path>) -> Result<NavConfig> {
    let mut config = match path {
        Some(path) => ConfigLoader::load(path)?,
        None => NavConfig::default(),
    };

    if let Some(radius) = read_env::<f64>("NAV_RADIUS") {
        config.default_radius = radius;
    }
    if let Some(max) = read_env::<usize>("NAV_MAX_NODES") {
        config.max_explored_nodes = max.max(1);
    }

    Ok(config)
}

/// Build a world with the mask at `mask` installed.
pub fn load_world(mask: &Path, config: NavConfig) -> Result<NavWorld> {
    let map = MaskLoader::load(mask)
        .with_context(|| format!("Failed to load collision mask: {}", mask.display()))?;
    Ok(NavWorld::with_map(config, map))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_points() {
        assert_eq!(parse_point("3,4.5"), Ok(Point::new(3.0, 4.5)));
        assert_eq!(parse_point(" 10 , 20 "), Ok(Point::new(10.0, 20.0)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
        assert!(parse_point("NaN,1").is_err());
    }
}
