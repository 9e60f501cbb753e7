//! Inspect collision answers at a single point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use nav_core::{DiscProbe, Point, WalkabilityOracle};

use crate::utils::{load_world, parse_point, resolve_config};

/// Report walkability and disc fit at one point
#[derive(Parser)]
pub struct Probe {
    /// Collision mask image (alpha 0 = walkable)
    #[arg(short, long, value_name = "IMAGE")]
    mask: PathBuf,

    /// Point to inspect as X,Y
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    at: Point,

    /// Disc radius (defaults to the configured radius)
    #[arg(short, long)]
    radius: Option<f64>,
}

impl Probe {
    pub fn execute(self) -> Result<()> {
        let config = resolve_config(None)?;
        let radius = self.radius.unwrap_or(config.default_radius);
        let world = load_world(&self.mask, config)?;
        let Some(map) = world.map() else {
            anyhow::bail!("Collision mask not installed: {}", self.mask.display());
        };
        let probe = DiscProbe::new(map);
        let Point { x, y } = self.at;

        println!("{} {}", style("Point:").bold().cyan(), self.at);
        match map.dimensions().pixel(x, y) {
            Some((px, py)) => println!("{} ({px}, {py})", style("Pixel:").bold().cyan()),
            None => println!("{} outside the map", style("Pixel:").bold().cyan()),
        }
        println!();

        println!("  Walkable: {}", yes_no(world.is_walkable(x, y)));
        println!(
            "  Disc r={radius} fits: {}",
            yes_no(world.can_circle_fit(x, y, radius))
        );

        let neighbors = probe.walkable_neighbors(self.at, radius);
        println!("  Open neighbors: {}", neighbors.len());
        for neighbor in neighbors {
            println!("    {neighbor}");
        }

        Ok(())
    }
}

fn yes_no(value: bool) -> console::StyledObject<&'static str> {
    if value {
        style("yes").green()
    } else {
        style("no").red()
    }
}
