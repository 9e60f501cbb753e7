//! Plan a route across a collision mask and print the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use nav_core::{MotionTimeline, NavError, PathError, PlannedPath, Point};
use serde::Serialize;

use crate::utils::{load_world, parse_point, resolve_config};

/// Plan a route between two points
#[derive(Parser)]
pub struct FindPath {
    /// Collision mask image (alpha 0 = walkable)
    #[arg(short, long, value_name = "IMAGE")]
    mask: PathBuf,

    /// Start point as X,Y
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    from: Point,

    /// Destination as X,Y
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    to: Point,

    /// Agent radius (defaults to the configured radius)
    #[arg(short, long)]
    radius: Option<f64>,

    /// Planner configuration TOML
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Walking speed in units per second, used for the timeline estimate
    #[arg(short, long, default_value_t = 60.0)]
    speed: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable waypoint list and statistics
    Summary,
    /// Machine-readable JSON report
    Json,
}

#[derive(Serialize)]
struct Report {
    from: Point,
    to: Point,
    radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    planned: Option<PlannedPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<&'static str>,
}

impl FindPath {
    pub fn execute(self) -> Result<()> {
        let config = resolve_config(self.config.as_deref())?;
        let radius = self.radius.unwrap_or(config.default_radius);
        let world = load_world(&self.mask, config)?;

        let outcome = world.plan(self.from.x, self.from.y, self.to.x, self.to.y, Some(radius));
        let duration = match &outcome {
            Ok(planned) => Some(
                MotionTimeline::new(self.from, &planned.path, self.speed)
                    .context("Invalid --speed")?
                    .total_duration(),
            ),
            Err(_) => None,
        };

        match self.format {
            OutputFormat::Summary => {
                println!("{} {}", style("Mask:").bold().cyan(), self.mask.display());
                if let Some(map) = world.map() {
                    println!(
                        "{} {}x{} ({:.1}% walkable)",
                        style("Size:").bold().cyan(),
                        map.width(),
                        map.height(),
                        map.walkable_ratio() * 100.0
                    );
                }
                println!(
                    "{} {} -> {} (radius {})",
                    style("Query:").bold().cyan(),
                    self.from,
                    self.to,
                    radius
                );
                println!();
                match &outcome {
                    Ok(planned) => print_summary(planned, duration, self.speed),
                    Err(error) => print_failure(error),
                }
            }
            OutputFormat::Json => {
                let (planned, error) = match outcome {
                    Ok(planned) => (Some(planned), None),
                    Err(error) => (None, Some(error)),
                };
                let report = Report {
                    from: self.from,
                    to: self.to,
                    radius,
                    planned,
                    duration,
                    error_code: error.as_ref().map(NavError::error_code),
                    error: error.map(|e| e.to_string()),
                };
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize report to JSON")?;
                println!("{json}");
            }
        }

        Ok(())
    }
}

fn print_summary(planned: &PlannedPath, duration: Option<f64>, speed: f64) {
    let stats = &planned.stats;
    println!("{}", style("=== Path Found ===").bold().green());
    println!();

    println!("{}", style("Statistics:").bold().yellow());
    println!("  Waypoints: {}", stats.waypoints);
    if stats.shortcut {
        println!("  Straight segment clear, search skipped");
    } else {
        println!("  Raw Waypoints: {}", stats.raw_waypoints);
        println!("  Explored Nodes: {}", stats.explored);
    }
    if let Some(duration) = duration {
        println!("  Walk Time: {duration:.2}s at {speed} units/s");
    }
    println!();

    println!("{}", style("Waypoints:").bold().yellow());
    for (index, waypoint) in planned.path.iter().enumerate() {
        println!("  {:>3}. {}", index + 1, waypoint);
    }
}

fn print_failure(error: &PathError) {
    println!("{}", style("=== No Path ===").bold().red());
    println!();
    println!("  {} {}", style("Reason:").bold(), error);
    println!("  {} {}", style("Code:").bold(), error.error_code());
    println!("  {} {}", style("Severity:").bold(), error.severity().as_str());
}
