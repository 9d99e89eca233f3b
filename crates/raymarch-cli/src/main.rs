//! Raymarch CLI - probe a distance field from the command line
//!
//! Evaluates the field, marches single rays and estimates normals. Results go
//! to stdout; logs go to stderr (`RUST_LOG=debug raymarch ...`).

mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use raymarch_core::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use output::{DistanceReport, MarchReport, NormalReport, print_report};

#[derive(Parser)]
#[command(name = "raymarch")]
#[command(about = "Evaluate and sphere-trace a signed distance field", long_about = None)]
#[command(version)]
struct Cli {
    /// Primitive to place in the scene
    #[arg(long, value_enum, default_value_t = ShapeKind::BoxFrame, global = true)]
    shape: ShapeKind,

    /// Animation time in seconds (drives the mandelbulb power)
    #[arg(long, global = true)]
    time: Option<f32>,

    /// Scene file (JSON); overrides --shape
    #[arg(long, global = true)]
    scene: Option<PathBuf>,

    /// Config file (JSON); missing fields keep their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the field at a point
    Distance {
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
        #[arg(allow_negative_numbers = true)]
        z: f32,
    },

    /// March one ray and report where it stops
    March {
        /// Ray origin as X,Y,Z
        #[arg(short, long, value_parser = parse_vec3, allow_hyphen_values = true)]
        origin: Vec3,

        /// Ray direction as X,Y,Z (normalized before marching)
        #[arg(short, long, value_parser = parse_vec3, allow_hyphen_values = true)]
        direction: Vec3,
    },

    /// Estimate the surface normal at a point
    Normal {
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
        #[arg(allow_negative_numbers = true)]
        z: f32,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShapeKind {
    Sphere,
    Torus,
    RoundedCube,
    BoxFrame,
    Mandelbulb,
}

impl ShapeKind {
    fn preset(self, time: Option<f32>) -> Shape {
        match self {
            Self::Sphere => Shape::sphere_preset(),
            Self::Torus => Shape::torus_preset(),
            Self::RoundedCube => Shape::rounded_cube_preset(),
            Self::BoxFrame => Shape::box_frame_preset(),
            Self::Mandelbulb => {
                time.map_or_else(Shape::mandelbulb_preset, Shape::animated_mandelbulb)
            }
        }
    }
}

fn parse_vec3(s: &str) -> std::result::Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected X,Y,Z but got '{s}'"));
    };
    let component = |v: &str| {
        v.parse::<f32>()
            .map_err(|e| format!("invalid component '{v}': {e}"))
    };
    Ok(Vec3::new(component(x)?, component(y)?, component(z)?))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let marcher = build_marcher(&cli)?;

    match cli.command {
        Commands::Distance { x, y, z } => {
            let point = Vec3::new(x, y, z);
            let report = DistanceReport {
                shape: marcher.scene().shape.kind(),
                point: point.to_array(),
                distance: marcher.scene_distance(point),
            };
            print_report(&report, cli.json)?;
        }
        Commands::March { origin, direction } => {
            run_march(&marcher, origin, direction, cli.json)?;
        }
        Commands::Normal { x, y, z } => {
            let point = Vec3::new(x, y, z);
            let report = NormalReport {
                shape: marcher.scene().shape.kind(),
                point: point.to_array(),
                distance: marcher.scene_distance(point),
                normal: marcher.surface_normal(point).to_array(),
            };
            print_report(&report, cli.json)?;
        }
        Commands::Config => {
            println!("{}", marcher.config().to_json_pretty()?);
        }
    }

    Ok(())
}

fn build_marcher(cli: &Cli) -> Result<Raymarcher> {
    let config = match &cli.config {
        Some(path) => RaymarchConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RaymarchConfig::default(),
    };

    let scene = match &cli.scene {
        Some(path) => Scene::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => Scene::new(cli.shape.preset(cli.time)),
    };

    tracing::info!("Scene: {}", scene.shape.kind());
    Ok(Raymarcher::new(scene, config))
}

fn run_march(marcher: &Raymarcher, origin: Vec3, direction: Vec3, json: bool) -> Result<()> {
    if direction.length_squared() == 0.0 {
        anyhow::bail!("Ray direction must be non-zero");
    }
    let direction = direction.normalize();

    let trace = marcher.trace(origin, direction);
    let hit = marcher.is_hit(trace.distance);
    let (point, normal) = if hit {
        let point = trace.point(origin, direction);
        (
            Some(point.to_array()),
            Some(marcher.surface_normal(point).to_array()),
        )
    } else {
        (None, None)
    };

    let report = MarchReport {
        shape: marcher.scene().shape.kind(),
        origin: origin.to_array(),
        direction: direction.to_array(),
        distance: trace.distance,
        steps: trace.steps,
        termination: output::termination_name(trace.termination),
        hit,
        point,
        normal,
    };
    print_report(&report, json)
}
