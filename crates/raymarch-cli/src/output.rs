//! Text and JSON rendering of probe results

use anyhow::Result;
use raymarch_core::Termination;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct DistanceReport {
    pub shape: &'static str,
    pub point: [f32; 3],
    pub distance: f32,
}

#[derive(Debug, Serialize)]
pub struct NormalReport {
    pub shape: &'static str,
    pub point: [f32; 3],
    pub distance: f32,
    pub normal: [f32; 3],
}

#[derive(Debug, Serialize)]
pub struct MarchReport {
    pub shape: &'static str,
    pub origin: [f32; 3],
    pub direction: [f32; 3],
    pub distance: f32,
    pub steps: u32,
    pub termination: &'static str,
    pub hit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<[f32; 3]>,
}

pub fn termination_name(termination: Termination) -> &'static str {
    match termination {
        Termination::Hit => "hit",
        Termination::Escaped => "escaped",
        Termination::StepLimit => "step_limit",
    }
}

/// Print as pretty JSON or as the report's text form.
pub fn print_report<T: Serialize + fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

struct Triple([f32; 3]);

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x:.4}, {y:.4}, {z:.4})")
    }
}

impl fmt::Display for DistanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {:.6}", self.shape, Triple(self.point), self.distance)
    }
}

impl fmt::Display for NormalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {}", self.shape, Triple(self.point))?;
        writeln!(f, "  distance: {:.6}", self.distance)?;
        write!(f, "  normal:   {}", Triple(self.normal))
    }
}

impl fmt::Display for MarchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} from {} along {}",
            self.shape,
            Triple(self.origin),
            Triple(self.direction)
        )?;
        writeln!(f, "  distance: {:.6}", self.distance)?;
        writeln!(f, "  steps:    {} ({})", self.steps, self.termination)?;
        if let (Some(point), Some(normal)) = (self.point, self.normal) {
            writeln!(f, "  hit:      {}", Triple(point))?;
            write!(f, "  normal:   {}", Triple(normal))
        } else {
            write!(f, "  miss")
        }
    }
}
