//! Sphere tracing
//!
//! Walks a ray forward by the field value at the current point. Because the
//! field never exceeds the true distance to the surface, each step is safe.
//! The loop has no bisection or refinement: precision is bounded by
//! `surface_epsilon` and cost by `max_steps`.

use crate::config::RaymarchConfig;
use crate::sdf::Sdf;
use glam::Vec3;

/// Why the marching loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Field value fell below `surface_epsilon`
    Hit,
    /// Distance traveled exceeded `max_distance`
    Escaped,
    /// Ran out of steps before either
    StepLimit,
}

/// Result of a traced march
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchTrace {
    /// Distance traveled along the ray
    pub distance: f32,
    /// Field evaluations performed
    pub steps: u32,
    pub termination: Termination,
}

impl MarchTrace {
    /// Point reached along the ray
    pub fn point(&self, origin: Vec3, direction: Vec3) -> Vec3 {
        origin + direction * self.distance
    }
}

/// March a ray and return the distance traveled.
///
/// A returned distance at or past `config.max_distance` is a miss; see
/// [`RaymarchConfig::is_miss`].
pub fn march<S: Sdf + ?Sized>(
    field: &S,
    origin: Vec3,
    direction: Vec3,
    config: &RaymarchConfig,
) -> f32 {
    march_traced(field, origin, direction, config).distance
}

/// March a ray, also reporting step count and stop reason.
pub fn march_traced<S: Sdf + ?Sized>(
    field: &S,
    origin: Vec3,
    direction: Vec3,
    config: &RaymarchConfig,
) -> MarchTrace {
    let mut traveled = 0.0_f32;
    let mut steps = 0;
    let mut termination = Termination::StepLimit;

    while steps < config.max_steps {
        let d = field.distance(origin + direction * traveled);
        traveled += d;
        steps += 1;

        if traveled > config.max_distance {
            termination = Termination::Escaped;
            break;
        }
        if d < config.surface_epsilon {
            termination = Termination::Hit;
            break;
        }
    }

    tracing::trace!(
        distance = traveled,
        steps,
        termination = ?termination,
        "march finished"
    );

    MarchTrace {
        distance: traveled,
        steps,
        termination,
    }
}
