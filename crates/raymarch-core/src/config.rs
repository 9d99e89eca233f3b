//! Tuning constants for marching and normal estimation
//!
//! The defaults are part of the behavioral contract: changing them changes
//! which rays hit and where.

use crate::normal::NormalMethod;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Iteration cap for the marching loop
pub const DEFAULT_MAX_STEPS: u32 = 100;
/// Distance beyond which a ray counts as a miss
pub const DEFAULT_MAX_DISTANCE: f32 = 100.0;
/// Field value below which a ray counts as a hit
pub const DEFAULT_SURFACE_EPSILON: f32 = 0.01;
/// Finite-difference step for normal estimation
pub const DEFAULT_NORMAL_EPSILON: f32 = 0.0001;
/// Escape-time iteration cap for the mandelbulb
pub const DEFAULT_FRACTAL_ITERATIONS: u32 = 5;
/// Early-exit radius for the mandelbulb iteration
pub const DEFAULT_FRACTAL_ESCAPE_RADIUS: f32 = 2.0;

/// Marching and normal-estimation configuration.
///
/// Deserializing fills any missing field from [`RaymarchConfig::default`], so
/// a config file only needs to name what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaymarchConfig {
    /// Iteration cap for marching
    pub max_steps: u32,
    /// Miss threshold on distance traveled
    pub max_distance: f32,
    /// Hit threshold on the field value
    pub surface_epsilon: f32,
    /// Finite-difference step size
    pub normal_epsilon: f32,
    /// Escape-time iteration cap
    pub fractal_iterations: u32,
    /// Escape-time early-exit bound
    pub fractal_escape_radius: f32,
    /// Normal estimation scheme
    pub normal_method: NormalMethod,
}

impl Default for RaymarchConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            max_distance: DEFAULT_MAX_DISTANCE,
            surface_epsilon: DEFAULT_SURFACE_EPSILON,
            normal_epsilon: DEFAULT_NORMAL_EPSILON,
            fractal_iterations: DEFAULT_FRACTAL_ITERATIONS,
            fractal_escape_radius: DEFAULT_FRACTAL_ESCAPE_RADIUS,
            normal_method: NormalMethod::default(),
        }
    }
}

impl RaymarchConfig {
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_surface_epsilon(mut self, surface_epsilon: f32) -> Self {
        self.surface_epsilon = surface_epsilon;
        self
    }

    pub fn with_normal_epsilon(mut self, normal_epsilon: f32) -> Self {
        self.normal_epsilon = normal_epsilon;
        self
    }

    pub fn with_fractal_iterations(mut self, fractal_iterations: u32) -> Self {
        self.fractal_iterations = fractal_iterations;
        self
    }

    pub fn with_fractal_escape_radius(mut self, fractal_escape_radius: f32) -> Self {
        self.fractal_escape_radius = fractal_escape_radius;
        self
    }

    pub fn with_normal_method(mut self, normal_method: NormalMethod) -> Self {
        self.normal_method = normal_method;
        self
    }

    /// A marched distance at or past `max_distance` is a miss.
    pub fn is_miss(&self, distance: f32) -> bool {
        distance >= self.max_distance
    }

    /// A marched distance short of `max_distance`. NaN is neither a hit nor a miss.
    pub fn is_hit(&self, distance: f32) -> bool {
        distance < self.max_distance
    }

    /// Check that every constant is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(Error::InvalidConfig("max_steps must be at least 1".into()));
        }
        if self.fractal_iterations == 0 {
            return Err(Error::InvalidConfig(
                "fractal_iterations must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("max_distance", self.max_distance),
            ("surface_epsilon", self.surface_epsilon),
            ("normal_epsilon", self.normal_epsilon),
            ("fractal_escape_radius", self.fractal_escape_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!("Loaded raymarch config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract_constants() {
        let config = RaymarchConfig::default();
        assert_eq!(config.max_steps, 100);
        assert_eq!(config.max_distance, 100.0);
        assert_eq!(config.surface_epsilon, 0.01);
        assert_eq!(config.normal_epsilon, 0.0001);
        assert_eq!(config.fractal_iterations, 5);
        assert_eq!(config.fractal_escape_radius, 2.0);
        assert_eq!(config.normal_method, NormalMethod::Tetrahedral);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn hit_and_miss_split_at_max_distance() {
        let config = RaymarchConfig::default();
        assert!(config.is_hit(4.0));
        assert!(config.is_miss(100.0));
        assert!(config.is_miss(129.0));
        // A NaN field poisons the distance; it must not read as a hit
        assert!(!config.is_hit(f32::NAN));
        assert!(!config.is_miss(f32::NAN));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RaymarchConfig::from_json_str(r#"{ "max_steps": 250 }"#).unwrap();
        assert_eq!(config.max_steps, 250);
        assert_eq!(config.surface_epsilon, DEFAULT_SURFACE_EPSILON);
    }

    #[test]
    fn json_round_trip() {
        let config = RaymarchConfig::default()
            .with_max_distance(50.0)
            .with_normal_method(NormalMethod::CentralDifference);
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"central_difference\""));
        assert_eq!(RaymarchConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn rejects_unusable_values() {
        assert!(RaymarchConfig::default().with_max_steps(0).validate().is_err());
        assert!(RaymarchConfig::default().with_fractal_iterations(0).validate().is_err());
        assert!(RaymarchConfig::default().with_surface_epsilon(0.0).validate().is_err());
        assert!(RaymarchConfig::default().with_normal_epsilon(-1e-4).validate().is_err());
        assert!(RaymarchConfig::default().with_max_distance(f32::INFINITY).validate().is_err());

        let err = RaymarchConfig::from_json_str(r#"{ "fractal_escape_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = RaymarchConfig::from_json_str(r#"{ "fractal_iterations": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = RaymarchConfig::from_json_str("{ max_steps: ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
