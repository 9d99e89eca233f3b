//! Scene composition
//!
//! A scene is exactly one live primitive. [`Shape`] names the primitive and
//! carries its parameters; [`Scene`] adds the escape-time settings the
//! mandelbulb needs and dispatches on the tag.
//!
//! Scenes load from JSON of the form
//! `{ "shape": { "kind": "box_frame", "half_extents": [1, 1, 1], "thickness": 0.1 } }`.

use crate::config::{DEFAULT_FRACTAL_ESCAPE_RADIUS, DEFAULT_FRACTAL_ITERATIONS, RaymarchConfig};
use crate::sdf::{Sdf, primitives};
use crate::{Error, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A primitive and its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Sphere centered at the origin
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Torus ring in the XY plane
    Torus {
        /// Distance from the center to the middle of the tube
        major_radius: f32,
        /// Tube radius
        minor_radius: f32,
    },
    /// Box with rounded edges
    RoundedCube {
        /// Half-size along each axis, before rounding
        half_extents: Vec3,
        /// Rounding added around the box
        edge_radius: f32,
    },
    /// The twelve edges of a box
    BoxFrame {
        /// Half-size along each axis
        half_extents: Vec3,
        /// Width of each edge bar
        thickness: f32,
    },
    /// Power-n mandelbulb fractal
    Mandelbulb {
        /// Exponent applied each iteration
        power: f32,
    },
}

impl Shape {
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    pub fn torus(major_radius: f32, minor_radius: f32) -> Self {
        Self::Torus {
            major_radius,
            minor_radius,
        }
    }

    pub fn rounded_cube(half_extents: Vec3, edge_radius: f32) -> Self {
        Self::RoundedCube {
            half_extents,
            edge_radius,
        }
    }

    pub fn box_frame(half_extents: Vec3, thickness: f32) -> Self {
        Self::BoxFrame {
            half_extents,
            thickness,
        }
    }

    pub fn mandelbulb(power: f32) -> Self {
        Self::Mandelbulb { power }
    }

    /// Mandelbulb whose power oscillates between 4 and 8 over time.
    ///
    /// The scene itself keeps no clock; callers pass their own time.
    pub fn animated_mandelbulb(time: f32) -> Self {
        Self::mandelbulb(6.0 + 2.0 * (time * 0.15).sin())
    }

    /// Unit sphere.
    pub fn sphere_preset() -> Self {
        Self::sphere(1.0)
    }

    /// Ring of radius 1.5 with a 0.5 tube.
    pub fn torus_preset() -> Self {
        Self::torus(1.5, 0.5)
    }

    /// 2x2x2 cube with 0.1 rounding.
    pub fn rounded_cube_preset() -> Self {
        Self::rounded_cube(Vec3::ONE, 0.1)
    }

    /// 2x2x2 frame with 0.1 bars.
    pub fn box_frame_preset() -> Self {
        Self::box_frame(Vec3::ONE, 0.1)
    }

    /// Mandelbulb at the animation's starting power.
    pub fn mandelbulb_preset() -> Self {
        Self::animated_mandelbulb(0.0)
    }

    /// Short name used in logs and CLI output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Torus { .. } => "torus",
            Self::RoundedCube { .. } => "rounded_cube",
            Self::BoxFrame { .. } => "box_frame",
            Self::Mandelbulb { .. } => "mandelbulb",
        }
    }

    /// Reject negative or non-finite parameters.
    ///
    /// Primitives evaluate such parameters without complaint, producing an
    /// inverted field; this is for input that comes from outside the program.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Sphere { radius } => non_negative("sphere radius", radius),
            Self::Torus {
                major_radius,
                minor_radius,
            } => {
                non_negative("torus major_radius", major_radius)?;
                non_negative("torus minor_radius", minor_radius)
            }
            Self::RoundedCube {
                half_extents,
                edge_radius,
            } => {
                non_negative_vec("rounded_cube half_extents", half_extents)?;
                non_negative("rounded_cube edge_radius", edge_radius)
            }
            Self::BoxFrame {
                half_extents,
                thickness,
            } => {
                non_negative_vec("box_frame half_extents", half_extents)?;
                non_negative("box_frame thickness", thickness)
            }
            Self::Mandelbulb { power } => {
                if power.is_finite() {
                    Ok(())
                } else {
                    Err(Error::InvalidParameter(format!(
                        "mandelbulb power must be finite, got {power}"
                    )))
                }
            }
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::box_frame_preset()
    }
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}

fn non_negative_vec(name: &str, value: Vec3) -> Result<()> {
    if value.is_finite() && value.min_element() >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}

/// Escape-time settings for the mandelbulb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fractal {
    /// Maximum escape-time iterations
    pub iterations: u32,
    /// Iteration stops once `|z|` exceeds this
    pub escape_radius: f32,
}

impl Default for Fractal {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_FRACTAL_ITERATIONS,
            escape_radius: DEFAULT_FRACTAL_ESCAPE_RADIUS,
        }
    }
}

impl From<&RaymarchConfig> for Fractal {
    fn from(config: &RaymarchConfig) -> Self {
        Self {
            iterations: config.fractal_iterations,
            escape_radius: config.fractal_escape_radius,
        }
    }
}

/// The scene's distance field: one primitive plus fractal settings.
///
/// Fractal settings are tuning constants rather than scene content, so they
/// are not part of the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub shape: Shape,
    #[serde(skip)]
    pub fractal: Fractal,
}

impl Scene {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            fractal: Fractal::default(),
        }
    }

    pub fn with_fractal(mut self, fractal: Fractal) -> Self {
        self.fractal = fractal;
        self
    }

    /// Evaluate the field at a world point.
    pub fn distance(&self, p: Vec3) -> f32 {
        match self.shape {
            Shape::Sphere { radius } => primitives::sphere(p, radius),
            Shape::Torus {
                major_radius,
                minor_radius,
            } => primitives::torus(p, major_radius, minor_radius),
            Shape::RoundedCube {
                half_extents,
                edge_radius,
            } => primitives::rounded_cube(p, half_extents, edge_radius),
            Shape::BoxFrame {
                half_extents,
                thickness,
            } => primitives::box_frame(p, half_extents, thickness),
            Shape::Mandelbulb { power } => primitives::mandelbulb(
                p,
                power,
                self.fractal.iterations,
                self.fractal.escape_radius,
            ),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.shape.validate()
    }

    /// Parse and validate a JSON scene.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scene: Self = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load and validate a JSON scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let scene = Self::from_json_str(&contents)?;
        tracing::debug!(
            "Loaded {} scene from {}",
            scene.shape.kind(),
            path.display()
        );
        Ok(scene)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Sdf for Scene {
    fn distance(&self, p: Vec3) -> f32 {
        Scene::distance(self, p)
    }
}

/// Free-function form of [`Scene::distance`].
pub fn scene_distance(scene: &Scene, p: Vec3) -> f32 {
    scene.distance(p)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dispatches_to_selected_primitive() {
        let p = Vec3::new(0.4, -1.3, 2.2);
        let cases = [
            (Shape::sphere_preset(), primitives::sphere(p, 1.0)),
            (Shape::torus_preset(), primitives::torus(p, 1.5, 0.5)),
            (
                Shape::rounded_cube_preset(),
                primitives::rounded_cube(p, Vec3::ONE, 0.1),
            ),
            (
                Shape::box_frame_preset(),
                primitives::box_frame(p, Vec3::ONE, 0.1),
            ),
            (
                Shape::mandelbulb(8.0),
                primitives::mandelbulb(p, 8.0, 5, 2.0),
            ),
        ];
        for (shape, expected) in cases {
            let scene = Scene::new(shape);
            assert_eq!(scene.distance(p), expected, "{}", shape.kind());
            assert_eq!(scene_distance(&scene, p), expected);
        }
    }

    #[test]
    fn default_scene_is_box_frame() {
        let scene = Scene::default();
        assert_eq!(scene.shape, Shape::box_frame(Vec3::ONE, 0.1));
        assert_eq!(scene.fractal, Fractal::default());
    }

    #[test]
    fn fractal_settings_come_from_config() {
        let config = RaymarchConfig::default().with_fractal_iterations(1);
        let p = Vec3::new(0.3, 0.2, 0.9);
        let scene = Scene::new(Shape::mandelbulb(8.0)).with_fractal(Fractal::from(&config));
        assert_eq!(scene.distance(p), primitives::mandelbulb(p, 8.0, 1, 2.0));
    }

    #[test]
    fn animated_power_oscillates_around_six() {
        assert_eq!(Shape::animated_mandelbulb(0.0), Shape::mandelbulb(6.0));
        let Shape::Mandelbulb { power } = Shape::animated_mandelbulb(std::f32::consts::PI / 0.3)
        else {
            panic!("expected a mandelbulb");
        };
        assert_relative_eq!(power, 8.0, epsilon = 1e-5);
    }

    #[test]
    fn parses_tagged_json() {
        let scene = Scene::from_json_str(
            r#"{ "shape": { "kind": "torus", "major_radius": 2.0, "minor_radius": 0.25 } }"#,
        )
        .unwrap();
        assert_eq!(scene.shape, Shape::torus(2.0, 0.25));

        let scene = Scene::from_json_str(
            r#"{ "shape": { "kind": "rounded_cube", "half_extents": [1.0, 0.5, 2.0], "edge_radius": 0.05 } }"#,
        )
        .unwrap();
        assert_eq!(
            scene.shape,
            Shape::rounded_cube(Vec3::new(1.0, 0.5, 2.0), 0.05)
        );
    }

    #[test]
    fn json_round_trip() {
        let scene = Scene::new(Shape::mandelbulb(7.5));
        let json = scene.to_json_pretty().unwrap();
        assert!(json.contains("\"mandelbulb\""));
        assert_eq!(Scene::from_json_str(&json).unwrap(), scene);
    }

    #[test]
    fn rejects_negative_parameters() {
        assert!(Shape::sphere(-1.0).validate().is_err());
        assert!(Shape::torus(1.5, -0.5).validate().is_err());
        assert!(Shape::box_frame(Vec3::new(1.0, -1.0, 1.0), 0.1).validate().is_err());
        assert!(Shape::rounded_cube(Vec3::ONE, f32::NAN).validate().is_err());
        assert!(Shape::mandelbulb(f32::INFINITY).validate().is_err());
        assert!(Shape::sphere(0.0).validate().is_ok());

        let err = Scene::from_json_str(r#"{ "shape": { "kind": "sphere", "radius": -2.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn unknown_kind_is_a_json_error() {
        let err = Scene::from_json_str(r#"{ "shape": { "kind": "teapot" } }"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
