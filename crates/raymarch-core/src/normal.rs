//! Surface normals by numerical differentiation of the field
//!
//! The gradient of a distance field points away from the nearest surface, so
//! a normalized finite-difference gradient is the outward normal. Results are
//! only meaningful for points within a few epsilons of a zero crossing.

use crate::config::RaymarchConfig;
use crate::sdf::Sdf;
use glam::{Vec2, Vec2Swizzles, Vec3};
use serde::{Deserialize, Serialize};

/// Finite-difference scheme used for normals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalMethod {
    /// Four samples at the vertices of a tetrahedron. Slightly biased.
    #[default]
    Tetrahedral,
    /// Six axis-aligned samples, central difference.
    CentralDifference,
}

// Vertices of a regular tetrahedron; they sum to zero.
const TETRAHEDRON: [Vec3; 4] = [
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
];

/// Tetrahedral 4-tap normal estimate.
///
/// Each tetrahedron direction `k` is weighted by `field(p + k * eps)`; the sum
/// of the weighted directions is normalized.
pub fn surface_normal<S: Sdf + ?Sized>(field: &S, p: Vec3, eps: f32) -> Vec3 {
    TETRAHEDRON
        .iter()
        .fold(Vec3::ZERO, |n, &k| n + k * field.distance(p + k * eps))
        .normalize()
}

/// Central-difference 6-tap normal estimate.
pub fn surface_normal_central<S: Sdf + ?Sized>(field: &S, p: Vec3, eps: f32) -> Vec3 {
    let h = Vec2::new(eps, 0.0);
    Vec3::new(
        field.distance(p + h.xyy()) - field.distance(p - h.xyy()),
        field.distance(p + h.yxy()) - field.distance(p - h.yxy()),
        field.distance(p + h.yyx()) - field.distance(p - h.yyx()),
    )
    .normalize()
}

/// Normal at `p` using the scheme and step size from `config`.
pub fn estimate_normal<S: Sdf + ?Sized>(field: &S, p: Vec3, config: &RaymarchConfig) -> Vec3 {
    match config.normal_method {
        NormalMethod::Tetrahedral => surface_normal(field, p, config.normal_epsilon),
        NormalMethod::CentralDifference => {
            surface_normal_central(field, p, config.normal_epsilon)
        }
    }
}
