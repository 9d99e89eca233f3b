//! SDF primitive shapes
//!
//! Pure functions from a query point (plus shape parameters) to a signed
//! distance. All primitives are centered at the origin.

use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Sphere of the given radius.
#[inline]
pub fn sphere(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

/// Torus with its tube sweeping around the z axis.
///
/// The canonical torus lies in the XZ plane; the query point is first rotated
/// a quarter turn about the x axis so the ring ends up in the XY plane.
/// `major_radius` is the distance from the center to the middle of the tube,
/// `minor_radius` the tube radius.
pub fn torus(p: Vec3, major_radius: f32, minor_radius: f32) -> f32 {
    let (sin_a, cos_a) = FRAC_PI_2.sin_cos();
    let y = p.y * cos_a - p.z * sin_a;
    let z = p.y * sin_a + p.z * cos_a;

    let q = Vec2::new(Vec2::new(p.x, z).length() - major_radius, y);
    q.length() - minor_radius
}

/// Box with the given half-extents, inflated by `edge_radius`.
pub fn rounded_cube(p: Vec3, half_extents: Vec3, edge_radius: f32) -> f32 {
    let q = p.abs() - half_extents;
    let outside = q.max(Vec3::ZERO).length();
    let inside = q.x.max(q.y.max(q.z)).min(0.0);
    outside + inside - edge_radius
}

/// Hollow wireframe box: only the twelve edges remain, each a square bar of
/// the given `thickness`.
pub fn box_frame(p: Vec3, half_extents: Vec3, thickness: f32) -> f32 {
    let e = Vec3::splat(thickness);
    let p = p.abs() - half_extents;
    let q = (p + e).abs() - e;

    let d1 = bar(Vec3::new(p.x, q.y, q.z));
    let d2 = bar(Vec3::new(q.x, p.y, q.z));
    let d3 = bar(Vec3::new(q.x, q.y, p.z));
    d1.min(d2).min(d3)
}

// Outside distance plus (non-positive) inside distance of an offset point.
#[inline]
fn bar(v: Vec3) -> f32 {
    v.max(Vec3::ZERO).length() + v.x.max(v.y.max(v.z)).min(0.0)
}

/// Escape-time distance estimate for the power-`power` mandelbulb.
///
/// Iterates `z -> |z|^power * (sin t cos f, sin t sin f, cos t) + p` with the
/// spherical angles of `z` multiplied by `power`, tracking the running
/// derivative `dr`. Iteration stops after `iterations` rounds or as soon as
/// `|z|` exceeds `escape_radius`. Each round adds back the original query
/// point `p`, which is what gives this field its shape.
///
/// Returns `0.5 * ln(r) * r / dr`. At the exact origin the angles are
/// undefined and the result is NaN.
pub fn mandelbulb(p: Vec3, power: f32, iterations: u32, escape_radius: f32) -> f32 {
    let mut z = p;
    let mut dr = 1.0_f32;
    let mut r = 0.0_f32;

    for _ in 0..iterations {
        r = z.length();
        if r > escape_radius {
            break;
        }

        let theta = (z.z / r).acos();
        let phi = z.y.atan2(z.x);
        dr = r.powf(power - 1.0) * power * dr + 1.0;

        let zr = r.powf(power);
        let theta = theta * power;
        let phi = phi * power;

        z = Vec3::new(
            theta.sin() * phi.cos(),
            theta.sin() * phi.sin(),
            theta.cos(),
        ) * zr
            + p;
    }

    0.5 * r.ln() * r / dr
}
