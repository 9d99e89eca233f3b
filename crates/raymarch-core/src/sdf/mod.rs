//! Signed Distance Functions (SDF) for implicit surfaces
//!
//! SDFs represent shapes as functions that return the distance from any point
//! in space to the nearest surface. Negative values are inside, positive
//! values are outside, and zero is exactly on the surface.
//!
//! Sphere tracing relies on the returned value being a lower bound on the true
//! distance in every direction (the field is 1-Lipschitz). Any new primitive
//! must keep that property or the marcher can step through thin geometry.

pub mod primitives;

use glam::Vec3;

/// The core SDF trait - any type that can compute distance from a point
pub trait Sdf: Send + Sync {
    /// Calculate the signed distance from point `p` to the surface.
    ///
    /// - Returns negative values for points inside the shape
    /// - Returns positive values for points outside the shape
    /// - Returns zero for points exactly on the surface
    fn distance(&self, p: Vec3) -> f32;
}

// Plain closures are fields too, which keeps ad-hoc fields cheap to write.
impl<F> Sdf for F
where
    F: Fn(Vec3) -> f32 + Send + Sync,
{
    fn distance(&self, p: Vec3) -> f32 {
        self(p)
    }
}

pub use primitives::*;
