//! # Raymarch Core
//!
//! Signed distance field evaluation and sphere tracing.
//!
//! This crate is the numerical core of a ray-marching renderer. It answers two
//! questions for a caller-supplied ray: how far along the ray is the nearest
//! surface, and which way does that surface face. Camera models, pixel loops,
//! shading and image output belong to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use raymarch_core::prelude::*;
//!
//! let marcher = Raymarcher::new(Scene::new(Shape::sphere(1.0)), RaymarchConfig::default());
//!
//! let origin = Vec3::new(0.0, 0.0, 5.0);
//! let direction = Vec3::new(0.0, 0.0, -1.0);
//! let distance = marcher.march(origin, direction);
//!
//! if marcher.is_hit(distance) {
//!     let normal = marcher.surface_normal(origin + direction * distance);
//!     assert!(normal.z > 0.9);
//! }
//! ```
//!
//! ## Units and Conventions
//!
//! - **Precision**: all distances use `f32`
//! - **Directions**: ray directions are expected to be normalized by the caller
//! - **Degenerate input**: normalizing a zero vector and evaluating the
//!   mandelbulb at the exact origin propagate NaN/infinity, unguarded

pub mod config;
pub mod march;
pub mod normal;
pub mod raymarcher;
pub mod scene;
pub mod sdf;
pub mod vector;

mod error;

pub use config::RaymarchConfig;
pub use error::{Error, Result};
pub use march::{MarchTrace, Termination, march, march_traced};
pub use normal::{NormalMethod, estimate_normal, surface_normal, surface_normal_central};
pub use raymarcher::Raymarcher;
pub use scene::{Fractal, Scene, Shape, scene_distance};
pub use sdf::Sdf;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::RaymarchConfig;
    pub use crate::march::{MarchTrace, Termination, march, march_traced};
    pub use crate::normal::{NormalMethod, surface_normal};
    pub use crate::raymarcher::Raymarcher;
    pub use crate::scene::{Scene, Shape, scene_distance};
    pub use crate::sdf::{Sdf, primitives};
    pub use crate::vector::{Vec2, Vec2Swizzles, Vec3, dot};
    pub use crate::{Error, Result};
}
