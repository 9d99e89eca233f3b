//! The external interface consumed by a rendering driver

use crate::config::RaymarchConfig;
use crate::march::{self, MarchTrace};
use crate::normal;
use crate::scene::{Fractal, Scene};
use glam::Vec3;

/// A scene paired with its tuning constants.
///
/// Stateless and `Copy`, so a renderer can share one across threads and call
/// it per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Raymarcher {
    scene: Scene,
    config: RaymarchConfig,
}

impl Raymarcher {
    /// The scene's fractal settings are taken from `config`.
    pub fn new(scene: Scene, config: RaymarchConfig) -> Self {
        Self {
            scene: scene.with_fractal(Fractal::from(&config)),
            config,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &RaymarchConfig {
        &self.config
    }

    /// Raw field value at a world point.
    pub fn scene_distance(&self, point: Vec3) -> f32 {
        self.scene.distance(point)
    }

    /// Distance traveled along the ray; compare with [`is_hit`](Self::is_hit).
    pub fn march(&self, origin: Vec3, direction: Vec3) -> f32 {
        march::march(&self.scene, origin, direction, &self.config)
    }

    pub fn trace(&self, origin: Vec3, direction: Vec3) -> MarchTrace {
        march::march_traced(&self.scene, origin, direction, &self.config)
    }

    /// Unit outward normal. Only meaningful near a zero crossing.
    pub fn surface_normal(&self, point: Vec3) -> Vec3 {
        normal::estimate_normal(&self.scene, point, &self.config)
    }

    pub fn is_hit(&self, distance: f32) -> bool {
        self.config.is_hit(distance)
    }
}
