//! Phong-style face lighting.
//!
//! One orbiting key light, one fixed fill light, ambient, and a Blinn
//! half-vector specular term against a fixed view direction.

use crate::types::Vec3;

const AMBIENT: f64 = 0.15;
const KEY_DIFFUSE: f64 = 0.8;
const FILL_DIFFUSE: f64 = 0.15;
const SPECULAR: f64 = 0.55;
const SHININESS: f64 = 100.0;

const FILL_DIR: Vec3 = Vec3::new(-6.0, -4.0, -8.0);
const VIEW_DIR: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Light directions for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub key: Vec3,
    pub fill: Vec3,
    half: Vec3,
}

impl Lighting {
    /// Light rig at `time` seconds; the key light orbits slowly.
    pub fn at(time: f64) -> Self {
        let key = Vec3::new(
            (time * 0.7).sin() * 10.0,
            (time * 0.4).cos() * 8.0 + 10.0,
            -5.0,
        )
        .normalize();
        Self {
            key,
            fill: FILL_DIR.normalize(),
            half: (key + VIEW_DIR).normalize(),
        }
    }

    /// Brightness in `[0, 1]` for a unit surface normal.
    pub fn brightness(&self, normal: Vec3) -> f64 {
        let key = normal.dot(self.key).max(0.0) * KEY_DIFFUSE;
        let fill = normal.dot(self.fill).max(0.0) * FILL_DIFFUSE;
        let spec = normal.dot(self.half).max(0.0).powf(SHININESS) * SPECULAR;
        (AMBIENT + key + fill + spec).min(1.0)
    }
}
