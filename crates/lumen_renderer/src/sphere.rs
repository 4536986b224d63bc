//! Sphere primitive for ray tracing.

use crate::{Color, Material, SceneError};
use lumen_math::{unit, Interval, Ray, Vec3};

/// Hits closer than this to the ray origin are ignored, so a ray leaving a
/// surface does not immediately re-hit it through rounding error.
pub const HIT_EPSILON: f64 = 1e-4;

/// A sphere with its surface description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    pub position: Vec3,
    /// Radiance emitted from the surface (zero for non-lights)
    pub emission: Color,
    /// Per-channel reflectance
    pub color: Color,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. Validation happens when it joins a `Scene`.
    pub fn new(
        radius: f64,
        position: Vec3,
        emission: Color,
        color: Color,
        material: Material,
    ) -> Self {
        Self {
            radius,
            position,
            emission,
            color,
            material,
        }
    }

    /// Distance along `ray` to the nearest hit beyond `HIT_EPSILON`.
    ///
    /// `ray.direction` must be unit length. Solves
    /// `|o + t d - c|^2 = r^2` with `b = (c - o) . d` and
    /// `det = b^2 - |c - o|^2 + r^2`, preferring the near root.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let op = self.position - ray.origin();
        let b = op.dot(ray.direction());
        let det = b * b - op.dot(op) + self.radius * self.radius;
        if det < 0.0 {
            return None;
        }

        let sqrt_det = det.sqrt();
        let ahead = Interval::ahead(HIT_EPSILON);
        [b - sqrt_det, b + sqrt_det]
            .into_iter()
            .find(|&t| ahead.surrounds(t))
    }

    /// Outward unit normal at surface point `p`.
    #[inline]
    pub fn normal_at(&self, p: Vec3) -> Vec3 {
        unit(p - self.position)
    }

    /// Check the sphere describes real geometry.
    pub(crate) fn validate(&self, index: usize) -> Result<(), SceneError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SceneError::InvalidRadius {
                index,
                radius: self.radius,
            });
        }
        let fields = [
            ("position", self.position),
            ("emission", self.emission),
            ("color", self.color),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SceneError::NonFinite { index, field });
            }
        }
        Ok(())
    }

    /// True if the sphere emits any light.
    pub fn is_emissive(&self) -> bool {
        self.emission.max_element() > 0.0
    }
}
