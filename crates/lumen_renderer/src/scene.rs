//! Read-only scene: an ordered list of spheres and the nearest-hit query.

use crate::{Sphere, SceneError};
use lumen_math::Ray;

/// Record of a ray-scene intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Index of the sphere that was hit
    pub index: usize,
}

/// An immutable collection of spheres.
///
/// Built once before rendering and shared by reference across all render
/// threads; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Build a scene, rejecting degenerate spheres.
    pub fn new(spheres: Vec<Sphere>) -> Result<Self, SceneError> {
        for (index, sphere) in spheres.iter().enumerate() {
            sphere.validate(index)?;
        }
        log::debug!("Scene built with {} spheres", spheres.len());
        Ok(Self { spheres })
    }

    /// Find the nearest sphere hit by `ray`.
    ///
    /// Every sphere is tested; the smallest valid distance wins and on an
    /// exact tie the lower index is kept.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut closest: Option<Hit> = None;

        for (index, sphere) in self.spheres.iter().enumerate() {
            if let Some(t) = sphere.intersect(ray) {
                if closest.map_or(true, |hit| t < hit.t) {
                    closest = Some(Hit { t, index });
                }
            }
        }

        closest
    }

    /// Get the sphere at `index`.
    ///
    /// Panics if `index` is out of range; hit indices from `intersect`
    /// are always valid.
    #[inline]
    pub fn sphere(&self, index: usize) -> &Sphere {
        &self.spheres[index]
    }

    /// All spheres in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Material, ScenePreset};
    use lumen_math::{unit, Vec3};

    fn ball(radius: f64, position: Vec3) -> Sphere {
        Sphere::new(
            radius,
            position,
            Color::ZERO,
            Color::splat(0.5),
            Material::Diffuse,
        )
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new(Vec::new()).expect("empty scene is valid");
        assert!(scene.is_empty());
        assert!(scene
            .intersect(&Ray::new(Vec3::ZERO, Vec3::X))
            .is_none());
    }

    #[test]
    fn test_rejects_degenerate_sphere() {
        let err = Scene::new(vec![ball(1.0, Vec3::ZERO), ball(-2.0, Vec3::X)])
            .expect_err("negative radius");
        assert_eq!(
            err,
            SceneError::InvalidRadius {
                index: 1,
                radius: -2.0
            }
        );
    }

    #[test]
    fn test_nearest_hit_wins() {
        // Insert the far sphere first so order cannot decide the result
        let scene = Scene::new(vec![
            ball(1.0, Vec3::new(0.0, 0.0, -10.0)),
            ball(1.0, Vec3::new(0.0, 0.0, -5.0)),
            ball(1.0, Vec3::new(0.0, 0.0, -20.0)),
        ])
        .expect("valid scene");

        let hit = scene
            .intersect(&Ray::new(Vec3::ZERO, -Vec3::Z))
            .expect("ray hits all three");
        assert_eq!(hit.index, 1);
        assert!((hit.t - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_every_classic_sphere_hit_from_outside() {
        let (scene, _) = ScenePreset::Classic.build().expect("preset is valid");

        for (index, sphere) in scene.spheres().iter().enumerate() {
            // Start just outside the sphere, aimed at its center
            let outward = unit(Vec3::new(0.3, 0.8, -0.5));
            let origin = sphere.position + outward * (sphere.radius * 1.01 + 0.5);
            let ray = Ray::new(origin, -outward);

            let t = sphere.intersect(&ray).expect("aimed at center");
            assert!(t > 0.0);

            // In the full scene another sphere may sit in front; a lone copy
            // must report itself.
            let alone = Scene::new(vec![*sphere]).expect("valid sphere");
            let hit = alone.intersect(&ray).expect("aimed at center");
            assert_eq!(hit.index, 0, "sphere {}", index);
            assert!(hit.t > 0.0);
        }
    }
}
