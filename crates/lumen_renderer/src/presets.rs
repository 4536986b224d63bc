//! Built-in scenes.

use crate::{Camera, Color, Material, Scene, SceneError, Sphere};
use lumen_math::Vec3;
use std::fmt;
use std::str::FromStr;

/// A built-in scene together with the camera that frames it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenePreset {
    /// Box of giant wall spheres with a mirror ball, a glass ball and a
    /// large light poking through the ceiling.
    #[default]
    Classic,
    /// Small warm-toned diffuse box lit by a sphere above the ceiling.
    Lantern,
}

impl ScenePreset {
    pub const ALL: [ScenePreset; 2] = [ScenePreset::Classic, ScenePreset::Lantern];

    /// Preset name as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Lantern => "lantern",
        }
    }

    /// Build the scene and its camera.
    pub fn build(self) -> Result<(Scene, Camera), SceneError> {
        let (spheres, camera) = match self {
            Self::Classic => (classic_spheres(), classic_camera()),
            Self::Lantern => (lantern_spheres(), lantern_camera()),
        };
        let scene = Scene::new(spheres)?;
        log::info!(
            "Built '{}' scene: {} spheres, {} emissive",
            self.name(),
            scene.len(),
            scene.spheres().iter().filter(|s| s.is_emissive()).count()
        );
        Ok((scene, camera))
    }
}

impl fmt::Display for ScenePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown scene preset '{}'", s))
    }
}

#[rustfmt::skip]
fn classic_spheres() -> Vec<Sphere> {
    use Material::{Diffuse, Refractive, Specular};

    let none = Color::ZERO;
    vec![
        // Left
        Sphere::new(1e5, Vec3::new(1e5 + 1.0, 40.8, 81.6), none, Color::new(0.75, 0.25, 0.25), Diffuse),
        // Right
        Sphere::new(1e5, Vec3::new(-1e5 + 99.0, 40.8, 81.6), none, Color::new(0.25, 0.25, 0.75), Diffuse),
        // Back
        Sphere::new(1e5, Vec3::new(50.0, 40.8, 1e5), none, Color::new(0.25, 0.75, 0.25), Diffuse),
        // Front, behind the camera's image plane
        Sphere::new(1e5, Vec3::new(50.0, 40.8, -1e5 + 170.0), none, Color::ZERO, Diffuse),
        // Bottom
        Sphere::new(1e5, Vec3::new(50.0, 1e5, 81.6), none, Color::splat(0.75), Diffuse),
        // Top
        Sphere::new(1e5, Vec3::new(50.0, -1e5 + 81.6, 81.6), none, Color::splat(0.75), Diffuse),
        // Mirror
        Sphere::new(16.5, Vec3::new(27.0, 16.5, 47.0), none, Color::splat(0.999), Specular),
        // Glass
        Sphere::new(16.5, Vec3::new(73.0, 16.5, 78.0), none, Color::splat(0.999), Refractive),
        // Light
        Sphere::new(600.0, Vec3::new(50.0, 681.6 - 0.27, 81.6), Color::splat(12.0), Color::ZERO, Diffuse),
    ]
}

fn classic_camera() -> Camera {
    // Pushed past the front wall at z = 170
    Camera::new(Vec3::new(50.0, 52.0, 295.6), Vec3::new(0.0, -0.042612, -1.0)).with_push(140.0)
}

#[rustfmt::skip]
fn lantern_spheres() -> Vec<Sphere> {
    use Material::Diffuse;

    let none = Color::ZERO;
    let warm = Color::new(0.9, 0.8, 0.7);
    vec![
        // Left
        Sphere::new(200.0, Vec3::new(-200.6, 0.0, 0.0), none, Color::new(0.75, 0.25, 0.25), Diffuse),
        // Right
        Sphere::new(200.0, Vec3::new(200.6, 0.0, 0.0), none, Color::new(0.25, 0.25, 0.75), Diffuse),
        // Floor
        Sphere::new(200.0, Vec3::new(0.0, -200.4, 0.0), none, warm, Diffuse),
        // Ceiling
        Sphere::new(200.0, Vec3::new(0.0, 200.4, 0.0), none, warm, Diffuse),
        // Back
        Sphere::new(200.0, Vec3::new(0.0, 0.0, -200.4), none, warm, Diffuse),
        // Front
        Sphere::new(200.0, Vec3::new(0.0, 0.0, 202.0), none, warm, Diffuse),
        Sphere::new(0.16, Vec3::new(-0.25, -0.24, -0.1), none, warm, Diffuse),
        Sphere::new(0.16, Vec3::new(0.25, -0.24, 0.1), none, warm, Diffuse),
        // Light
        Sphere::new(1.0, Vec3::new(0.0, 1.36, 0.0), Color::new(9.0, 8.0, 6.0), Color::ZERO, Diffuse),
    ]
}

fn lantern_camera() -> Camera {
    Camera::new(Vec3::new(0.0, 0.1, 1.9), Vec3::new(0.0, -0.05, -1.0)).with_fov(0.55)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_build() {
        for preset in ScenePreset::ALL {
            let (scene, _camera) = preset.build().expect("presets are valid");
            assert_eq!(scene.len(), 9);
            assert_eq!(
                scene.spheres().iter().filter(|s| s.is_emissive()).count(),
                1
            );
        }
    }

    #[test]
    fn test_classic_layout() {
        let (scene, camera) = ScenePreset::Classic.build().expect("valid");
        let kinds: Vec<Material> = scene.spheres().iter().map(|s| s.material).collect();
        assert_eq!(kinds.iter().filter(|m| **m == Material::Specular).count(), 1);
        assert_eq!(kinds.iter().filter(|m| **m == Material::Refractive).count(), 1);
        let expected = Camera::new(Vec3::new(50.0, 52.0, 295.6), Vec3::new(0.0, -0.042612, -1.0))
            .with_push(140.0);
        assert_eq!(camera, expected);
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!("classic".parse::<ScenePreset>(), Ok(ScenePreset::Classic));
        assert_eq!("Lantern".parse::<ScenePreset>(), Ok(ScenePreset::Lantern));
        assert!("cornell".parse::<ScenePreset>().is_err());
        assert_eq!(ScenePreset::default().to_string(), "classic");
    }
}
