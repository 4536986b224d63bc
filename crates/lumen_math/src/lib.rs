//! Lumen math types.
//!
//! Everything is double precision: the renderer works with scenes whose
//! walls are spheres of radius 1e5, and single precision loses the surface.

// Re-export glam for convenience
pub use glam;

mod interval;
mod onb;
mod ray;

pub use interval::Interval;
pub use onb::Onb;
pub use ray::Ray;

/// 3-component double precision vector.
///
/// Supports the usual component-wise `+ - *`, scalar scaling, `dot`,
/// `cross` and `normalize` through glam.
pub type Vec3 = glam::DVec3;

/// Normalize `v`.
///
/// `v` must have a nonzero, finite length. A zero vector has no direction
/// and glam would hand back NaN components, so this is a precondition of
/// every caller: surface normals and scatter directions are never zero.
/// Debug builds assert it.
#[inline]
pub fn unit(v: Vec3) -> Vec3 {
    debug_assert!(
        v.length_squared() > 0.0,
        "normalize called on a zero-length vector"
    );
    v.normalize()
}

/// Mirror `d` about the surface normal `n`: `d - 2 (n . d) n`.
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - n * 2.0 * n.dot(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        // Elementwise product, used for albedo filtering
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_unit() {
        let v = unit(Vec3::new(3.0, 0.0, 4.0));
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);
        assert!((v.z - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_reflect() {
        // Ray heading down onto a floor bounces straight back up
        let r = reflect(Vec3::new(0.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::Y);

        // 45 degree incidence keeps the tangential part
        let d = unit(Vec3::new(1.0, -1.0, 0.0));
        let r = reflect(d, Vec3::Y);
        assert!((r - unit(Vec3::new(1.0, 1.0, 0.0))).length() < 1e-12);

        // The normal's orientation does not matter
        assert_eq!(reflect(d, Vec3::Y), reflect(d, -Vec3::Y));
    }
}
