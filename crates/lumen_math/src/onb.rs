use crate::{unit, Vec3};

/// Orthonormal basis `(u, v, w)` built around a unit vector `w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Onb {
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
}

impl Onb {
    /// Build a basis whose `w` axis is `w` (must be unit length).
    ///
    /// The helper axis for the first cross product is world Y whenever `w`
    /// has a noticeable X component and world X otherwise, so it is never
    /// parallel to `w`.
    pub fn from_w(w: Vec3) -> Self {
        let helper = if w.x.abs() > 0.1 { Vec3::Y } else { Vec3::X };
        let u = unit(helper.cross(w));
        let v = w.cross(u);
        Self { u, v, w }
    }

    /// Express local coordinates `(a, b, c)` in world space.
    #[inline]
    pub fn local(&self, a: f64, b: f64, c: f64) -> Vec3 {
        self.u * a + self.v * b + self.w * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(onb: &Onb) {
        for axis in [onb.u, onb.v, onb.w] {
            assert!((axis.length() - 1.0).abs() < 1e-12);
        }
        assert!(onb.u.dot(onb.v).abs() < 1e-12);
        assert!(onb.u.dot(onb.w).abs() < 1e-12);
        assert!(onb.v.dot(onb.w).abs() < 1e-12);
    }

    #[test]
    fn test_onb_axis_aligned() {
        for w in [Vec3::X, Vec3::Y, Vec3::Z, -Vec3::X, -Vec3::Y, -Vec3::Z] {
            let onb = Onb::from_w(w);
            assert_orthonormal(&onb);
            assert_eq!(onb.w, w);
        }
    }

    #[test]
    fn test_onb_oblique() {
        let onb = Onb::from_w(unit(Vec3::new(0.3, -0.7, 0.2)));
        assert_orthonormal(&onb);
        let z = onb.local(0.0, 0.0, 1.0);
        assert!((z - onb.w).length() < 1e-12);
    }
}
