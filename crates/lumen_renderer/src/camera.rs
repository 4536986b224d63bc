//! Pinhole camera for primary ray generation.

use lumen_math::{unit, Ray, Vec3};

/// Camera placement. Resolution-independent; see [`Camera::viewport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    direction: Vec3,
    /// Half-extent factor of the image plane at unit distance
    fov: f64,
    /// Distance primary rays are advanced along their direction before
    /// tracing starts
    push: f64,
}

impl Camera {
    /// Default image plane factor (about 29 degrees vertical field of view).
    pub const DEFAULT_FOV: f64 = 0.5135;

    /// Create a camera at `origin` looking along `direction`.
    ///
    /// `direction` must be nonzero; it is normalized here.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: unit(direction),
            fov: Self::DEFAULT_FOV,
            push: 0.0,
        }
    }

    /// Set the image plane factor.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Start primary rays `push` units ahead of the camera, e.g. to get past
    /// a wall behind which the camera sits.
    pub fn with_push(mut self, push: f64) -> Self {
        self.push = push;
        self
    }

    /// Compute the image plane for a `width` x `height` render.
    pub fn viewport(&self, width: u32, height: u32) -> Viewport {
        let w = f64::from(width);
        let h = f64::from(height);
        let cx = Vec3::new(w * self.fov / h, 0.0, 0.0);
        let cy = unit(cx.cross(self.direction)) * self.fov;
        Viewport {
            camera: *self,
            cx,
            cy,
            width: w,
            height: h,
        }
    }
}

/// Camera bound to an image resolution.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    camera: Camera,
    cx: Vec3,
    cy: Vec3,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Primary ray through pixel `(x, y)`, sub-cell `(sx, sy)` of its 2x2
    /// grid, offset by tent-filtered jitter `(dx, dy)` in [-1, 1).
    ///
    /// `y` counts from the bottom of the image.
    pub fn primary_ray(&self, x: u32, y: u32, sx: u32, sy: u32, dx: f64, dy: f64) -> Ray {
        let u = ((f64::from(sx) + 0.5 + dx) / 2.0 + f64::from(x)) / self.width - 0.5;
        let v = ((f64::from(sy) + 0.5 + dy) / 2.0 + f64::from(y)) / self.height - 0.5;
        let d = self.cx * u + self.cy * v + self.camera.direction;
        Ray::new(self.camera.origin + d * self.camera.push, unit(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_follows_view_direction() {
        let camera = Camera::new(Vec3::ZERO, -Vec3::Z);
        let viewport = camera.viewport(4, 4);

        // Pixel (2, 2) sub-cell (0, 0) with jitter -0.5 lands on the center
        let ray = viewport.primary_ray(2, 2, 0, 0, -0.5, -0.5);
        assert!((ray.direction() - -Vec3::Z).length() < 1e-12);
        assert_eq!(ray.origin(), Vec3::ZERO);
    }

    #[test]
    fn test_rows_count_upward() {
        let camera = Camera::new(Vec3::ZERO, -Vec3::Z);
        let viewport = camera.viewport(8, 8);

        let bottom = viewport.primary_ray(4, 0, 0, 0, 0.0, 0.0);
        let top = viewport.primary_ray(4, 7, 1, 1, 0.0, 0.0);
        assert!(bottom.direction().y < 0.0);
        assert!(top.direction().y > 0.0);

        let left = viewport.primary_ray(0, 4, 0, 0, 0.0, 0.0);
        let right = viewport.primary_ray(7, 4, 1, 0, 0.0, 0.0);
        assert!(left.direction().x < 0.0);
        assert!(right.direction().x > 0.0);
    }

    #[test]
    fn test_push_moves_origin_along_ray() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z).with_push(5.0);
        let viewport = camera.viewport(2, 2);
        let ray = viewport.primary_ray(1, 1, 0, 0, -0.5, -0.5);
        assert!((ray.origin() - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-12);
        assert!((ray.direction().length() - 1.0).abs() < 1e-12);
    }
}
