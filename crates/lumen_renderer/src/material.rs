//! Surface materials and their scattering helpers.
//!
//! Materials form a closed set: ideal diffuse, ideal mirror and ideal
//! dielectric. The radiance estimator dispatches on the variant; the
//! helpers here hold the per-material geometry.

use lumen_math::{unit, Onb, Vec3};
use std::f64::consts::PI;

/// Color type alias (RGB values, linear radiance or reflectance)
pub type Color = Vec3;

/// Index of refraction outside every sphere (vacuum).
pub const IOR_OUTSIDE: f64 = 1.0;
/// Index of refraction inside refractive spheres (glass).
pub const IOR_GLASS: f64 = 1.5;

/// How a surface scatters light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    /// Ideal Lambertian reflector.
    Diffuse,
    /// Perfect mirror.
    Specular,
    /// Smooth glass, reflecting and refracting per Fresnel.
    Refractive,
}

/// Cosine-weighted direction on the hemisphere around `nl`.
///
/// `r1` and `r2` are uniform variates in [0, 1). The result is unit length
/// by construction (`r2 + (1 - r2) = 1`), normalized again to absorb
/// rounding.
pub fn cosine_hemisphere(nl: Vec3, r1: f64, r2: f64) -> Vec3 {
    let phi = 2.0 * PI * r1;
    let r2s = r2.sqrt();
    let onb = Onb::from_w(nl);
    unit(onb.local(phi.cos() * r2s, phi.sin() * r2s, (1.0 - r2).sqrt()))
}

/// Outcome of a ray meeting a dielectric boundary without total internal
/// reflection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refraction {
    /// Unit direction of the transmitted ray.
    pub direction: Vec3,
    /// Fresnel reflectance (Schlick).
    pub reflectance: f64,
    /// `1 - reflectance`.
    pub transmittance: f64,
}

/// Refract `d` at a glass surface.
///
/// `n` is the outward normal, `nl` the normal facing the incoming ray.
/// Returns `None` on total internal reflection, in which case only the
/// mirror direction carries light.
pub fn refract(d: Vec3, n: Vec3, nl: Vec3) -> Option<Refraction> {
    let into = n.dot(nl) > 0.0;
    let nnt = if into {
        IOR_OUTSIDE / IOR_GLASS
    } else {
        IOR_GLASS / IOR_OUTSIDE
    };
    let ddn = d.dot(nl);
    let cos2t = 1.0 - nnt * nnt * (1.0 - ddn * ddn);
    if cos2t < 0.0 {
        return None;
    }

    let sign = if into { 1.0 } else { -1.0 };
    let direction = unit(d * nnt - n * (sign * (ddn * nnt + cos2t.sqrt())));

    let cos_theta = if into { -ddn } else { direction.dot(n) };
    let reflectance = schlick(cos_theta);
    Some(Refraction {
        direction,
        reflectance,
        transmittance: 1.0 - reflectance,
    })
}

/// Schlick's approximation of Fresnel reflectance at the glass boundary.
#[inline]
fn schlick(cos_theta: f64) -> f64 {
    let a = IOR_GLASS - IOR_OUTSIDE;
    let b = IOR_GLASS + IOR_OUTSIDE;
    let r0 = a * a / (b * b);
    let c = 1.0 - cos_theta;
    r0 + (1.0 - r0) * c.powi(5)
}
