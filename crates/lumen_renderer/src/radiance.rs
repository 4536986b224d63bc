//! Monte Carlo radiance estimator.
//!
//! Computes the radiance arriving along a ray by following light paths
//! through the scene:
//! - ideal diffuse bounces sampled with a cosine-weighted hemisphere
//! - perfect mirror reflection
//! - glass with Schlick-weighted reflection/refraction
//! - Russian roulette termination past a fixed depth
//!
//! The estimator is linear in the light it gathers, so instead of recursing
//! it walks an explicit stack of pending path vertices, each carrying the
//! product of reflectances (its throughput) accumulated on the way there.
//! Vertices are popped depth-first, which keeps the order of random draws
//! identical to the recursive formulation.

use crate::sampling::gen_f64;
use crate::{cosine_hemisphere, refract, Color, Material, Scene};
use lumen_math::{reflect, Ray};
use rand::RngCore;

/// Paths deeper than this face Russian roulette.
pub const ROULETTE_DEPTH: u32 = 5;

/// Glass vertices deeper than this follow one randomly chosen branch
/// instead of both.
pub const SPLIT_DEPTH: u32 = 2;

/// Survival probabilities at or below this terminate the path outright.
const MIN_SURVIVAL: f64 = 1e-12;

/// Russian roulette for a vertex at `depth` (already incremented) with
/// reflectance `f`.
///
/// Up to `ROULETTE_DEPTH` the path always continues with `f` unchanged.
/// Beyond it one variate is drawn and the path survives with probability
/// `p = max(f)`, its reflectance rescaled by `1/p` so the estimate stays
/// unbiased. Returns `None` when the path terminates.
pub fn russian_roulette(f: Color, depth: u32, rng: &mut dyn RngCore) -> Option<Color> {
    if depth <= ROULETTE_DEPTH {
        return Some(f);
    }
    let p = f.max_element();
    let xi = gen_f64(rng);
    if p > MIN_SURVIVAL && xi < p {
        Some(f / p)
    } else {
        None
    }
}

/// A path vertex waiting to be traced.
#[derive(Debug, Clone, Copy)]
struct PendingRay {
    ray: Ray,
    depth: u32,
    throughput: Color,
}

/// Radiance estimator bound to a scene.
///
/// Holds the vertex stack so it can be reused across samples without
/// reallocating.
pub struct PathTracer<'a> {
    scene: &'a Scene,
    stack: Vec<PendingRay>,
}

impl<'a> PathTracer<'a> {
    /// Create a tracer for `scene`.
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            stack: Vec::with_capacity(8),
        }
    }

    /// Estimate the radiance arriving at `ray.origin` from `ray.direction`.
    ///
    /// `ray.direction` must be unit length. Rays that escape the scene
    /// contribute black.
    pub fn radiance(&mut self, ray: &Ray, rng: &mut dyn RngCore) -> Color {
        let mut total = Color::ZERO;
        self.stack.clear();
        self.stack.push(PendingRay {
            ray: *ray,
            depth: 0,
            throughput: Color::ONE,
        });

        while let Some(PendingRay {
            ray,
            depth,
            throughput,
        }) = self.stack.pop()
        {
            let Some(hit) = self.scene.intersect(&ray) else {
                continue;
            };

            let sphere = self.scene.sphere(hit.index);
            let x = ray.at(hit.t);
            let n = sphere.normal_at(x);
            let nl = if n.dot(ray.direction) < 0.0 { n } else { -n };
            let depth = depth + 1;

            // Emission counts on every visit, whatever happens next
            total += throughput * sphere.emission;

            let Some(f) = russian_roulette(sphere.color, depth, rng) else {
                continue;
            };
            let weight = throughput * f;

            match sphere.material {
                Material::Diffuse => {
                    let r1 = gen_f64(rng);
                    let r2 = gen_f64(rng);
                    let d = cosine_hemisphere(nl, r1, r2);
                    self.push(Ray::new(x, d), depth, weight);
                }
                Material::Specular => {
                    self.push(Ray::new(x, reflect(ray.direction, n)), depth, weight);
                }
                Material::Refractive => {
                    let reflected = Ray::new(x, reflect(ray.direction, n));
                    let Some(refraction) = refract(ray.direction, n, nl) else {
                        // Total internal reflection
                        self.push(reflected, depth, weight);
                        continue;
                    };
                    let transmitted = Ray::new(x, refraction.direction);
                    let re = refraction.reflectance;
                    let tr = refraction.transmittance;

                    if depth > SPLIT_DEPTH {
                        let p = 0.25 + 0.5 * re;
                        if gen_f64(rng) < p {
                            self.push(reflected, depth, weight * (re / p));
                        } else {
                            self.push(transmitted, depth, weight * (tr / (1.0 - p)));
                        }
                    } else {
                        // LIFO: the reflected subtree is finished first
                        self.push(transmitted, depth, weight * tr);
                        self.push(reflected, depth, weight * re);
                    }
                }
            }
        }

        total
    }

    #[inline]
    fn push(&mut self, ray: Ray, depth: u32, throughput: Color) {
        self.stack.push(PendingRay {
            ray,
            depth,
            throughput,
        });
    }
}

/// Estimate radiance along `ray` with a one-off tracer.
pub fn radiance(scene: &Scene, ray: &Ray, rng: &mut dyn RngCore) -> Color {
    PathTracer::new(scene).radiance(ray, rng)
}
