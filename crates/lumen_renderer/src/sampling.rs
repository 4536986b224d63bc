//! Random number streams and sample warping.
//!
//! Each camera row owns one generator, seeded from the row index, so rows
//! can be rendered in any order on any thread and still reproduce the same
//! image. Within a row every draw happens in a fixed order: jitter `dx`
//! then `dy` for the primary ray, then per path vertex the roulette draw
//! (past the roulette depth), then the material's draws.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Uniform variate in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Generator for camera row `row` (0 = bottom) under `seed`.
pub fn row_rng(seed: u64, row: u32) -> StdRng {
    StdRng::seed_from_u64(seed ^ u64::from(row).wrapping_pow(3))
}

/// Tent filter: maps `r` in [0, 2) to [-1, 1) with a triangular density
/// peaked at 0.
#[inline]
pub fn tent(r: f64) -> f64 {
    if r < 1.0 {
        r.sqrt() - 1.0
    } else {
        1.0 - (2.0 - r).sqrt()
    }
}

/// Draw one tent-distributed jitter offset.
#[inline]
pub fn tent_jitter(rng: &mut dyn RngCore) -> f64 {
    tent(2.0 * gen_f64(rng))
}
