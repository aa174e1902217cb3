//! Flock-influence aggregation.
//!
//! Each boid's influence is the normalized mean heading of every *other*
//! boid.  Computed as one flock-wide heading sum followed by a per-boid
//! subtraction of its own heading, so the whole pass is O(n) rather than
//! O(n²).  Normalizing makes the mean's divisor irrelevant.

use boid_agent::Boid;
use boid_core::Vec3;

/// Fill `out[i]` with the influence for `boids[i]`.
///
/// `out` is resized to the flock size on first use and reused afterwards; a
/// lone boid (or an empty flock) gets the zero vector.
pub fn flock_influences(boids: &[Boid], out: &mut Vec<Vec3>) {
    out.clear();
    out.resize(boids.len(), Vec3::ZERO);

    let heading_sum = boids.iter().fold(Vec3::ZERO, |acc, b| acc + b.up);
    for (slot, boid) in out.iter_mut().zip(boids) {
        *slot = (heading_sum - boid.up).normalize_or_zero();
    }
}
