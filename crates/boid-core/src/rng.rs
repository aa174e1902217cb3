//! Deterministic per-boid RNG.
//!
//! # Determinism strategy
//!
//! Each boid gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (boid_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive boid IDs uniformly across the seed space.
//! This means:
//!
//! - Boids never share RNG state (no contention, no ordering dependency).
//! - Adding boids at the end of the flock does not disturb the seeds of
//!   existing boids — runs are reproducible even as populations grow.
//! - Area Search candidate batches are fully reproducible from the seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{BoidId, Vec3};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-boid deterministic RNG.
///
/// Create one per boid at spawn; store in a parallel `Vec<BoidRng>` alongside
/// the flock.  Every sampling method takes `&mut self`, so a stream can only
/// ever be advanced by the boid that owns it.
pub struct BoidRng(SmallRng);

impl BoidRng {
    /// Seed deterministically from the run's global seed and a boid ID.
    pub fn new(global_seed: u64, boid: BoidId) -> Self {
        let seed = global_seed ^ (boid.0 as u64).wrapping_mul(MIXING_CONSTANT);
        BoidRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A uniformly distributed point inside the unit sphere.
    ///
    /// Rejection sampling from the enclosing cube: ~52% acceptance per draw,
    /// expected under two draws per call.  Uniform in volume (not on the
    /// surface), matching the candidate scatter Area Search needs.
    pub fn in_unit_sphere(&mut self) -> Vec3 {
        loop {
            let v = Vec3::new(
                self.0.gen_range(-1.0_f32..=1.0),
                self.0.gen_range(-1.0_f32..=1.0),
                self.0.gen_range(-1.0_f32..=1.0),
            );
            if v.length_squared() <= 1.0 {
                return v;
            }
        }
    }
}
