//! Deterministic candidate-direction sampling for collision avoidance.
//!
//! The fan yields unit directions at strictly non-decreasing angular offsets
//! from the desired heading: the zero-offset desired direction first, then a
//! golden-angle spiral that sweeps the offset from 0 to π while rotating the
//! azimuth, covering the sphere of headings evenly.  The planner takes the
//! first unobstructed candidate, so an open desired heading costs exactly one
//! probe and zero deviation.

use boid_core::Vec3;

/// Golden angle in radians: 2π / φ².  Consecutive azimuths never cluster.
const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Iterator over `count` unit directions fanning out from `desired`.
///
/// Deterministic: the same `desired` and `count` always produce the same
/// sequence.  `desired` must be unit length; every yielded vector is too.
pub struct DirectionFan {
    desired: Vec3,
    /// Orthonormal basis of the plane perpendicular to `desired`.
    u: Vec3,
    v: Vec3,
    count: usize,
    next: usize,
}

impl DirectionFan {
    pub fn new(desired: Vec3, count: usize) -> Self {
        // Reference axis least aligned with `desired`, for a stable basis.
        let reference = if desired.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
        let u = desired.cross(reference).normalize_or_zero();
        let v = desired.cross(u);
        Self { desired, u, v, count, next: 0 }
    }
}

impl Iterator for DirectionFan {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.next >= self.count {
            return None;
        }
        let i = self.next;
        self.next += 1;

        if i == 0 {
            return Some(self.desired);
        }

        // Polar offset grows linearly from 0 to π across the fan; the
        // azimuth advances by the golden angle per step.
        let theta = std::f32::consts::PI * i as f32 / (self.count - 1) as f32;
        let phi = i as f32 * GOLDEN_ANGLE;

        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();

        Some(self.desired * cos_t + (self.u * cos_p + self.v * sin_p) * sin_t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for DirectionFan {}
