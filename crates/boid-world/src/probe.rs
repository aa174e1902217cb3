//! Collision probing trait and default sphere-field implementation.
//!
//! # Pluggability
//!
//! The planner asks "does a ray from P along D up to length L hit anything?"
//! and nothing more.  Applications embed the flock in a real physics engine
//! by implementing [`CollisionProbe`] over its raycast; the default
//! [`SphereField`] is an exact analytic test against a list of spheres,
//! sufficient for standalone runs and tests.

use boid_core::Vec3;

// ── CollisionProbe trait ──────────────────────────────────────────────────────

/// Black-box obstruction predicate.
///
/// # Contract
///
/// `is_obstructed(origin, direction, max_length)` returns `true` iff the
/// segment from `origin` along `direction` (any non-zero length; it is
/// normalized internally by implementations that care) up to `max_length`
/// intersects an obstacle.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; the probe is shared immutably
/// across the whole flock for the duration of a tick.
pub trait CollisionProbe: Send + Sync {
    fn is_obstructed(&self, origin: Vec3, direction: Vec3, max_length: f32) -> bool;
}

// ── OpenSpace ─────────────────────────────────────────────────────────────────

/// A probe that never reports an obstruction.  Useful in tests and for
/// obstacle-free scenarios.
pub struct OpenSpace;

impl CollisionProbe for OpenSpace {
    #[inline]
    fn is_obstructed(&self, _origin: Vec3, _direction: Vec3, _max_length: f32) -> bool {
        false
    }
}

// ── SphereField ───────────────────────────────────────────────────────────────

/// A static spherical obstacle.
#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

/// Exact segment-vs-sphere collision tests over a static obstacle list.
///
/// Linear scan per probe.  Probe counts are small (tens of rays per boid per
/// tick against tens of obstacles), so no acceleration structure is needed.
pub struct SphereField {
    spheres: Vec<Sphere>,
}

impl SphereField {
    pub fn new(spheres: Vec<Sphere>) -> Self {
        Self { spheres }
    }

    /// A field with no obstacles; equivalent to [`OpenSpace`].
    pub fn empty() -> Self {
        Self { spheres: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// `true` if the segment `origin → origin + dir_unit * max_length`
    /// intersects `sphere`.  Standard quadratic: project the center onto the
    /// ray, compare the closest-approach distance against the radius, then
    /// clamp the hit parameter to the segment.
    fn segment_hits(origin: Vec3, dir_unit: Vec3, max_length: f32, sphere: Sphere) -> bool {
        let to_center = sphere.center - origin;
        let proj = to_center.dot(dir_unit);

        // Closest approach behind the origin and origin outside → no hit.
        if proj < 0.0 && to_center.length_squared() > sphere.radius * sphere.radius {
            return false;
        }

        let closest_sq = to_center.length_squared() - proj * proj;
        let r_sq = sphere.radius * sphere.radius;
        if closest_sq > r_sq {
            return false;
        }

        // Entry point along the ray; must lie within the segment.
        let entry = proj - (r_sq - closest_sq).sqrt();
        entry <= max_length
    }
}

impl CollisionProbe for SphereField {
    fn is_obstructed(&self, origin: Vec3, direction: Vec3, max_length: f32) -> bool {
        let dir_unit = direction.normalize_or_zero();
        if dir_unit == Vec3::ZERO {
            return false;
        }
        self.spheres
            .iter()
            .any(|&s| Self::segment_hits(origin, dir_unit, max_length, s))
    }
}
