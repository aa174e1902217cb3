//! Moving reference points: the target and the tracking anchor.

use boid_core::{Tick, Vec3};

/// A point of interest whose position may change over time.
///
/// The core only ever reads the current position; it never owns or mutates
/// the tracked entity.  Absence of a target or anchor is expressed with
/// `Option<Box<dyn MovingPoint>>` at the simulation level, not here.
pub trait MovingPoint: Send + Sync {
    /// The point's position at `tick`.
    fn position_at(&self, tick: Tick) -> Vec3;
}

/// A point that never moves.
pub struct FixedPoint(pub Vec3);

impl MovingPoint for FixedPoint {
    #[inline]
    fn position_at(&self, _tick: Tick) -> Vec3 {
        self.0
    }
}

/// Closures work as moving points directly, which keeps scenario code short:
/// `sim.set_target(|t: Tick| Vec3::new(t.0 as f32 * 0.1, 10.0, 0.0))`.
impl<F> MovingPoint for F
where
    F: Fn(Tick) -> Vec3 + Send + Sync,
{
    #[inline]
    fn position_at(&self, tick: Tick) -> Vec3 {
        self(tick)
    }
}
