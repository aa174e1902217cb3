//! Single-subscriber move notification.

use boid_core::{BoidId, Vec3};

/// Capability notified once per tick, after a boid's move is decided and
/// before its position is committed — the callback sees both the pre-move
/// position and the intended post-move position.
///
/// Deliberately a single reference, not a subscriber list: there is exactly
/// one consumer per boid and the notification sits on the hot path.  The
/// callback is fire-and-forget (no return value) and must not re-enter the
/// notifying boid's tick.
pub trait BoidObserver {
    fn boid_moved(&mut self, id: BoidId, from: Vec3, to: Vec3);
}

/// A [`BoidObserver`] that ignores every notification.
pub struct NoopBoidObserver;

impl BoidObserver for NoopBoidObserver {
    #[inline]
    fn boid_moved(&mut self, _id: BoidId, _from: Vec3, _to: Vec3) {}
}
