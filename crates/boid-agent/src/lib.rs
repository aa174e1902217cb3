//! `boid-agent` — the per-boid decision loop.
//!
//! Each simulation tick a [`Boid`] either cruises (blending flock influence,
//! its own heading, and target seek into a desired direction, then dodging
//! obstacles via a deterministic direction fan) or reacquires (jumping to an
//! open point near the target found by [`boid_search::AreaSearch`]).
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`config`]   | `BoidConfig` — all tunables, defaults, validation         |
//! | [`boid`]     | `Boid`, `StepContext`, `StepOutcome` — the planner itself |
//! | [`fan`]      | deterministic increasing-offset direction sampling        |
//! | [`observer`] | `BoidObserver` — single-subscriber move notification      |
//! | [`error`]    | `PlanError`, `PlanResult`                                 |
//!
//! # Tick contract
//!
//! Within one `Boid::step` call the order is fixed: decide the move, notify
//! the observer with the pre-move and intended post-move positions, then
//! commit.  The observer must not re-enter the same boid's tick.

pub mod boid;
pub mod config;
pub mod error;
pub mod fan;
pub mod observer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use boid::{Boid, StepContext, StepOutcome};
pub use config::BoidConfig;
pub use error::{PlanError, PlanResult};
pub use fan::DirectionFan;
pub use observer::{BoidObserver, NoopBoidObserver};
