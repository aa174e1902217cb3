//! `boid-world` — the seams between the flock core and its environment.
//!
//! The simulation core treats terrain, physics raycasting, the parallel
//! occupancy backend, and target/anchor tracking as external collaborators.
//! This crate defines those contracts as traits and ships in-process
//! reference implementations so the workspace is runnable and testable
//! without an engine:
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`probe`]     | `CollisionProbe` trait; `SphereField`, `OpenSpace`          |
//! | [`occupancy`] | `OccupancyEvaluator` trait; `GridOccupancy` (Rayon batches) |
//! | [`track`]     | `MovingPoint` trait; `FixedPoint`                           |
//! | [`error`]     | `WorldError`, `WorldResult`                                 |
//!
//! Swapping in a real physics engine or a GPU occupancy kernel means
//! implementing one trait; the core never changes.

pub mod error;
pub mod occupancy;
pub mod probe;
pub mod track;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WorldError, WorldResult};
pub use occupancy::{GridOccupancy, OccupancyEvaluator};
pub use probe::{CollisionProbe, OpenSpace, Sphere, SphereField};
pub use track::{FixedPoint, MovingPoint};
