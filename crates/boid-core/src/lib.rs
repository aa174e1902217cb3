//! `boid-core` — foundational types for the boidflock simulation workspace.
//!
//! This crate is a dependency of every other `boid-*` crate.  It intentionally
//! has no `boid-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                         |
//! |-------------|--------------------------------------------------|
//! | [`ids`]     | `BoidId`                                         |
//! | [`vec`]     | `Vec3`, `CellPoint` (lattice-snapped point)      |
//! | [`time`]    | `Tick`, `SimConfig`                              |
//! | [`rng`]     | `BoidRng` (per-boid deterministic RNG)           |
//! | [`error`]   | `CoreError`, `CoreResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::BoidId;
pub use rng::BoidRng;
pub use time::{SimConfig, Tick};
pub use vec::{CellPoint, Vec3};
