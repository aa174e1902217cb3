//! `boid-sim` — tick loop orchestrator for the boidflock workspace.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Resolve    — query target/anchor MovingPoints once for this tick.
//!   ② Influence  — aggregate every boid's flock influence into a reused
//!                  buffer (sum of all headings minus own, normalized).
//!   ③ Step       — run each boid's planner sequentially: reset check,
//!                  cruise/reacquire, observer notification, commit.
//!   ④ Report     — on_tick_end with the tick's outcome counts.
//! ```
//!
//! Stepping is deliberately sequential: each boid's decision loop is
//! synchronous and may block on the area search.  The parallelism in this
//! system lives inside the occupancy evaluator, not the tick loop.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use boid_core::{SimConfig, Vec3};
//! use boid_sim::{FlockBuilder, NoopObserver};
//! use boid_world::{GridOccupancy, OpenSpace, FixedPoint};
//!
//! let config = SimConfig { total_ticks: 100, seed: 42 };
//! let mut sim = FlockBuilder::new(config, OpenSpace, GridOccupancy::new())
//!     .spawn_at(vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)])
//!     .target(FixedPoint(Vec3::new(0.0, 20.0, 0.0)))
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod influence;
pub mod observer;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::FlockBuilder;
pub use error::{SimError, SimResult};
pub use observer::{FlockObserver, NoopObserver, TickStats};
pub use sim::{BoidRngs, FlockSim};
