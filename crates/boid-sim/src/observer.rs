//! Simulation observer hooks and per-tick outcome counts.

use boid_agent::BoidObserver;
use boid_core::Tick;

/// Outcome counts for one tick.  `cruised + reacquired + held` equals the
/// flock size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub cruised:    usize,
    pub reacquired: usize,
    pub held:       usize,
}

impl TickStats {
    pub fn total(self) -> usize {
        self.cruised + self.reacquired + self.held
    }
}

/// Callbacks invoked by [`FlockSim::run`][crate::FlockSim::run] at tick
/// boundaries, on top of the per-move [`BoidObserver`] notification.
///
/// All tick hooks have default no-op implementations so implementors only
/// need to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl BoidObserver for ProgressPrinter {
///     fn boid_moved(&mut self, _: BoidId, _: Vec3, _: Vec3) {}
/// }
///
/// impl FlockObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
///         if stats.held > 0 {
///             println!("{tick}: {} boids stuck", stats.held);
///         }
///     }
/// }
/// ```
pub trait FlockObserver: BoidObserver {
    /// Called at the very start of each tick, before any boid steps.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with its outcome counts.
    fn on_tick_end(&mut self, _tick: Tick, _stats: TickStats) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`FlockObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl BoidObserver for NoopObserver {
    fn boid_moved(&mut self, _id: boid_core::BoidId, _from: boid_core::Vec3, _to: boid_core::Vec3) {}
}

impl FlockObserver for NoopObserver {}
