//! The `FlockSim` struct and its tick loop.

use boid_agent::{Boid, BoidObserver, StepContext, StepOutcome};
use boid_core::{BoidId, BoidRng, SimConfig, Tick, Vec3};
use boid_world::{CollisionProbe, MovingPoint, OccupancyEvaluator};

use crate::observer::{FlockObserver, TickStats};
use crate::influence::flock_influences;

// ── BoidRngs ──────────────────────────────────────────────────────────────────

/// Per-boid deterministic RNG state, kept in its own struct so the tick loop
/// can borrow `&mut BoidRngs` alongside the rest of the simulation fields
/// without fighting the borrow checker.
pub struct BoidRngs {
    pub inner: Vec<BoidRng>,
}

impl BoidRngs {
    /// Allocate and seed `count` per-boid RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| BoidRng::new(global_seed, BoidId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one boid's RNG.
    #[inline]
    pub fn get_mut(&mut self, boid: BoidId) -> &mut BoidRng {
        &mut self.inner[boid.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── FlockSim ──────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Holds the flock, the world collaborators, and the optional target/anchor
/// tracks, and drives the four-phase tick loop (resolve, influence, step,
/// report).  Create via [`FlockBuilder`][crate::FlockBuilder].
pub struct FlockSim<P: CollisionProbe, E: OccupancyEvaluator> {
    /// Run configuration (tick budget, master seed).
    pub config: SimConfig,

    /// The current tick, advanced once per loop iteration.
    pub tick: Tick,

    /// The flock, indexed by `BoidId`.
    pub boids: Vec<Boid>,

    /// Per-boid RNGs, separated for the split-borrow pattern.
    pub rngs: BoidRngs,

    /// Obstruction predicate shared by every boid's collision fan.
    pub probe: P,

    /// Batch occupancy backend shared by every boid's area search.
    pub occupancy: E,

    /// The moving point the flock seeks, if any.
    pub target: Option<Box<dyn MovingPoint>>,

    /// The tracking anchor biasing reacquisition placement, if any.
    pub anchor: Option<Box<dyn MovingPoint>>,

    /// Reused per-tick influence buffer, parallel to `boids`.
    pub(crate) influences: Vec<Vec3>,
}

impl<P: CollisionProbe, E: OccupancyEvaluator> FlockSim<P, E> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: FlockObserver>(&mut self, observer: &mut O) {
        while self.tick < self.config.end_tick() {
            let now = self.tick;
            observer.on_tick_start(now);
            let stats = self.process_tick(now, observer);
            observer.on_tick_end(now, stats);
            self.tick = now + 1;
        }
        observer.on_sim_end(self.tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: FlockObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            let stats = self.process_tick(now, observer);
            observer.on_tick_end(now, stats);
            self.tick = now + 1;
        }
    }

    /// Flock size.
    pub fn boid_count(&self) -> usize {
        self.boids.len()
    }

    /// Replace (or clear) the target track mid-run.
    pub fn set_target(&mut self, target: Option<Box<dyn MovingPoint>>) {
        self.target = target;
    }

    /// Replace (or clear) the anchor track mid-run.
    pub fn set_anchor(&mut self, anchor: Option<Box<dyn MovingPoint>>) {
        self.anchor = anchor;
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: FlockObserver>(&mut self, now: Tick, observer: &mut O) -> TickStats {
        // ── Phase 1: resolve the moving points once for this tick ─────────
        let target = self.target.as_deref().map(|t| t.position_at(now));
        let anchor = self.anchor.as_deref().map(|a| a.position_at(now));

        // ── Phase 2: aggregate flock influence into the reused buffer ─────
        flock_influences(&self.boids, &mut self.influences);

        // ── Phase 3: step every boid ──────────────────────────────────────
        //
        // Sequential by contract: each boid's planner is one synchronous
        // decision loop and its area search may block for several evaluator
        // rounds.  Explicit field borrows keep the disjoint access visible.
        let probe = &self.probe;
        let occupancy = &self.occupancy;
        let rngs = &mut self.rngs;
        let influences = &self.influences;
        let observer: &mut dyn BoidObserver = observer;

        let mut stats = TickStats::default();
        for (i, boid) in self.boids.iter_mut().enumerate() {
            let ctx = StepContext {
                flock_influence: influences[i],
                target,
                anchor,
                probe,
                occupancy,
            };
            let rng = rngs.get_mut(boid.id);
            match boid.step(&ctx, rng, Some(&mut *observer)) {
                StepOutcome::Cruised    => stats.cruised += 1,
                StepOutcome::Reacquired => stats.reacquired += 1,
                StepOutcome::Held       => stats.held += 1,
            }
        }
        stats
    }
}
