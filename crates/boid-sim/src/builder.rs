//! Fluent builder for constructing a [`FlockSim`].

use boid_agent::{Boid, BoidConfig};
use boid_core::{BoidId, SimConfig, Tick, Vec3};
use boid_world::{CollisionProbe, MovingPoint, OccupancyEvaluator};

use crate::{BoidRngs, FlockSim, SimError, SimResult};

/// Fluent builder for [`FlockSim<P, E>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick budget and master seed
/// - `P: CollisionProbe` — the obstruction predicate
/// - `E: OccupancyEvaluator` — the batch occupancy backend
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.spawn_at(v)`    | Empty flock                      |
/// | `.boid_config(c)` | `BoidConfig::default()`          |
/// | `.headings(v)`    | All boids face +Y                |
/// | `.target(t)`      | No target (seek term is zero)    |
/// | `.anchor(a)`      | No anchor (no abandonment reset) |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = FlockBuilder::new(config, SphereField::new(obstacles), grid)
///     .spawn_at(spawn_points)
///     .boid_config(BoidConfig { speed: 0.2, ..Default::default() })
///     .target(FixedPoint(goal))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct FlockBuilder<P: CollisionProbe, E: OccupancyEvaluator> {
    config:      SimConfig,
    probe:       P,
    occupancy:   E,
    boid_config: BoidConfig,
    positions:   Vec<Vec3>,
    headings:    Option<Vec<Vec3>>,
    target:      Option<Box<dyn MovingPoint>>,
    anchor:      Option<Box<dyn MovingPoint>>,
}

impl<P: CollisionProbe, E: OccupancyEvaluator> FlockBuilder<P, E> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, probe: P, occupancy: E) -> Self {
        Self {
            config,
            probe,
            occupancy,
            boid_config: BoidConfig::default(),
            positions:   Vec::new(),
            headings:    None,
            target:      None,
            anchor:      None,
        }
    }

    /// Spawn one boid per position, with IDs assigned in slice order.
    pub fn spawn_at(mut self, positions: Vec<Vec3>) -> Self {
        self.positions = positions;
        self
    }

    /// Tunables applied to every spawned boid.
    pub fn boid_config(mut self, config: BoidConfig) -> Self {
        self.boid_config = config;
        self
    }

    /// Initial orientation per boid (must match the spawn count).
    ///
    /// Vectors are normalized at build time; if not called, all boids face +Y.
    pub fn headings(mut self, headings: Vec<Vec3>) -> Self {
        self.headings = Some(headings);
        self
    }

    /// The moving point the flock seeks.
    pub fn target(mut self, target: impl MovingPoint + 'static) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    /// The tracking anchor biasing reacquisition placement.
    pub fn anchor(mut self, anchor: impl MovingPoint + 'static) -> Self {
        self.anchor = Some(Box::new(anchor));
        self
    }

    /// Validate inputs, spawn the flock, and return a ready-to-run sim.
    pub fn build(self) -> SimResult<FlockSim<P, E>> {
        let count = self.positions.len();

        let headings = match self.headings {
            Some(h) => {
                if h.len() != count {
                    return Err(SimError::BoidCountMismatch {
                        expected: count,
                        got:      h.len(),
                        what:     "initial headings",
                    });
                }
                Some(h)
            }
            None => None,
        };

        let mut boids = Vec::with_capacity(count);
        for (i, position) in self.positions.into_iter().enumerate() {
            let mut boid = Boid::new(BoidId(i as u32), position, self.boid_config.clone())?;
            if let Some(ref h) = headings {
                let up = h[i].normalize_or_zero();
                if up != Vec3::ZERO {
                    boid.up = up;
                }
            }
            boids.push(boid);
        }

        Ok(FlockSim {
            rngs:       BoidRngs::new(count, self.config.seed),
            config:     self.config,
            tick:       Tick::ZERO,
            boids,
            probe:      self.probe,
            occupancy:  self.occupancy,
            target:     self.target,
            anchor:     self.anchor,
            influences: vec![Vec3::ZERO; count],
        })
    }
}
