//! The `Boid` and its per-tick direction planner.

use boid_core::{BoidId, BoidRng, CoreResult, Vec3};
use boid_search::AreaSearch;
use boid_world::{CollisionProbe, OccupancyEvaluator};

use crate::{BoidConfig, BoidObserver, DirectionFan, PlanError, PlanResult};

// ── StepContext ───────────────────────────────────────────────────────────────

/// Everything a boid reads during one tick, borrowed for the duration of the
/// call.  Built fresh each tick by the orchestrator; the boid never caches
/// any of it.
pub struct StepContext<'a> {
    /// Aggregate direction of nearby peers, pre-normalized (or zero when the
    /// boid has no peers).  Computed outside the planner.
    pub flock_influence: Vec3,

    /// Current target position, if a target exists this tick.
    pub target: Option<Vec3>,

    /// Current tracking-anchor position, if one exists this tick.
    pub anchor: Option<Vec3>,

    /// Obstruction predicate for collision probes.
    pub probe: &'a dyn CollisionProbe,

    /// Batch occupancy backend for the area search.
    pub occupancy: &'a dyn OccupancyEvaluator,
}

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// What a boid did with its tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Normal locomotion: blended heading, collision fan, one speed-length step.
    Cruised,

    /// A reset condition fired; the boid jumped toward a searched open point.
    Reacquired,

    /// No usable move this tick (fan exhausted or search gave up); the boid
    /// froze in place.
    Held,
}

// ── Boid ──────────────────────────────────────────────────────────────────────

/// One autonomous flock member.
///
/// Owns its position, orientation, immutable config, and the reusable area
/// search buffers.  All world access goes through the [`StepContext`]
/// collaborators; the boid itself holds no references between ticks.
pub struct Boid {
    pub id: BoidId,
    pub position: Vec3,
    /// Current facing/up orientation, unit length.
    pub up: Vec3,
    config: BoidConfig,
    search: AreaSearch,
}

impl Boid {
    /// Spawn a boid at `position` facing +Y.
    ///
    /// Validates `config`; the search buffers are sized here, once, from
    /// `config.batch_size()`.
    pub fn new(id: BoidId, position: Vec3, config: BoidConfig) -> CoreResult<Self> {
        config.validate()?;
        let search = AreaSearch::new(config.search_params());
        Ok(Self { id, position, up: Vec3::Y, config, search })
    }

    pub fn config(&self) -> &BoidConfig {
        &self.config
    }

    /// `true` if either reset condition holds this tick: the boid arrived
    /// within `reset_radius` of the target, or strayed beyond `far_away`
    /// from the anchor.  The checks are independent; either one fires.
    pub fn needs_reset(&self, target: Option<Vec3>, anchor: Option<Vec3>) -> bool {
        self.reset_focus(target, anchor).is_some()
    }

    /// Advance one tick.
    ///
    /// Decides the move (cruise or reacquire), notifies `observer` with the
    /// pre-move and intended post-move positions, then commits.  Planning
    /// failures degrade to [`StepOutcome::Held`] — the boid freezes for the
    /// tick and the observer still fires with `to == from`.
    pub fn step(
        &mut self,
        ctx: &StepContext<'_>,
        rng: &mut BoidRng,
        observer: Option<&mut dyn BoidObserver>,
    ) -> StepOutcome {
        let (direction, outcome) = match self.plan(ctx, rng) {
            Ok(planned) => planned,
            Err(e) => {
                log::debug!("boid {} held: {e}", self.id);
                (Vec3::ZERO, StepOutcome::Held)
            }
        };

        let from = self.position;
        let to = from + direction;
        if let Some(observer) = observer {
            observer.boid_moved(self.id, from, to);
        }
        self.position = to;

        outcome
    }

    // ── Planning ──────────────────────────────────────────────────────────

    fn plan(&mut self, ctx: &StepContext<'_>, rng: &mut BoidRng) -> PlanResult<(Vec3, StepOutcome)> {
        if let Some(focus) = self.reset_focus(ctx.target, ctx.anchor) {
            let destination = self
                .search
                .find_open_point(focus, ctx.anchor, ctx.occupancy, rng)?;
            // Unnormalized on purpose: the jump covers the whole distance to
            // the reacquired region instead of crawling there at cruise speed.
            return Ok((destination - self.position, StepOutcome::Reacquired));
        }

        let direction = self.cruise_direction(ctx)?;
        Ok((direction * self.config.speed, StepOutcome::Cruised))
    }

    /// Reset detection, returning the point the search should focus on:
    /// the target when present, otherwise the anchor whose distance fired.
    fn reset_focus(&self, target: Option<Vec3>, anchor: Option<Vec3>) -> Option<Vec3> {
        if let Some(t) = target {
            let r = self.config.reset_radius;
            if self.position.distance_squared(t) < r * r {
                return Some(t);
            }
        }
        if let Some(a) = anchor {
            let far = self.config.far_away;
            if self.position.distance_squared(a) > far * far {
                return Some(target.unwrap_or(a));
            }
        }
        None
    }

    /// Blend the cruise heading and pick the first unobstructed fan candidate.
    ///
    /// Updates `self.up` to the chosen direction.  The returned vector is
    /// unit length; the caller applies speed.
    fn cruise_direction(&mut self, ctx: &StepContext<'_>) -> PlanResult<Vec3> {
        let seek = match ctx.target {
            Some(t) => (t - self.position).normalize_or_zero(),
            None => Vec3::ZERO,
        };

        let blend = ctx.flock_influence
            + self.up * self.config.stubbornness
            + seek * self.config.conscientiousness;
        let desired = blend.normalize_or_zero();
        // All terms cancelled (no peers, no target, zero weights): keep the
        // current heading rather than fanning around the zero vector.
        let desired = if desired == Vec3::ZERO { self.up } else { desired };

        let chosen = DirectionFan::new(desired, self.config.collision_samples).find(|&dir| {
            !ctx.probe
                .is_obstructed(self.position, dir, self.config.collision_sensitivity)
        });

        match chosen {
            Some(dir) => {
                self.up = dir;
                Ok(dir)
            }
            None => Err(PlanError::NoClearDirection {
                samples: self.config.collision_samples,
            }),
        }
    }
}
