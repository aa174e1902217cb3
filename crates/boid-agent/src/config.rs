//! Per-boid tunables.

use boid_core::{CoreError, CoreResult};
use boid_search::SearchParams;

/// Everything tunable about a single boid, fixed at spawn.
///
/// Defaults are hand-tuned: they produce a flock that cruises smoothly,
/// dodges obstacles, and regroups noticeably behind the anchor on reset.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoidConfig {
    // ── Movement ──────────────────────────────────────────────────────────
    /// Cruise step length per tick, in world units.
    pub speed: f32,

    /// Weight of the boid's current heading in the cruise blend.  Higher
    /// values resist direction changes.
    pub stubbornness: f32,

    /// Weight of the target-seek term in the cruise blend.
    pub conscientiousness: f32,

    // ── Collision avoidance ───────────────────────────────────────────────
    /// How many candidate directions the avoidance fan tries per tick.
    pub collision_samples: usize,

    /// Length of each collision probe, in world units.
    pub collision_sensitivity: f32,

    // ── Reset conditions ──────────────────────────────────────────────────
    /// Arrival threshold: within this distance of the target, the boid
    /// considers the target reached and reacquires.
    pub reset_radius: f32,

    /// Abandonment threshold: beyond this distance from the tracking anchor,
    /// the boid gives up cruising and reacquires.
    pub far_away: f32,

    // ── Area search geometry ──────────────────────────────────────────────
    /// How far behind the anchor reacquired boids regroup.
    pub behind: f32,

    /// Scatter radius of the first search round.
    pub search_radius: f32,

    /// Radius multiplier after every empty search round.
    pub search_step: f32,

    /// Candidate batch size = `batch_multiplier * parallel_width`, matching
    /// how the parallel backend tiles its work groups.
    pub batch_multiplier: usize,

    /// Lanes per work group of the occupancy backend.
    pub parallel_width: usize,

    /// Hard cap on search rounds; `None` means search forever.
    pub max_search_rounds: Option<u32>,
}

impl Default for BoidConfig {
    fn default() -> Self {
        Self {
            speed:                 0.1,
            stubbornness:          5.0,
            conscientiousness:     7.0,
            collision_samples:     30,
            collision_sensitivity: 1.0,
            reset_radius:          1.2,
            far_away:              40.0,
            behind:                30.0,
            search_radius:         5.0,
            search_step:           2.0,
            batch_multiplier:      4,
            parallel_width:        16,
            max_search_rounds:     Some(64),
        }
    }
}

impl BoidConfig {
    /// Reject configurations that cannot work.
    ///
    /// `behind <= reset_radius` is refused because a reacquired boid would
    /// land inside its own arrival threshold and oscillate between reset and
    /// cruise every tick.
    pub fn validate(&self) -> CoreResult<()> {
        fn fail(msg: impl Into<String>) -> CoreResult<()> {
            Err(CoreError::Config(msg.into()))
        }

        if !(self.speed > 0.0) {
            return fail(format!("speed must be positive, got {}", self.speed));
        }
        if self.collision_samples == 0 {
            return fail("collision_samples must be at least 1");
        }
        if !(self.collision_sensitivity > 0.0) {
            return fail("collision_sensitivity must be positive");
        }
        if !(self.reset_radius > 0.0) {
            return fail("reset_radius must be positive");
        }
        if self.far_away <= self.reset_radius {
            return fail(format!(
                "far_away ({}) must exceed reset_radius ({})",
                self.far_away, self.reset_radius
            ));
        }
        if self.behind <= self.reset_radius {
            return fail(format!(
                "behind ({}) must exceed reset_radius ({}) or reacquisition oscillates",
                self.behind, self.reset_radius
            ));
        }
        if !(self.search_radius > 0.0) {
            return fail("search_radius must be positive");
        }
        if !(self.search_step > 1.0) {
            return fail(format!(
                "search_step must exceed 1 for the search volume to grow, got {}",
                self.search_step
            ));
        }
        if self.batch_multiplier == 0 || self.parallel_width == 0 {
            return fail("batch_multiplier and parallel_width must be at least 1");
        }
        Ok(())
    }

    /// Candidate slots per search batch.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_multiplier * self.parallel_width
    }

    /// The search-geometry slice of this config.
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            initial_radius: self.search_radius,
            growth:         self.search_step,
            behind:         self.behind,
            batch_size:     self.batch_size(),
            max_rounds:     self.max_search_rounds,
        }
    }
}
