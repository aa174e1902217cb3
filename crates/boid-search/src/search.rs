//! The expanding-ring open-point search.

use boid_core::{BoidRng, CellPoint, Vec3};
use boid_world::OccupancyEvaluator;

use crate::{SearchError, SearchResult};

/// Anchor distances below this are degenerate; the bias formula would divide
/// by (near) zero, so the search falls back to uniform sampling.
const MIN_ANCHOR_DISTANCE: f32 = 1e-6;

/// Rounds at or past this count emit a warning each round — an expanding
/// search that runs this long usually means the evaluator is saturated.
const WARN_AFTER_ROUNDS: u32 = 8;

// ── SearchParams ──────────────────────────────────────────────────────────────

/// Geometry and sizing of one boid's area search.
///
/// Captured once at spawn; the buffers it sizes are never reallocated.
#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Scatter radius of the first round, in world units.
    pub initial_radius: f32,

    /// Radius multiplier applied after every empty round.  Must be > 1 for
    /// the searched volume to grow.
    pub growth: f32,

    /// How far behind the anchor (away from the target) the base point sits.
    pub behind: f32,

    /// Candidate slots per batch: `batch_multiplier * parallel_width` in the
    /// configuration surface.  One evaluator call covers the whole batch.
    pub batch_size: usize,

    /// Hard cap on widening rounds.  `None` restores the classic unbounded
    /// loop, which only terminates if the evaluator eventually reports a free
    /// cell.
    pub max_rounds: Option<u32>,
}

// ── AreaSearch ────────────────────────────────────────────────────────────────

/// Per-boid open-point search state.
///
/// Owns the fixed-capacity candidate and occupancy-flag buffers (always equal
/// length, allocated once at construction, reused across rounds and ticks).
/// Dropping the boid drops the buffers; there is no other teardown.
pub struct AreaSearch {
    params:     SearchParams,
    candidates: Vec<CellPoint>,
    flags:      Vec<u32>,
}

impl AreaSearch {
    pub fn new(params: SearchParams) -> Self {
        let batch = params.batch_size;
        Self {
            params,
            candidates: vec![CellPoint::ORIGIN; batch],
            flags:      vec![0; batch],
        }
    }

    /// Number of candidate slots per round.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.candidates.len()
    }

    /// Find an unoccupied point near `focus` (normally the target position).
    ///
    /// When `anchor` is present and not coincident with `focus`, candidates
    /// scatter around a base point `behind` units past the anchor on the
    /// focus→anchor line — reacquiring boids regroup behind whoever is
    /// tracking the target rather than thinning out ahead of them.  A missing
    /// or coincident anchor skips the bias and samples uniformly around
    /// `focus`.
    ///
    /// Returns the center of the first free cell found, lattice-snapped and
    /// offset by +0.5 per axis.  The call blocks for as many widening rounds
    /// as it takes (subject to `max_rounds`); each round is a fresh random
    /// batch and exactly one evaluator round-trip.
    pub fn find_open_point(
        &mut self,
        focus:     Vec3,
        anchor:    Option<Vec3>,
        evaluator: &dyn OccupancyEvaluator,
        rng:       &mut BoidRng,
    ) -> SearchResult<Vec3> {
        let base = self.base_point(focus, anchor);

        let mut radius = self.params.initial_radius;
        let mut round: u32 = 0;
        loop {
            for slot in self.candidates.iter_mut() {
                *slot = (base + rng.in_unit_sphere() * radius).round_to_cell();
            }

            evaluator.evaluate(&self.candidates, &mut self.flags)?;

            // First free slot in batch order wins.
            for (cell, &flag) in self.candidates.iter().zip(self.flags.iter()) {
                if flag == 0 {
                    return Ok(cell.cell_center());
                }
            }

            round += 1;
            if round >= WARN_AFTER_ROUNDS {
                log::warn!(
                    "area search still empty after {round} rounds (radius {radius}, base {base})"
                );
            }
            if let Some(cap) = self.params.max_rounds {
                if round >= cap {
                    return Err(SearchError::Exhausted { rounds: round, final_radius: radius });
                }
            }

            radius *= self.params.growth;
        }
    }

    /// The anchor-biased scatter center.
    ///
    /// With `dist = |focus - anchor|`, the base is
    /// `((dist + behind) * anchor - behind * focus) / dist`, equivalently
    /// `anchor + (anchor - focus) * behind / dist`: the point `behind` units
    /// past the anchor on the focus→anchor line.  Degenerate distances skip
    /// the bias.
    fn base_point(&self, focus: Vec3, anchor: Option<Vec3>) -> Vec3 {
        let Some(anchor) = anchor else {
            return focus;
        };
        let dist = focus.distance(anchor);
        if dist < MIN_ANCHOR_DISTANCE {
            return focus;
        }
        (anchor * (dist + self.params.behind) - focus * self.params.behind) * (1.0 / dist)
    }
}
