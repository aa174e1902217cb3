//! Batch occupancy evaluation trait and default lattice-grid implementation.
//!
//! Area Search hands the evaluator a full candidate batch in one call and
//! receives a positionally corresponding flag array back.  The contract is
//! deliberately batch-shaped so a real backend can dispatch the whole batch
//! to parallel hardware; the in-process [`GridOccupancy`] evaluates it on
//! Rayon's thread pool instead.

use boid_core::CellPoint;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::{WorldError, WorldResult};

// ── OccupancyEvaluator trait ──────────────────────────────────────────────────

/// Black-box batch predicate: which candidate cells are unusable?
///
/// # Contract
///
/// - `flags` must be exactly as long as `candidates`; the evaluator fills
///   `flags[i]` for `candidates[i]` (positional correspondence).
/// - `0` means free; any non-zero value means occupied.
/// - One call is one synchronous request/response exchange; the caller never
///   has overlapping in-flight batches for the same agent.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; the evaluator is a shared external
/// resource queried by every boid's search.
pub trait OccupancyEvaluator: Send + Sync {
    fn evaluate(&self, candidates: &[CellPoint], flags: &mut [u32]) -> WorldResult<()>;
}

// ── GridOccupancy ─────────────────────────────────────────────────────────────

/// Occupancy as an exact set of blocked lattice cells.
///
/// `evaluate` fans the batch out across Rayon's thread pool — each slot is an
/// independent hash lookup, so the batch parallelizes with no shared mutable
/// state, mirroring what a compute-kernel backend would do per thread.
pub struct GridOccupancy {
    blocked: FxHashSet<CellPoint>,
}

impl GridOccupancy {
    pub fn new() -> Self {
        Self { blocked: FxHashSet::default() }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = CellPoint>) -> Self {
        Self { blocked: cells.into_iter().collect() }
    }

    /// Mark `cell` as occupied.  Returns `false` if it already was.
    pub fn occupy(&mut self, cell: CellPoint) -> bool {
        self.blocked.insert(cell)
    }

    /// Mark `cell` as free again.  Returns `false` if it was not occupied.
    pub fn release(&mut self, cell: CellPoint) -> bool {
        self.blocked.remove(&cell)
    }

    pub fn is_occupied(&self, cell: CellPoint) -> bool {
        self.blocked.contains(&cell)
    }

    pub fn occupied_count(&self) -> usize {
        self.blocked.len()
    }
}

impl Default for GridOccupancy {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupancyEvaluator for GridOccupancy {
    fn evaluate(&self, candidates: &[CellPoint], flags: &mut [u32]) -> WorldResult<()> {
        if candidates.len() != flags.len() {
            return Err(WorldError::BatchLengthMismatch {
                candidates: candidates.len(),
                flags:      flags.len(),
            });
        }

        flags
            .par_iter_mut()
            .zip(candidates.par_iter())
            .for_each(|(flag, cell)| {
                *flag = u32::from(self.blocked.contains(cell));
            });

        Ok(())
    }
}
