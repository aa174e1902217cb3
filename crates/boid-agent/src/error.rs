use boid_search::SearchError;
use thiserror::Error;

/// Conditions that prevent the planner from producing a move this tick.
///
/// None of these are fatal: [`Boid::step`][crate::Boid::step] degrades each
/// of them to a held tick (the boid freezes in place) and logs, so a stuck
/// boid never crashes the simulation.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Every candidate direction in the avoidance fan was obstructed.
    #[error("no clear direction among {samples} collision samples")]
    NoClearDirection { samples: usize },

    /// The area search gave up or its evaluator failed.
    #[error("area search failed: {0}")]
    Search(#[from] SearchError),
}

pub type PlanResult<T> = Result<T, PlanError>;
