use boid_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The configured round cap was reached with every candidate occupied.
    ///
    /// Not fatal: the caller freezes the boid for the tick and retries on the
    /// next one.
    #[error("area search exhausted after {rounds} rounds at radius {final_radius}")]
    Exhausted { rounds: u32, final_radius: f32 },

    #[error("occupancy evaluator failed: {0}")]
    World(#[from] WorldError),
}

pub type SearchResult<T> = Result<T, SearchError>;
