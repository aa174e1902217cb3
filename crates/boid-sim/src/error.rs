use boid_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("flock configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match boid count {expected}")]
    BoidCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
