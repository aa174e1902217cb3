use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("occupancy batch length mismatch: {candidates} candidates vs {flags} flags")]
    BatchLengthMismatch { candidates: usize, flags: usize },
}

pub type WorldResult<T> = Result<T, WorldError>;
