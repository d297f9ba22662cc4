use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("elevator error: {0}")]
    Lift(#[from] LiftError),
}

pub type SimResult<T> = Result<T, SimError>;
