use thiserror::Error;

use bv_core::BvError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("scheduler configuration error: {0}")]
    Config(#[from] BvError),
}

pub type SimResult<T> = Result<T, SimError>;
