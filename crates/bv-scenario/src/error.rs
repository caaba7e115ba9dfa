use thiserror::Error;

use bv_core::BvError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("malformed record {record:?}: {reason}")]
    Record { record: String, reason: String },

    #[error(transparent)]
    Core(#[from] BvError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario file error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ScenarioError {
    pub(crate) fn record(record: &str, reason: impl Into<String>) -> Self {
        ScenarioError::Record {
            record: record.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
