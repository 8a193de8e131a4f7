use thiserror::Error;

/// The specific parameter constraint a run was rejected for.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamViolation {
    #[error("initial capital must be a positive finite amount, got {0}")]
    InitialCapital(f64),

    #[error("rounds per trial must be greater than zero, got {0}")]
    Rounds(i64),

    #[error("number of trials must be greater than zero, got {0}")]
    Trials(i64),

    #[error("loss probability must lie within [0, 1], got {0}")]
    LossProbability(f64),

    #[error("profit rate min ({min}) must be below max ({max})")]
    ProfitRange { min: f64, max: f64 },

    #[error("loss rate min ({min}) must be below max ({max})")]
    LossRange { min: f64, max: f64 },
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(#[from] ParamViolation),

    #[error("Run cancelled after {completed} of {requested} trials")]
    Cancelled { completed: usize, requested: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
