use thiserror::Error;

/// Request-level failures. None of them are fatal to the process.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Batting and bowling side are the same team. Rejected before any
    /// derived quantity is computed.
    #[error("batting and bowling teams must be different (both '{team}')")]
    InvalidTeamPairing { team: String },

    /// The model call failed or returned something unusable. Features built
    /// for the request stay valid.
    #[error("prediction by {model} failed: {source}")]
    ModelInference {
        model: String,
        #[source]
        source: anyhow::Error,
    },
}

impl EngineError {
    pub(crate) fn model(model: &str, source: anyhow::Error) -> Self {
        EngineError::ModelInference {
            model: model.to_string(),
            source,
        }
    }
}
