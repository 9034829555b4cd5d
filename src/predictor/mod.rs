pub mod baseline;

pub use baseline::{ChaseLogistic, RunRateProjection};

use anyhow::Result;
use serde::Serialize;

use crate::engine::features::FeatureRecord;

/// Tolerance on `loss + win == 1` for classifier output.
const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Trait that every prediction model must implement.
///
/// The engine only sees this capability; how a model is stored, loaded, or
/// evaluated is up to the implementation.
pub trait Predictor: Send + Sync {
    type Output;

    /// Run inference on a single feature row.
    fn predict(&self, features: &FeatureRecord) -> Result<Self::Output>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

/// Classifier output for a chase: probability the chasing side loses / wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassProbabilities {
    pub loss: f64,
    pub win: f64,
}

impl ClassProbabilities {
    /// Reasons this pair is not a usable probability distribution, if any.
    pub fn malformed_reason(&self) -> Option<String> {
        for (label, p) in [("loss", self.loss), ("win", self.win)] {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Some(format!("{} probability {} outside [0, 1]", label, p));
            }
        }
        let sum = self.loss + self.win;
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Some(format!("probabilities sum to {}, expected 1", sum));
        }
        None
    }
}
