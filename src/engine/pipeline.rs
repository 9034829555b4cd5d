use serde::Serialize;
use tracing::{debug, info, warn};

use super::derived::{ChaseDerived, FirstInningsDerived};
use super::features::{chase_features, first_innings_features, FeatureRecord};
use super::pressure::{pressure_index, PressureComponents, PressureResult};
use crate::error::EngineError;
use crate::match_state::{ChaseState, FirstInningsState, PressureState};
use crate::predictor::{ClassProbabilities, Predictor};

/// Features built for a request together with the model's answer.
///
/// A failed model call leaves `features` intact; only `prediction` is an error.
#[derive(Debug)]
pub struct Assessment<T> {
    pub features: FeatureRecord,
    pub prediction: Result<T, EngineError>,
}

/// First-innings total as reported to users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreProjection {
    /// Model output as returned
    pub raw_total: f64,
    /// Truncated towards zero
    pub total: i32,
}

impl ScoreProjection {
    pub fn from_raw(raw_total: f64) -> Self {
        ScoreProjection {
            raw_total,
            total: raw_total.trunc() as i32,
        }
    }

    /// `(total - margin, total + margin)`
    pub fn range(&self, margin: i32) -> (i32, i32) {
        (self.total - margin, self.total + margin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Favourite {
    Chasing,
    Defending,
}

impl Favourite {
    /// The chasing side is favourite only with a strictly higher win
    /// probability. A dead heat goes to the defending side.
    pub fn from_probabilities(p: &ClassProbabilities) -> Self {
        if p.win > p.loss {
            Favourite::Chasing
        } else {
            Favourite::Defending
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinForecast {
    pub probabilities: ClassProbabilities,
    pub favourite: Favourite,
}

#[derive(Debug)]
pub enum ChaseOutcome {
    /// Score already past the target. No rates, features, or model call.
    AlreadyWon { batting_team: String },
    Assessed(Assessment<WinForecast>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PressureOutcome {
    AlreadyWon {
        batting_team: String,
    },
    Measured {
        derived: ChaseDerived,
        components: PressureComponents,
        result: PressureResult,
    },
}

/// Reject identical batting and bowling sides.
pub fn check_team_pairing(batting_team: &str, bowling_team: &str) -> Result<(), EngineError> {
    if batting_team == bowling_team {
        return Err(EngineError::InvalidTeamPairing {
            team: batting_team.to_string(),
        });
    }
    Ok(())
}

/// Pressure index for a chase. Never calls a model.
pub fn assess_pressure(state: PressureState) -> Result<PressureOutcome, EngineError> {
    check_team_pairing(&state.batting_team, &state.bowling_team)?;

    if state.is_already_won() {
        info!(
            "{} already past target {} ({}); no pressure to measure",
            state.batting_team, state.target, state.current_score
        );
        return Ok(PressureOutcome::AlreadyWon {
            batting_team: state.batting_team,
        });
    }

    let derived = ChaseDerived::from_pressure_state(&state);
    let components =
        PressureComponents::new(derived.rrr, derived.balls_left, derived.wickets_remaining);
    let result = pressure_index(derived.rrr, derived.balls_left, derived.wickets_remaining);
    debug!("Pressure {:.2} ({})", result.score, result.label);

    Ok(PressureOutcome::Measured {
        derived,
        components,
        result,
    })
}

/// Runs requests through feature derivation and the two models.
pub struct PredictionEngine<R, C> {
    regressor: R,
    classifier: C,
}

impl<R, C> PredictionEngine<R, C>
where
    R: Predictor<Output = f64>,
    C: Predictor<Output = ClassProbabilities>,
{
    pub fn new(regressor: R, classifier: C) -> Self {
        PredictionEngine {
            regressor,
            classifier,
        }
    }

    /// Project the final first-innings total.
    pub fn predict_first_innings(
        &self,
        state: FirstInningsState,
    ) -> Result<Assessment<ScoreProjection>, EngineError> {
        check_team_pairing(&state.batting_team, &state.bowling_team)?;

        let derived = FirstInningsDerived::from_state(&state);
        let features = first_innings_features(&state, &derived);

        let prediction = self
            .regressor
            .predict(&features)
            .and_then(|raw| {
                if raw.is_finite() {
                    Ok(ScoreProjection::from_raw(raw))
                } else {
                    anyhow::bail!("non-finite total {}", raw)
                }
            })
            .map_err(|e| {
                warn!("First innings prediction failed: {:#}", e);
                EngineError::model(self.regressor.name(), e)
            });

        if let Ok(projection) = &prediction {
            info!(
                "{} projected to {} ({})",
                state.batting_team,
                projection.total,
                self.regressor.name()
            );
        }

        Ok(Assessment {
            features,
            prediction,
        })
    }

    /// Win probability for the chasing side.
    pub fn predict_chase(&self, state: ChaseState) -> Result<ChaseOutcome, EngineError> {
        check_team_pairing(&state.batting_team, &state.bowling_team)?;

        if state.is_already_won() {
            info!(
                "{} already past target {} ({}); skipping model",
                state.batting_team, state.target, state.current_score
            );
            return Ok(ChaseOutcome::AlreadyWon {
                batting_team: state.batting_team,
            });
        }

        let derived = ChaseDerived::from_state(&state);
        let features = chase_features(&state, &derived);

        let prediction = self
            .classifier
            .predict(&features)
            .and_then(|probabilities| match probabilities.malformed_reason() {
                Some(reason) => anyhow::bail!("malformed output: {}", reason),
                None => Ok(WinForecast {
                    probabilities,
                    favourite: Favourite::from_probabilities(&probabilities),
                }),
            })
            .map_err(|e| {
                warn!("Chase prediction failed: {:#}", e);
                EngineError::model(self.classifier.name(), e)
            });

        if let Ok(forecast) = &prediction {
            info!(
                "{} win probability {:.4} ({})",
                state.batting_team,
                forecast.probabilities.win,
                self.classifier.name()
            );
        }

        Ok(ChaseOutcome::Assessed(Assessment {
            features,
            prediction,
        }))
    }
}
