//! Human-readable and JSON rendering of engine results.

use anyhow::Result;
use serde_json::{json, Value};

use crate::engine::{
    Assessment, ChaseOutcome, Favourite, FeatureRecord, PressureOutcome, ScoreProjection,
};

/// A rendered result, available both as text lines and as a JSON document.
#[derive(Debug, Clone)]
pub struct Report {
    lines: Vec<String>,
    document: Value,
    /// The model step failed for this request
    pub prediction_failed: bool,
}

impl Report {
    pub fn first_innings(
        batting_team: &str,
        assessment: &Assessment<ScoreProjection>,
        range_margin: i32,
    ) -> Self {
        match &assessment.prediction {
            Ok(projection) => {
                let (low, high) = projection.range(range_margin);
                Report {
                    lines: vec![
                        format!("Predicted Final Score: {}", projection.total),
                        format!("Estimated Range: {} - {}", low, high),
                    ],
                    document: json!({
                        "mode": "first_innings",
                        "batting_team": batting_team,
                        "features": assessment.features,
                        "projection": projection,
                        "range": { "low": low, "high": high },
                    }),
                    prediction_failed: false,
                }
            }
            Err(e) => Report::failed("first_innings", &assessment.features, &e.to_string()),
        }
    }

    pub fn chase(batting_team: &str, bowling_team: &str, outcome: &ChaseOutcome) -> Self {
        let assessment = match outcome {
            ChaseOutcome::AlreadyWon { batting_team } => {
                return Report {
                    lines: vec![format!("{} won!", batting_team)],
                    document: json!({
                        "mode": "chase",
                        "status": "already_won",
                        "winner": batting_team,
                    }),
                    prediction_failed: false,
                };
            }
            ChaseOutcome::Assessed(assessment) => assessment,
        };

        let forecast = match &assessment.prediction {
            Ok(forecast) => forecast,
            Err(e) => return Report::failed("chase", &assessment.features, &e.to_string()),
        };

        let win_pct = as_percent(forecast.probabilities.win);
        let loss_pct = as_percent(forecast.probabilities.loss);
        let favourite = match forecast.favourite {
            Favourite::Chasing => batting_team,
            Favourite::Defending => bowling_team,
        };

        Report {
            lines: vec![
                "Winning Probability".to_string(),
                format!("  {}: {}%", batting_team, win_pct),
                format!("  {}: {}%", bowling_team, loss_pct),
                format!("{} is likely to win!", favourite),
            ],
            document: json!({
                "mode": "chase",
                "status": "predicted",
                "features": assessment.features,
                "win_percent": { batting_team: win_pct, bowling_team: loss_pct },
                "favourite": favourite,
            }),
            prediction_failed: false,
        }
    }

    pub fn pressure(outcome: &PressureOutcome) -> Self {
        let lines = match outcome {
            PressureOutcome::AlreadyWon { batting_team } => {
                vec![format!("{} already past the target; chase decided.", batting_team)]
            }
            PressureOutcome::Measured { result, .. } => vec![
                "Match Pressure Analysis".to_string(),
                format!("  Pressure Index: {} / 100", result.score),
                format!("  Pressure Level: {}", result.label),
            ],
        };
        let mut document = json!(outcome);
        document["mode"] = json!("pressure");
        Report {
            lines,
            document,
            prediction_failed: false,
        }
    }

    fn failed(mode: &str, features: &FeatureRecord, error: &str) -> Self {
        Report {
            lines: vec![format!("Error in prediction: {}", error)],
            document: json!({
                "mode": mode,
                "status": "prediction_failed",
                "features": features,
                "error": error,
            }),
            prediction_failed: true,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn render(&self, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(&self.document)?)
        } else {
            Ok(self.text())
        }
    }
}

/// Probability as a percentage rounded to two decimals.
fn as_percent(p: f64) -> f64 {
    (p * 100.0 * 100.0).round_ties_even() / 100.0
}
