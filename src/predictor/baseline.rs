//! Heuristic stand-ins for the trained models.
//!
//! Both read their inputs from the feature record by field name, exactly as a
//! fitted pipeline would, so they exercise the same input contract. They are
//! deliberately simple:
//! - **First innings**: current score plus the run rate carried over the
//!   remaining overs, discounted by wickets already lost
//! - **Chase**: logistic on the gap between current and required rate,
//!   shifted by wickets in hand

use anyhow::Result;

use super::{ClassProbabilities, Predictor};
use crate::engine::features::FeatureRecord;

/// Typical T20 scoring rate, used when no overs have been bowled yet.
const PAR_RUN_RATE: f64 = 8.0;
const WICKETS: f64 = 10.0;

// ── First innings ────────────────────────────────────────────────────────────
//
// total = current + rate × overs_left × √(wickets_in_hand / 10)
//
// The square root keeps a side with a few wickets down close to its current
// rate, while a collapse (8–9 down) drags the projection towards the score
// already on the board.

#[derive(Debug, Clone, Copy, Default)]
pub struct RunRateProjection;

impl Predictor for RunRateProjection {
    type Output = f64;

    fn predict(&self, features: &FeatureRecord) -> Result<f64> {
        let overs_left = features.number("Overs_left")?.max(0.0);
        let current = features.number("current_score")?;
        let fallen = features.number("Wicket_fallen")?;
        let crr = features.number("CRR")?;

        let rate = if crr > 0.0 { crr } else { PAR_RUN_RATE };
        let in_hand = ((WICKETS - fallen) / WICKETS).clamp(0.0, 1.0);
        Ok(current + rate * overs_left * in_hand.sqrt())
    }

    fn name(&self) -> &str {
        "run-rate projection"
    }
}

// ── Chase ────────────────────────────────────────────────────────────────────
//
// P(chasing side wins) = sigmoid(RATE_K × (CRR − RRR) + WICKET_K × (wickets − 5))
//
// Calibrated loosely: level rates with 5 wickets in hand is a coin flip,
// needing 2 an over more than the current rate is ~30%, and each wicket in
// hand is worth roughly 8 percentage points mid-chase.

const RATE_K: f64 = 0.45;
const WICKET_K: f64 = 0.35;
/// Wickets in hand at which the wicket term is neutral.
const WICKET_PAR: f64 = 5.0;
const MIN_P: f64 = 0.03;
const MAX_P: f64 = 0.97;

#[derive(Debug, Clone, Copy, Default)]
pub struct ChaseLogistic;

impl Predictor for ChaseLogistic {
    type Output = ClassProbabilities;

    fn predict(&self, features: &FeatureRecord) -> Result<ClassProbabilities> {
        let runs_left = features.number("runs_left")?;
        let balls_left = features.number("balls_left")?;
        let wickets = features.number("wickets")?;
        let crr = features.number("CRR")?;
        let rrr = features.number("RRR")?;

        let win = if runs_left <= 0.0 {
            MAX_P
        } else if balls_left <= 0.0 || wickets <= 0.0 {
            MIN_P
        } else {
            let rate = if crr > 0.0 { crr } else { PAR_RUN_RATE };
            let z = RATE_K * (rate - rrr) + WICKET_K * (wickets - WICKET_PAR);
            sigmoid(z).clamp(MIN_P, MAX_P)
        };

        Ok(ClassProbabilities {
            loss: 1.0 - win,
            win,
        })
    }

    fn name(&self) -> &str {
        "chase logistic"
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::derived::{ChaseDerived, FirstInningsDerived};
    use crate::engine::features::{chase_features, first_innings_features};
    use crate::match_state::{ChaseState, FirstInningsState, TossDecision};
    use approx::assert_relative_eq;

    fn first_innings(overs: f64, score: i32, wickets: i32) -> FeatureRecord {
        let state = FirstInningsState {
            batting_team: "Chennai Super Kings".into(),
            bowling_team: "Royal Challengers Bengaluru".into(),
            venue: "Chennai".into(),
            toss_winner: "Chennai Super Kings".into(),
            toss_decision: TossDecision::Bat,
            overs_completed: overs,
            current_score: score,
            wickets_fallen: wickets,
        };
        first_innings_features(&state, &FirstInningsDerived::from_state(&state))
    }

    fn chase(target: i32, score: i32, overs: f64, wickets: i32) -> FeatureRecord {
        let state = ChaseState {
            batting_team: "Royal Challengers Bengaluru".into(),
            bowling_team: "Chennai Super Kings".into(),
            venue: "Bengaluru".into(),
            target,
            current_score: score,
            overs_completed: overs,
            wickets_fallen: wickets,
        };
        chase_features(&state, &ChaseDerived::from_state(&state))
    }

    // ── First innings ────────────────────────────────────────────────────────

    #[test]
    fn projection_at_start_uses_par_rate() {
        let total = RunRateProjection.predict(&first_innings(0.0, 0, 0)).unwrap();
        assert_relative_eq!(total, 160.0, epsilon = 1e-9);
    }

    #[test]
    fn projection_at_end_is_current_score() {
        let total = RunRateProjection.predict(&first_innings(20.0, 187, 6)).unwrap();
        assert_relative_eq!(total, 187.0, epsilon = 1e-9);
    }

    #[test]
    fn wickets_lower_projection() {
        let steady = RunRateProjection.predict(&first_innings(10.0, 90, 1)).unwrap();
        let collapse = RunRateProjection.predict(&first_innings(10.0, 90, 8)).unwrap();
        assert!(steady > collapse, "steady {:.1} collapse {:.1}", steady, collapse);
        assert!(collapse >= 90.0);
    }

    #[test]
    fn projection_rejects_chase_record() {
        assert!(RunRateProjection.predict(&chase(180, 90, 10.0, 2)).is_err());
    }

    // ── Chase ────────────────────────────────────────────────────────────────

    #[test]
    fn comfortable_chase_is_likely_win() {
        // 20 off 30 balls, 8 wickets in hand
        let p = ChaseLogistic.predict(&chase(180, 160, 15.0, 2)).unwrap();
        assert!(p.win > 0.9, "got {:.3}", p.win);
    }

    #[test]
    fn steep_chase_is_likely_loss() {
        // 60 off 18 balls, 2 wickets in hand
        let p = ChaseLogistic.predict(&chase(200, 140, 17.0, 8)).unwrap();
        assert!(p.win < 0.1, "got {:.3}", p.win);
    }

    #[test]
    fn level_rates_with_par_wickets_is_even() {
        // 80 off 60 balls at 8 an over, 5 down
        let p = ChaseLogistic.predict(&chase(160, 80, 10.0, 5)).unwrap();
        assert_relative_eq!(p.win, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn no_wickets_left_is_floor() {
        let p = ChaseLogistic.predict(&chase(160, 150, 18.0, 10)).unwrap();
        assert_relative_eq!(p.win, MIN_P, epsilon = 1e-12);
    }

    #[test]
    fn target_reached_is_ceiling() {
        let p = ChaseLogistic.predict(&chase(160, 160, 18.0, 4)).unwrap();
        assert_relative_eq!(p.win, MAX_P, epsilon = 1e-12);
    }

    #[test]
    fn chase_output_is_valid_distribution() {
        for target in [120, 160, 220] {
            for score in [0, 60, 119, 150] {
                for overs in [0.0, 5.3, 12.0, 19.5] {
                    for wickets in [0, 3, 7, 9] {
                        let p = ChaseLogistic.predict(&chase(target, score, overs, wickets)).unwrap();
                        assert!(p.malformed_reason().is_none(), "{:?}", p);
                        assert!(p.win >= MIN_P && p.win <= MAX_P);
                    }
                }
            }
        }
    }

    #[test]
    fn chase_rejects_first_innings_record() {
        assert!(ChaseLogistic.predict(&first_innings(10.0, 80, 2)).is_err());
    }
}
