use serde::Serialize;
use tracing::debug;

use super::over_clock::{balls_left, overs_left};
use super::rates::{current_run_rate, required_run_rate};
use crate::match_state::{ChaseState, FirstInningsState, PressureState, WICKETS_PER_INNINGS};

/// Quantities derived from a first-innings state. Recomputed per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FirstInningsDerived {
    pub balls_left: i32,
    pub overs_left: f64,
    pub crr: f64,
}

impl FirstInningsDerived {
    pub fn from_state(state: &FirstInningsState) -> Self {
        let balls_left = balls_left(state.overs_completed);
        let derived = FirstInningsDerived {
            balls_left,
            overs_left: overs_left(balls_left),
            crr: current_run_rate(state.current_score, state.overs_completed),
        };
        debug!(
            "First innings derived: balls_left={} overs_left={:.3} crr={:.3}",
            derived.balls_left, derived.overs_left, derived.crr
        );
        derived
    }
}

/// Quantities derived from a chase. Only meaningful while the chase is
/// undecided; callers check `is_already_won` first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChaseDerived {
    pub runs_left: i32,
    pub balls_left: i32,
    pub wickets_remaining: i32,
    pub crr: f64,
    pub rrr: f64,
}

impl ChaseDerived {
    pub fn from_state(state: &ChaseState) -> Self {
        Self::compute(
            state.target,
            state.current_score,
            state.overs_completed,
            state.wickets_fallen,
        )
    }

    pub fn from_pressure_state(state: &PressureState) -> Self {
        Self::compute(
            state.target,
            state.current_score,
            state.overs_completed,
            state.wickets_fallen,
        )
    }

    fn compute(target: i32, current_score: i32, overs_completed: f64, wickets_fallen: i32) -> Self {
        let runs_left = target - current_score;
        let balls_left = balls_left(overs_completed);
        let derived = ChaseDerived {
            runs_left,
            balls_left,
            wickets_remaining: WICKETS_PER_INNINGS - wickets_fallen,
            crr: current_run_rate(current_score, overs_completed),
            rrr: required_run_rate(runs_left, balls_left),
        };
        debug!(
            "Chase derived: runs_left={} balls_left={} wickets={} crr={:.3} rrr={:.3}",
            derived.runs_left, derived.balls_left, derived.wickets_remaining, derived.crr, derived.rrr
        );
        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_state::TossDecision;
    use approx::assert_relative_eq;

    #[test]
    fn first_innings_mid_innings() {
        let state = FirstInningsState {
            batting_team: "Punjab Kings".into(),
            bowling_team: "Gujarat Titans".into(),
            venue: "Mohali".into(),
            toss_winner: "Gujarat Titans".into(),
            toss_decision: TossDecision::Field,
            overs_completed: 10.2,
            current_score: 80,
            wickets_fallen: 2,
        };
        let d = FirstInningsDerived::from_state(&state);
        assert_eq!(d.balls_left, 58);
        assert_relative_eq!(d.overs_left, 58.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(d.crr, 80.0 / 10.2, epsilon = 1e-12);
    }

    #[test]
    fn chase_needs_ten_an_over() {
        let state = ChaseState {
            batting_team: "Delhi Capitals".into(),
            bowling_team: "Rajasthan Royals".into(),
            venue: "Jaipur".into(),
            target: 171,
            current_score: 151,
            overs_completed: 18.0,
            wickets_fallen: 7,
        };
        let d = ChaseDerived::from_state(&state);
        assert_eq!(d.runs_left, 20);
        assert_eq!(d.balls_left, 12);
        assert_eq!(d.wickets_remaining, 3);
        assert_relative_eq!(d.rrr, 10.0, epsilon = 1e-12);
        assert_relative_eq!(d.crr, 151.0 / 18.0, epsilon = 1e-12);
    }

    #[test]
    fn chase_at_start_has_zero_crr() {
        let state = PressureState {
            batting_team: "Delhi Capitals".into(),
            bowling_team: "Rajasthan Royals".into(),
            target: 160,
            current_score: 0,
            overs_completed: 0.0,
            wickets_fallen: 0,
        };
        let d = ChaseDerived::from_pressure_state(&state);
        assert_relative_eq!(d.crr, 0.0);
        assert_relative_eq!(d.rrr, 8.0, epsilon = 1e-12);
        assert_eq!(d.balls_left, 120);
    }
}
