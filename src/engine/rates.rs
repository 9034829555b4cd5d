//! Run-rate calculations.
//!
//! Both rates resolve to `0.0` instead of dividing by zero: at the start of an
//! innings there is no current rate, and with no balls left there is no
//! achievable required rate.

/// Runs per over so far.
///
/// Divides by the raw overs reading (`80 / 10.2`), matching how the models'
/// training data was prepared.
pub fn current_run_rate(score: i32, overs_completed: f64) -> f64 {
    if overs_completed > 0.0 {
        score as f64 / overs_completed
    } else {
        0.0
    }
}

/// Runs per over needed from the remaining balls.
pub fn required_run_rate(runs_left: i32, balls_left: i32) -> f64 {
    if balls_left > 0 {
        runs_left as f64 * 6.0 / balls_left as f64
    } else {
        0.0
    }
}
