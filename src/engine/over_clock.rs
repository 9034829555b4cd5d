//! Converts an overs reading in cricket notation into ball counts.
//!
//! `10.2` means ten complete overs plus two balls of the eleventh. The
//! fractional digit is read as a ball count, not as tenths of an over.

/// Balls in one over.
pub const BALLS_PER_OVER: i32 = 6;
/// Balls in a 20-over innings.
pub const INNINGS_BALLS: i32 = 120;

/// Balls bowled so far.
///
/// A fractional digit above 5 (e.g. `12.9`) is clamped to a completed over,
/// so `12.9` counts the same as `13.0`.
pub fn balls_bowled(overs_completed: f64) -> i32 {
    let whole = overs_completed.floor();
    let mut balls = ((overs_completed - whole) * 10.0).round_ties_even() as i32;
    if balls > 5 {
        balls = BALLS_PER_OVER;
    }
    whole as i32 * BALLS_PER_OVER + balls
}

/// Balls remaining in the innings. Not floored at zero; callers keep
/// `overs_completed` within `[0, 20]`.
pub fn balls_left(overs_completed: f64) -> i32 {
    INNINGS_BALLS - balls_bowled(overs_completed)
}

/// Remaining balls expressed as (decimal) overs.
pub fn overs_left(balls_left: i32) -> f64 {
    balls_left as f64 / BALLS_PER_OVER as f64
}
