//! Pressure index: how tense is the chase right now?
//!
//! A fixed weighted blend of three normalised pressures, independent of any
//! learned model:
//! - **Scoring rate**: required run rate against a ceiling of 12 an over
//! - **Wickets**: share of the batting side already dismissed
//! - **Time**: share of the innings already bowled
//!
//! The weighted index is scaled to 0–100 and bucketed into three levels.

use serde::Serialize;
use std::fmt;

use super::over_clock::INNINGS_BALLS;
use crate::match_state::WICKETS_PER_INNINGS;

/// Required run rate at which rate pressure saturates.
const RRR_CEILING: f64 = 12.0;

const RRR_WEIGHT: f64 = 0.40;
const WICKET_WEIGHT: f64 = 0.35;
const BALLS_WEIGHT: f64 = 0.25;

/// Scores below this are low pressure.
const MEDIUM_FROM: f64 = 40.0;
/// Scores at or above this are high pressure.
const HIGH_FROM: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressureLevel {
    Low,
    Medium,
    High,
}

impl PressureLevel {
    /// Each tier includes its lower bound: 40.0 is Medium, 70.0 is High.
    pub fn from_score(score: f64) -> Self {
        if score < MEDIUM_FROM {
            PressureLevel::Low
        } else if score < HIGH_FROM {
            PressureLevel::Medium
        } else {
            PressureLevel::High
        }
    }
}

impl fmt::Display for PressureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PressureLevel::Low => "Low Pressure",
            PressureLevel::Medium => "Medium Pressure",
            PressureLevel::High => "High Pressure",
        };
        f.write_str(label)
    }
}

/// The three normalised inputs, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PressureComponents {
    pub rrr: f64,
    pub wickets: f64,
    pub balls: f64,
}

impl PressureComponents {
    pub fn new(rrr: f64, balls_left: i32, wickets_remaining: i32) -> Self {
        PressureComponents {
            // Floor only matters for callers passing a negative RRR directly
            rrr: (rrr / RRR_CEILING).clamp(0.0, 1.0),
            wickets: 1.0 - wickets_remaining as f64 / WICKETS_PER_INNINGS as f64,
            balls: 1.0 - balls_left as f64 / INNINGS_BALLS as f64,
        }
    }

    /// Weighted blend in [0, 1].
    pub fn index(&self) -> f64 {
        RRR_WEIGHT * self.rrr + WICKET_WEIGHT * self.wickets + BALLS_WEIGHT * self.balls
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PressureResult {
    /// 0–100, rounded to two decimals
    pub score: f64,
    pub label: PressureLevel,
}

pub fn pressure_index(rrr: f64, balls_left: i32, wickets_remaining: i32) -> PressureResult {
    let components = PressureComponents::new(rrr, balls_left, wickets_remaining);
    let score = round_2dp(components.index() * 100.0);
    PressureResult {
        score,
        label: PressureLevel::from_score(score),
    }
}

fn round_2dp(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
