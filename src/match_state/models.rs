use serde::Serialize;

/// Wickets available to a batting side in one innings.
pub const WICKETS_PER_INNINGS: i32 = 10;

/// What the toss winner chose to do first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Field,
}

impl TossDecision {
    /// Category label the first-innings model was trained on.
    pub fn as_str(&self) -> &'static str {
        match self {
            TossDecision::Bat => "bat",
            TossDecision::Field => "field",
        }
    }
}

/// Observed state of a first innings in progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirstInningsState {
    pub batting_team: String,
    pub bowling_team: String,
    /// Venue city, passed to the model as `city`
    pub venue: String,
    pub toss_winner: String,
    pub toss_decision: TossDecision,
    /// Cricket notation: `10.2` means ten overs and two balls
    pub overs_completed: f64,
    pub current_score: i32,
    pub wickets_fallen: i32,
}

/// Observed state of a second innings chasing `target`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChaseState {
    pub batting_team: String,
    pub bowling_team: String,
    pub venue: String,
    pub target: i32,
    pub current_score: i32,
    pub overs_completed: f64,
    pub wickets_fallen: i32,
}

impl ChaseState {
    /// The chasing side has passed the target; no prediction is needed.
    pub fn is_already_won(&self) -> bool {
        self.current_score > self.target
    }
}

/// Inputs for the pressure index. Same as a chase without a venue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureState {
    pub batting_team: String,
    pub bowling_team: String,
    pub target: i32,
    pub current_score: i32,
    pub overs_completed: f64,
    pub wickets_fallen: i32,
}

impl PressureState {
    pub fn is_already_won(&self) -> bool {
        self.current_score > self.target
    }
}
