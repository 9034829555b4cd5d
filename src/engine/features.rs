//! Feature records handed to the prediction models.
//!
//! Field names and their order are the models' input contract and must not
//! change: the models were fitted on columns with exactly these names,
//! including the odd capitalisation of `Overs_left` and `Wicket_fallen`.

use anyhow::{anyhow, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::derived::{ChaseDerived, FirstInningsDerived};
use crate::match_state::{ChaseState, FirstInningsState};

pub const FIRST_INNINGS_SCHEMA: [&str; 10] = [
    "batting_team",
    "bowling_team",
    "city",
    "toss_winner",
    "toss_decision",
    "Overs_left",
    "balls_left",
    "current_score",
    "Wicket_fallen",
    "CRR",
];

pub const CHASE_SCHEMA: [&str; 9] = [
    "batting_team",
    "bowling_team",
    "city",
    "runs_left",
    "balls_left",
    "wickets",
    "runs_target",
    "CRR",
    "RRR",
];

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl FeatureValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Int(v) => Some(*v as f64),
            FeatureValue::Float(v) => Some(*v),
            FeatureValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(v: &str) -> Self {
        FeatureValue::Text(v.to_string())
    }
}

impl From<i32> for FeatureValue {
    fn from(v: i32) -> Self {
        FeatureValue::Int(v as i64)
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Float(v)
    }
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FeatureValue::Text(s) => serializer.serialize_str(s),
            FeatureValue::Int(v) => serializer.serialize_i64(*v),
            FeatureValue::Float(v) => serializer.serialize_f64(*v),
        }
    }
}

/// Ordered field → value mapping for a single prediction row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureRecord {
    fields: Vec<(&'static str, FeatureValue)>,
}

impl FeatureRecord {
    fn with(mut self, name: &'static str, value: impl Into<FeatureValue>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Numeric field lookup for model implementations. A missing or
    /// non-numeric field is a schema mismatch.
    pub fn number(&self, name: &str) -> Result<f64> {
        match self.get(name) {
            Some(value) => value
                .as_f64()
                .ok_or_else(|| anyhow!("feature '{}' is not numeric", name)),
            None => Err(anyhow!("feature '{}' missing from record", name)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for FeatureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Row for the first-innings total regressor.
pub fn first_innings_features(
    state: &FirstInningsState,
    derived: &FirstInningsDerived,
) -> FeatureRecord {
    FeatureRecord::default()
        .with("batting_team", state.batting_team.as_str())
        .with("bowling_team", state.bowling_team.as_str())
        .with("city", state.venue.as_str())
        .with("toss_winner", state.toss_winner.as_str())
        .with("toss_decision", state.toss_decision.as_str())
        .with("Overs_left", derived.overs_left)
        .with("balls_left", derived.balls_left)
        .with("current_score", state.current_score)
        .with("Wicket_fallen", state.wickets_fallen)
        .with("CRR", derived.crr)
}

/// Row for the chase win-probability classifier.
pub fn chase_features(state: &ChaseState, derived: &ChaseDerived) -> FeatureRecord {
    FeatureRecord::default()
        .with("batting_team", state.batting_team.as_str())
        .with("bowling_team", state.bowling_team.as_str())
        .with("city", state.venue.as_str())
        .with("runs_left", derived.runs_left)
        .with("balls_left", derived.balls_left)
        .with("wickets", derived.wickets_remaining)
        .with("runs_target", state.target)
        .with("CRR", derived.crr)
        .with("RRR", derived.rrr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_state::TossDecision;
    use approx::assert_relative_eq;

    fn first_innings_state() -> FirstInningsState {
        FirstInningsState {
            batting_team: "Kolkata Knight Riders".into(),
            bowling_team: "Sunrisers Hyderabad".into(),
            venue: "Kolkata".into(),
            toss_winner: "Sunrisers Hyderabad".into(),
            toss_decision: TossDecision::Field,
            overs_completed: 10.2,
            current_score: 80,
            wickets_fallen: 2,
        }
    }

    fn chase_state() -> ChaseState {
        ChaseState {
            batting_team: "Lucknow Super Giants".into(),
            bowling_team: "Mumbai Indians".into(),
            venue: "Lucknow".into(),
            target: 190,
            current_score: 120,
            overs_completed: 14.3,
            wickets_fallen: 4,
        }
    }

    #[test]
    fn first_innings_record_matches_schema_order() {
        let state = first_innings_state();
        let record = first_innings_features(&state, &FirstInningsDerived::from_state(&state));
        assert_eq!(record.names().collect::<Vec<_>>(), FIRST_INNINGS_SCHEMA.to_vec());
    }

    #[test]
    fn first_innings_record_values() {
        let state = first_innings_state();
        let record = first_innings_features(&state, &FirstInningsDerived::from_state(&state));
        assert_eq!(record.get("city").and_then(|v| v.as_str()), Some("Kolkata"));
        assert_eq!(record.get("toss_decision").and_then(|v| v.as_str()), Some("field"));
        assert_eq!(record.get("balls_left"), Some(&FeatureValue::Int(58)));
        assert_eq!(record.get("Wicket_fallen"), Some(&FeatureValue::Int(2)));
        assert_relative_eq!(record.number("CRR").unwrap(), 80.0 / 10.2, epsilon = 1e-12);
        assert!(record.get("RRR").is_none());
    }

    #[test]
    fn chase_record_matches_schema_order() {
        let state = chase_state();
        let record = chase_features(&state, &ChaseDerived::from_state(&state));
        assert_eq!(record.names().collect::<Vec<_>>(), CHASE_SCHEMA.to_vec());
        assert_eq!(record.len(), 9);
    }

    #[test]
    fn chase_record_values() {
        let state = chase_state();
        let record = chase_features(&state, &ChaseDerived::from_state(&state));
        // 14.3 overs = 87 balls bowled
        assert_eq!(record.number("balls_left").unwrap(), 33.0);
        assert_eq!(record.number("runs_left").unwrap(), 70.0);
        assert_eq!(record.number("wickets").unwrap(), 6.0);
        assert_eq!(record.number("runs_target").unwrap(), 190.0);
        assert_relative_eq!(record.number("RRR").unwrap(), 70.0 * 6.0 / 33.0, epsilon = 1e-12);
    }

    #[test]
    fn number_rejects_missing_and_text_fields() {
        let state = chase_state();
        let record = chase_features(&state, &ChaseDerived::from_state(&state));
        assert!(record.number("Overs_left").is_err());
        assert!(record.number("city").is_err());
    }

    #[test]
    fn serializes_in_schema_order() {
        let state = chase_state();
        let record = chase_features(&state, &ChaseDerived::from_state(&state));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with(r#"{"batting_team":"Lucknow Super Giants","bowling_team":"Mumbai Indians","city":"Lucknow","runs_left":70,"balls_left":33,"wickets":6,"runs_target":190,"#));
        let batting = json.find("batting_team").unwrap();
        let rrr = json.find("RRR").unwrap();
        assert!(batting < rrr);
    }
}
