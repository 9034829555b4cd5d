pub mod models;
pub mod reference;

pub use models::{ChaseState, FirstInningsState, PressureState, TossDecision, WICKETS_PER_INNINGS};
