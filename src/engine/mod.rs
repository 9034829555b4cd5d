pub mod derived;
pub mod features;
pub mod over_clock;
pub mod pipeline;
pub mod pressure;
pub mod rates;

pub use features::{FeatureRecord, FeatureValue};
pub use pipeline::{
    assess_pressure, Assessment, ChaseOutcome, Favourite, PredictionEngine, PressureOutcome,
    ScoreProjection, WinForecast,
};
pub use pressure::{pressure_index, PressureLevel, PressureResult};
