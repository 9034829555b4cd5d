//! Match-state feature engine for IPL outcome estimates.
//!
//! Turns an observed match state (overs, score, wickets, target) into the
//! feature rows consumed by a first-innings total regressor and a chase
//! win-probability classifier, and computes a model-free pressure index.

pub mod config;
pub mod engine;
pub mod error;
pub mod match_state;
pub mod predictor;
pub mod report;

pub use error::EngineError;
