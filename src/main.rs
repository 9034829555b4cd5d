use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use ipl_predictor::config::{Config, Mode};
use ipl_predictor::engine::{assess_pressure, PredictionEngine};
use ipl_predictor::predictor::{ChaseLogistic, Predictor, RunRateProjection};
use ipl_predictor::report::Report;

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let engine = PredictionEngine::new(RunRateProjection, ChaseLogistic);

    let report = match config.mode.clone() {
        Mode::FirstInnings(args) => {
            info!("First innings projection using {}", RunRateProjection.name());
            let batting_team = args.batting.clone();
            let assessment = engine.predict_first_innings(args.into())?;
            Report::first_innings(&batting_team, &assessment, config.range_margin)
        }
        Mode::Chase(args) => {
            info!("Chase prediction using {}", ChaseLogistic.name());
            let (batting_team, bowling_team) = (args.batting.clone(), args.bowling.clone());
            let outcome = engine.predict_chase(args.into())?;
            Report::chase(&batting_team, &bowling_team, &outcome)
        }
        Mode::Pressure(args) => {
            let outcome = assess_pressure(args.into())?;
            Report::pressure(&outcome)
        }
    };

    println!("{}", report.render(config.json)?);

    if report.prediction_failed {
        error!("Prediction failed; derived features were still reported");
    }

    Ok(())
}
