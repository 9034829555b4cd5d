use clap::{Args, Parser, Subcommand};

use crate::match_state::reference::{is_known_team, is_known_venue};
use crate::match_state::{ChaseState, FirstInningsState, PressureState, TossDecision};

const MAX_OVERS: f64 = 20.0;

/// IPL match predictor: projected totals, chase win probability and pressure index
#[derive(Parser, Debug, Clone)]
#[command(name = "ipl-predictor", version, about)]
pub struct Config {
    /// Print results as JSON instead of text
    #[arg(long, env = "OUTPUT_JSON", default_value = "false", global = true)]
    pub json: bool,

    /// Half-width of the reported first-innings score range (runs)
    #[arg(long, env = "SCORE_RANGE_MARGIN", default_value = "10", global = true)]
    pub range_margin: i32,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Mode {
    /// Project the final first-innings total
    FirstInnings(FirstInningsArgs),
    /// Win probability for the side chasing a target
    Chase(ChaseArgs),
    /// How tense the chase is right now (0–100)
    Pressure(PressureArgs),
}

/// Live innings progress shared by every mode
#[derive(Args, Debug, Clone)]
pub struct InningsArgs {
    /// Runs scored so far
    #[arg(long, default_value = "0")]
    pub score: i32,

    /// Overs completed in cricket notation (10.2 = ten overs and two balls)
    #[arg(long, default_value = "0.0")]
    pub overs: f64,

    /// Wickets fallen
    #[arg(long, default_value = "0")]
    pub wickets: i32,
}

#[derive(Args, Debug, Clone)]
pub struct FirstInningsArgs {
    /// Batting team
    #[arg(long)]
    pub batting: String,

    /// Bowling team
    #[arg(long)]
    pub bowling: String,

    /// Venue city
    #[arg(long)]
    pub venue: String,

    /// Team that won the toss
    #[arg(long)]
    pub toss_winner: String,

    /// What the toss winner chose
    #[arg(long, value_enum)]
    pub toss_decision: TossDecision,

    #[command(flatten)]
    pub innings: InningsArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ChaseArgs {
    /// Chasing team
    #[arg(long)]
    pub batting: String,

    /// Defending team
    #[arg(long)]
    pub bowling: String,

    /// Venue city
    #[arg(long)]
    pub venue: String,

    /// Target score
    #[arg(long)]
    pub target: i32,

    #[command(flatten)]
    pub innings: InningsArgs,
}

#[derive(Args, Debug, Clone)]
pub struct PressureArgs {
    /// Chasing team
    #[arg(long)]
    pub batting: String,

    /// Defending team
    #[arg(long)]
    pub bowling: String,

    /// Target score
    #[arg(long)]
    pub target: i32,

    #[command(flatten)]
    pub innings: InningsArgs,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.range_margin < 0 {
            anyhow::bail!("range_margin must not be negative");
        }
        match &self.mode {
            Mode::FirstInnings(args) => {
                validate_team(&args.batting)?;
                validate_team(&args.bowling)?;
                validate_team(&args.toss_winner)?;
                validate_venue(&args.venue)?;
                args.innings.validate()
            }
            Mode::Chase(args) => {
                validate_team(&args.batting)?;
                validate_team(&args.bowling)?;
                validate_venue(&args.venue)?;
                validate_target(args.target)?;
                args.innings.validate()
            }
            Mode::Pressure(args) => {
                validate_team(&args.batting)?;
                validate_team(&args.bowling)?;
                validate_target(args.target)?;
                args.innings.validate()
            }
        }
    }
}

impl InningsArgs {
    fn validate(&self) -> anyhow::Result<()> {
        if self.score < 0 {
            anyhow::bail!("score must not be negative");
        }
        if !(0.0..=MAX_OVERS).contains(&self.overs) {
            anyhow::bail!("overs must be between 0 and {}", MAX_OVERS);
        }
        if !(0..=10).contains(&self.wickets) {
            anyhow::bail!("wickets must be between 0 and 10");
        }
        Ok(())
    }
}

fn validate_team(name: &str) -> anyhow::Result<()> {
    if !is_known_team(name) {
        anyhow::bail!("unknown team '{}'", name);
    }
    Ok(())
}

fn validate_venue(name: &str) -> anyhow::Result<()> {
    if !is_known_venue(name) {
        anyhow::bail!("unknown venue '{}'", name);
    }
    Ok(())
}

fn validate_target(target: i32) -> anyhow::Result<()> {
    if target < 1 {
        anyhow::bail!("target must be at least 1");
    }
    Ok(())
}

impl From<FirstInningsArgs> for FirstInningsState {
    fn from(args: FirstInningsArgs) -> Self {
        FirstInningsState {
            batting_team: args.batting,
            bowling_team: args.bowling,
            venue: args.venue,
            toss_winner: args.toss_winner,
            toss_decision: args.toss_decision,
            overs_completed: args.innings.overs,
            current_score: args.innings.score,
            wickets_fallen: args.innings.wickets,
        }
    }
}

impl From<ChaseArgs> for ChaseState {
    fn from(args: ChaseArgs) -> Self {
        ChaseState {
            batting_team: args.batting,
            bowling_team: args.bowling,
            venue: args.venue,
            target: args.target,
            current_score: args.innings.score,
            overs_completed: args.innings.overs,
            wickets_fallen: args.innings.wickets,
        }
    }
}

impl From<PressureArgs> for PressureState {
    fn from(args: PressureArgs) -> Self {
        PressureState {
            batting_team: args.batting,
            bowling_team: args.bowling,
            target: args.target,
            current_score: args.innings.score,
            overs_completed: args.innings.overs,
            wickets_fallen: args.innings.wickets,
        }
    }
}
