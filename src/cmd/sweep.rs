use super::ToolArgs;
use clap::{Args, ValueEnum};
use ergosurg::config::Config;
use ergosurg::core_types::{ParameterBounds, Range, ToolParameters};
use ergosurg::error::{ErgoError, ErgoResult};
use ergosurg::scorer::Scorer;
use rayon::prelude::*;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepParam {
    Diameter,
    Curvature,
    Length,
    Force,
}

impl SweepParam {
    fn range(&self) -> Range {
        let b = ParameterBounds::STANDARD;
        match self {
            Self::Diameter => b.diameter,
            Self::Curvature => b.curvature,
            Self::Length => b.handle_length,
            Self::Force => b.grip_force,
        }
    }

    fn apply(&self, mut p: ToolParameters, v: f32) -> ToolParameters {
        match self {
            Self::Diameter => p.diameter = v,
            Self::Curvature => p.curvature = v,
            Self::Length => p.handle_length = v,
            Self::Force => p.grip_force = v,
        }
        p
    }
}

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub tool: ToolArgs,

    #[arg(long, value_enum, default_value_t = SweepParam::Diameter)]
    pub param: SweepParam,

    /// Number of evenly spaced points across the slider range
    #[arg(long, default_value_t = 41)]
    pub steps: usize,

    /// CSV destination (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SweepRow {
    value: f32,
    comfort: f32,
    precision: f32,
    stability: f32,
    pressure: f32,
    score: f32,
}

pub fn run(args: SweepArgs, scorer: &Scorer) -> ErgoResult<()> {
    if args.steps < 2 {
        return Err(ErgoError::Config("--steps must be at least 2".to_string()));
    }

    let base = args.tool.resolve();
    let range = args.param.range();
    let span = range.max - range.min;
    let last = (args.steps - 1) as f32;

    let rows: Vec<SweepRow> = (0..args.steps)
        .into_par_iter()
        .map(|i| {
            let value = range.min + span * (i as f32 / last);
            let m = scorer.score(&args.param.apply(base, value));
            SweepRow {
                value,
                comfort: m.comfort,
                precision: m.precision,
                stability: m.stability,
                pressure: m.pressure,
                score: m.score,
            }
        })
        .collect();

    match &args.output {
        Some(path) => {
            let mut wtr = csv::Writer::from_path(path)?;
            for row in &rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
            info!("Wrote {} sweep points to {}", rows.len(), path.display());
        }
        None => {
            let mut wtr = csv::Writer::from_writer(io::stdout());
            for row in &rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}
