use super::ToolArgs;
use clap::Args;
use ergosurg::config::Config;
use ergosurg::error::ErgoResult;
use ergosurg::presets::KnownTool;
use ergosurg::render;
use ergosurg::scorer::Scorer;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub tool: ToolArgs,

    /// Handle illustration destination
    #[arg(short, long, default_value = "handle.svg")]
    pub output: PathBuf,

    /// Optional radar chart destination
    #[arg(long)]
    pub radar: Option<PathBuf>,

    /// Overlay this preset as a dashed ghost
    #[arg(long)]
    pub baseline: Option<KnownTool>,
}

pub fn run(args: RenderArgs, scorer: &Scorer) -> ErgoResult<()> {
    let params = args.tool.resolve();
    let baseline = args.baseline.map(|t| t.params());

    let metrics = scorer.score(&params);

    fs::write(
        &args.output,
        render::handle_svg(&params, &metrics, baseline.as_ref()),
    )?;
    info!("Handle written to {}", args.output.display());
    if metrics.pressure > render::PRESSURE_ALARM_KPA {
        warn!("Contact pressure {:.1} kPa exceeds the alarm threshold", metrics.pressure);
    }

    if let Some(path) = &args.radar {
        fs::write(path, render::radar_svg(&metrics))?;
        info!("Radar written to {}", path.display());
    }
    Ok(())
}
