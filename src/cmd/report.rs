use super::ToolArgs;
use crate::reports;
use clap::Args;
use ergosurg::config::Config;
use ergosurg::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub tool: ToolArgs,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: ReportArgs, scorer: &Scorer) {
    let params = args.tool.resolve();
    let details = scorer.score_debug(&params);
    let reference = reports::generate_reference(args.seed);
    reports::print_analysis_report(args.tool.preset.project_name(), reference, &params, &details);
}
