use super::ToolArgs;
use crate::reports;
use clap::Args;
use ergosurg::config::Config;
use ergosurg::error::ErgoResult;
use ergosurg::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub tool: ToolArgs,

    /// Print the metrics as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: EvaluateArgs, scorer: &Scorer, debug: bool) -> ErgoResult<()> {
    let params = args.tool.resolve();
    let details = scorer.score_debug(&params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details.metrics)?);
        return Ok(());
    }

    let name = args.tool.preset.to_string();
    reports::print_parameters(&name, &params);
    let results = vec![(name, details)];
    reports::print_scoring_report(&results);
    if debug {
        reports::print_breakdown_report(&results, &scorer.weights);
    }
    Ok(())
}
