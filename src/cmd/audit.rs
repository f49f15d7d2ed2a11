use crate::reports;
use clap::Args;
use ergosurg::config::Config;
use ergosurg::optimizer::{SolverPlan, Strategy};
use ergosurg::presets::get_all_presets;
use ergosurg::scorer::Scorer;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    #[command(flatten)]
    pub config: Config,

    /// Only audit presets whose name contains this text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Also score each preset after every solver strategy
    #[arg(long, default_value_t = false)]
    pub with_solver: bool,
}

pub fn run(args: AuditArgs, scorer: &Scorer) {
    let mut results = Vec::new();

    println!("\n🔎 === TOOL AUDIT === 🔎");
    for (tool, params) in get_all_presets() {
        let name = tool.to_string();
        if let Some(ref filter) = args.filter {
            if !name.to_lowercase().contains(&filter.to_lowercase()) {
                continue;
            }
        }

        results.push((name.clone(), scorer.score_debug(&params)));

        if args.with_solver {
            for strategy in Strategy::iter() {
                let plan =
                    SolverPlan::from_start(params, strategy, &scorer.weights, &args.config.solver);
                let solved = plan.final_state();
                results.push((format!("{} +{}", name, strategy), scorer.score_debug(&solved)));
            }
        }
    }

    // Best first
    results.sort_by(|a, b| b.1.metrics.score.total_cmp(&a.1.metrics.score));

    reports::print_scoring_report(&results);
    reports::print_breakdown_report(&results, &scorer.weights);
}
