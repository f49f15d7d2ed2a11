use super::ToolArgs;
use crate::reports;
use clap::Args;
use ergosurg::config::Config;
use ergosurg::core_types::ToolParameters;
use ergosurg::error::{ErgoError, ErgoResult};
use ergosurg::optimizer::{ProgressCallback, Solver, SolverOutcome, SolverPlan, Strategy};
use ergosurg::scorer::Scorer;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub tool: ToolArgs,

    #[arg(short = 's', long, default_value = "balanced")]
    pub strategy: Strategy,
}

struct TickPrinter {
    scorer: Arc<Scorer>,
    report_every: usize,
}

impl ProgressCallback for TickPrinter {
    fn on_tick(&self, tick: usize, params: &ToolParameters) -> bool {
        if tick % self.report_every == 0 {
            let m = self.scorer.score(params);
            info!(
                "Tick {:3} | d={:5.1} c={:4.1} l={:5.1} | Score: {:.1}",
                tick, params.diameter, params.curvature, params.handle_length, m.score
            );
        }
        true
    }
}

fn closing_line(outcome: &SolverOutcome) -> String {
    if outcome.completed {
        format!(
            "Optimization converged. Material set to {}.",
            outcome.params.material.display_name()
        )
    } else {
        format!("Optimization interrupted after {} steps.", outcome.ticks_run)
    }
}

pub fn run(args: SolveArgs, scorer: Arc<Scorer>, debug: bool) -> ErgoResult<()> {
    let start = args.tool.resolve();
    let plan = SolverPlan::from_start(start, args.strategy, &scorer.weights, &args.config.solver);
    let tick = Duration::from_millis(args.config.solver.solver_tick_ms);

    println!(
        "\n🤖 AI Solver: Optimizing for {}...",
        args.strategy.to_string().to_uppercase()
    );

    let printer = TickPrinter {
        scorer: scorer.clone(),
        report_every: if debug { 1 } else { 5 },
    };
    let handle = Solver::new(plan, tick).spawn(printer);
    let outcome: SolverOutcome = handle
        .join()
        .ok_or_else(|| ErgoError::Solver("solver thread panicked before reporting".to_string()))?;

    let before = scorer.score(&start);
    let after = scorer.score(&outcome.params);

    reports::print_parameters("BASELINE", &start);
    reports::print_parameters("OPTIMIZED", &outcome.params);
    reports::print_comparison_report(&before, &after, &after.delta_from(&before));

    println!("\n=== 🏆 FINAL RESULT ===");
    println!("Steps: {}", outcome.ticks_run);
    println!("Score: {:.2}", after.score);
    if !outcome.completed {
        warn!("Solver stopped early after {} ticks", outcome.ticks_run);
    }
    println!("{}", closing_line(&outcome));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ergosurg::core_types::Material;

    fn outcome(completed: bool, ticks_run: usize) -> SolverOutcome {
        SolverOutcome {
            params: ToolParameters::builder().material(Material::Silicone).build(),
            ticks_run,
            completed,
        }
    }

    #[test]
    fn converged_line_only_for_completed_runs() {
        assert_eq!(
            closing_line(&outcome(true, 25)),
            "Optimization converged. Material set to Silicone Overmold."
        );
        assert_eq!(
            closing_line(&outcome(false, 7)),
            "Optimization interrupted after 7 steps."
        );
    }
}
