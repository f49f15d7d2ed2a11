use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use ergosurg::config::{Config, ScoringWeights};
use ergosurg::error::ErgoResult;
use ergosurg::scorer::Scorer;
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON weights profile; explicit weight flags still win
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Evaluate(cmd::evaluate::EvaluateArgs),
    Solve(cmd::solve::SolveArgs),
    Audit(cmd::audit::AuditArgs),
    Sweep(cmd::sweep::SweepArgs),
    Render(cmd::render::RenderArgs),
    Report(cmd::report::ReportArgs),
}

impl Commands {
    fn config(&self) -> &Config {
        match self {
            Self::Evaluate(a) => &a.config,
            Self::Solve(a) => &a.config,
            Self::Audit(a) => &a.config,
            Self::Sweep(a) => &a.config,
            Self::Render(a) => &a.config,
            Self::Report(a) => &a.config,
        }
    }
}

fn resolve_weights(cli: &Cli, matches: &clap::ArgMatches) -> ErgoResult<ScoringWeights> {
    let cli_weights = &cli.command.config().weights;

    let Some(path) = &cli.weights else {
        warn!("⚠️  No external weights loaded. Using embedded defaults.");
        cli_weights.validate()?;
        return Ok(cli_weights.clone());
    };

    info!("⚖️  Loading Weights from: {}", path);
    let mut file_weights = ScoringWeights::load_from_file(path)?;

    // Explicit flags live in the subcommand's matches, not the root
    if let Some((_, sub_matches)) = matches.subcommand() {
        file_weights.merge_from_cli(cli_weights, sub_matches);
    }
    // Flags can undo what the file passed
    file_weights.validate()?;
    Ok(file_weights)
}

fn execute(cli: Cli, weights: ScoringWeights) -> ErgoResult<()> {
    let scorer = Arc::new(Scorer::new(weights));
    let debug = cli.debug;

    match cli.command {
        Commands::Evaluate(args) => cmd::evaluate::run(args, &scorer, debug),
        Commands::Solve(args) => cmd::solve::run(args, scorer, debug),
        Commands::Audit(args) => {
            cmd::audit::run(args, &scorer);
            Ok(())
        }
        Commands::Sweep(args) => cmd::sweep::run(args, &scorer),
        Commands::Render(args) => cmd::render::run(args, &scorer),
        Commands::Report(args) => {
            cmd::report::run(args, &scorer);
            Ok(())
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing ErgoSurg...");

    let weights = resolve_weights(&cli, &matches).unwrap_or_else(|e| {
        error!("❌ FATAL ERROR LOADING WEIGHTS: {}", e);
        process::exit(1);
    });

    if let Err(e) = execute(cli, weights) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
