use crate::commands::{run_batch, run_questions, run_score, BatchArgs, QuestionsArgs, ScoreArgs};
use crate::infra::Session;
use clap::{Parser, Subcommand};
use respira::config::AppConfig;
use respira::error::AppError;
use respira::telemetry;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "respira",
    about = "Score respiratory screening questionnaires from the command line",
    version
)]
struct Cli {
    /// JSON question catalog to use instead of the built-in questionnaire
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the question catalog
    Questions(QuestionsArgs),
    /// Validate and score a single set of answers
    Score(ScoreArgs),
    /// Score every row of a CSV export and summarise the results
    Batch(BatchArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "configuration loaded");

    let session = Session::open(&config, cli.catalog)?;

    match cli.command {
        Command::Questions(args) => run_questions(&session, args),
        Command::Score(args) => run_score(&session, args),
        Command::Batch(args) => run_batch(&session, args),
    }
}
