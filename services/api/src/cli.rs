use crate::report::{run_batch_report, run_score_report, BatchArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nutri_score::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Nutri-Score Grader",
    about = "Grade foods and beverages from their nutrient profile, over HTTP or the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Grade a single product from command-line measurements
    Score(ScoreArgs),
    /// Grade every product in a CSV export
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score_report(args),
        Command::Batch(args) => run_batch_report(args),
    }
}
