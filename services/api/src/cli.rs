use crate::demo::{run_demo, run_remediation, run_score, DemoArgs, RemediationArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hsse_audit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HSSE Audit Engine",
    about = "Score audit checklists and derive corrective-action deadlines",
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
    /// Score a checklist template against a set of responses
    Score(ScoreArgs),
    /// Suggest a corrective-action priority and target date for a finding
    Remediation(RemediationArgs),
    /// Walk through a sample site inspection and the CAPA it produces
    Demo(DemoArgs),
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
        Command::Score(args) => run_score(args),
        Command::Remediation(args) => run_remediation(args),
        Command::Demo(args) => run_demo(args),
    }
}
