use crate::demo::{run_demo, run_recommendation, DemoArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use heatquote::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Boiler Quote Platform",
    about = "Run the boiler installation quote service from the command line",
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
    /// Work with boiler and cylinder recommendations
    Quote {
        #[command(subcommand)]
        command: QuoteCommand,
    },
    /// Run an end-to-end CLI demo covering the quote workflow
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuoteCommand {
    /// Compute a recommendation for a property profile
    Recommend(RecommendArgs),
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
        Command::Quote {
            command: QuoteCommand::Recommend(args),
        } => run_recommendation(args),
        Command::Demo(args) => run_demo(args),
    }
}
