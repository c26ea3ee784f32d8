use clap::Parser;

use rota::adapter::inbound::cli::command::{Cli, Commands};
use rota::adapter::inbound::cli::output::{self, OutputConfig};
use rota::adapter::inbound::cli::{check, solve};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let result = match &cli.command {
        Commands::Check(args) => check::execute_config(&args.config),
        Commands::Solve(args) => solve::execute(args).await,
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
