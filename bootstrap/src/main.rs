mod args;
mod command;

use crate::args::CommonArgs;
use crate::command::Command;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::util::SubscriberInitExt;

/// Manage the roles of a Discord guild
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common_args: CommonArgs,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false)
        .finish()
        .init();

    let Cli {
        common_args,
        command,
    } = Cli::parse();

    command.run(common_args).await.map(ExitCode::from)
}
