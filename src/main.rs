#![warn(clippy::pedantic)]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod comments;
mod constants;
mod event;
#[cfg(test)]
mod fixtures;
mod graphql;
mod runner;
mod traits;

#[tokio::main]
async fn main() -> ExitCode {
    cli::init_tracing();

    let cli = cli::Cli::parse();

    if let Err(error) = minimize_outdated(cli).await {
        tracing::error!("{error:?}");
        // marks the step as failed in the workflow summary
        println!("::error::{error:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn minimize_outdated(cli: cli::Cli) -> Result<()> {
    let github_api = cli.auth.try_into_octocrab()?;
    let event = event::Event::from_args(&cli.event)?;
    let result = runner::run(&github_api, &event, cli.dry_run).await?;
    tracing::info!("Done: {result}");
    Ok(())
}
