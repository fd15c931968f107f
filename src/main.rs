mod config;
mod github;
mod http;
mod logger;
mod output;
mod release;

use anyhow::{Context, Result};
use config::Config;
use github::GithubClient;
use output::ActionsOutput;
use release::{Outcome, ReleaseOrchestrator};

#[tokio::main]
async fn main() -> Result<()> {
    logger::init().context("Cannot initialize the logger")?;

    log::info!("Starting");
    let config = Config::load();

    let client = GithubClient::new(
        config.context.token.to_owned().unwrap_or_default(),
        &config.context.api_url,
    );
    let mut orchestrator = ReleaseOrchestrator::new(client, ActionsOutput::from_env());

    match orchestrator.run(&config).await {
        Outcome::Skipped => log::info!("No need for a new release"),
        Outcome::Created(release) => log::info!("Release {} created", release.html_url),
        Outcome::Failed(message) => log::debug!("Release failed: {}", message),
    }

    if orchestrator.sink().has_failed() {
        std::process::exit(1);
    }

    Ok(())
}
