mod config;
mod github;
mod http;
mod logger;
mod payload;
mod target;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Credentials, Settings};
use github::github_client::GithubClient;
use payload::Payload;
use std::path::PathBuf;
use target::Target;

#[derive(Parser)]
#[command(
    name = "ghpublish",
    version,
    about = "Publish a local file to a GitHub repository",
    long_about = "Creates the repository when it does not exist yet, then creates \
    or updates the file at the given path and prints the resulting commit sha."
)]
struct Cli {
    #[arg(index = 1, help = "Owner of the repository")]
    owner: String,
    #[arg(index = 2, help = "Personal access token used to authenticate")]
    token: String,
    #[arg(index = 3, help = "Local file to publish")]
    file: PathBuf,
    #[arg(index = 4, help = "Destination as <repository>/<path>")]
    target: String,
    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
    #[arg(short, long, help = "Commit message, overrides the settings file")]
    message: Option<String>,
    #[arg(short, long, help = "Settings file, defaults to ghpublish.yaml")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(cli.verbose)?;

    let target = cli
        .target
        .parse::<Target>()
        .context("Invalid destination")?;

    let mut settings = Settings::load(cli.config.as_deref())
        .await
        .context("Cannot load settings")?;
    if let Some(message) = cli.message {
        settings.commit_message = message;
    }

    let payload = Payload::read(&cli.file).await?;

    let credentials = Credentials::new(cli.owner, cli.token);
    let client =
        GithubClient::new(&credentials, &settings).context("Cannot build the github client")?;

    let outcome = github::publish(&client, &credentials.owner, &target, &payload)
        .await
        .context("Cannot publish the file")?;

    log::info!(
        "{} {} in {}{}",
        if outcome.file_created { "Created" } else { "Updated" },
        target.path(),
        target.repo(),
        if outcome.repository_created {
            " (new repository)"
        } else {
            ""
        }
    );
    println!("{}", outcome.commit_sha);

    Ok(())
}
