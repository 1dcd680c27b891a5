pub mod github_client;
mod handler;

use self::github_client::GithubClient;
use crate::{payload::Payload, target::Target};
use anyhow::{Context, Result};

/// What a publish run did on the remote side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    pub commit_sha: String,
    pub repository_created: bool,
    pub file_created: bool,
}

/// Makes sure the target repository exists and that the file at the target
/// path holds `payload`. Every step depends on the previous one, so the
/// first failure aborts the run.
pub async fn publish(
    client: &GithubClient,
    owner: &str,
    target: &Target,
    payload: &Payload,
) -> Result<PublishOutcome> {
    let repo = client.repo(owner, target.repo());

    log::info!("Checking repository {}/{}", repo.owner(), repo.name());
    let repository_created = if repo.exists().await.context("Cannot check the repository")? {
        false
    } else {
        log::info!("Creating repository {}", repo.name());
        repo.create().await.context("Cannot create the repository")?;
        true
    };

    let file = repo.file(target.path_segments());

    let revision = file
        .revision()
        .await
        .with_context(|| format!("Cannot look up {}", target.path()))?;

    let (commit_sha, file_created) = match revision {
        Some(sha) => {
            log::info!("Updating {}", target.path());
            let commit = file
                .update(payload, &sha)
                .await
                .with_context(|| format!("Cannot update {}", target.path()))?;
            (commit, false)
        }
        None => {
            log::info!("Creating {}", target.path());
            let commit = file
                .create(payload)
                .await
                .with_context(|| format!("Cannot create {}", target.path()))?;
            (commit, true)
        }
    };

    Ok(PublishOutcome {
        commit_sha,
        repository_created,
        file_created,
    })
}
