use super::file_handler::FileHandler;
use crate::{github::github_client::GithubClient, http::Error};

pub struct RepositoryHandler<'c> {
    client: &'c GithubClient,
    owner: String,
    repo: String,
}

impl<'c> RepositoryHandler<'c> {
    pub fn new(client: &'c GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.repo
    }

    pub async fn exists(&self) -> Result<bool, Error> {
        self.client.repository_exists(&self.owner, &self.repo).await
    }

    pub async fn create(&self) -> Result<(), Error> {
        self.client.create_repository(&self.owner, &self.repo).await
    }

    pub fn file<'p>(&self, path: impl IntoIterator<Item = &'p str>) -> FileHandler<'c> {
        FileHandler::new(self.client, &self.owner, &self.repo, path)
    }
}
